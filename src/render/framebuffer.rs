//! Owned pixel buffer and image file output.

use std::path::Path;

use crate::colors::Color;

/// A width x height grid of color samples, the render target.
///
/// Pixels are stored row-major. Writes outside the buffer are silently
/// ignored, so drawing code may use unclamped coordinates.
pub struct Framebuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a buffer with every pixel set to `clear_color`.
    pub fn new(width: u32, height: u32, clear_color: Color) -> Self {
        Self {
            pixels: vec![clear_color; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.pixels[index] = color;
        }
    }

    /// Color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Encode the buffer to an image file.
    ///
    /// The format is chosen from the path extension (TGA, PNG, BMP, ...).
    /// Pixels are handed to the encoder in RGBA channel order; the BGRA
    /// reordering happens only at this boundary.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (pixel, color) in img.pixels_mut().zip(&self.pixels) {
            *pixel = image::Rgba(color.to_rgba());
        }
        img.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn new_buffer_is_cleared() {
        let framebuffer = Framebuffer::new(4, 3, colors::BLUE);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(framebuffer.get(x, y), Some(colors::BLUE));
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut framebuffer = Framebuffer::new(8, 8, colors::BLACK);
        framebuffer.set(3, 5, colors::RED);
        assert_eq!(framebuffer.get(3, 5), Some(colors::RED));
        assert_eq!(framebuffer.get(5, 3), Some(colors::BLACK));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut framebuffer = Framebuffer::new(8, 8, colors::BLACK);
        framebuffer.set(-1, 0, colors::RED);
        framebuffer.set(0, -1, colors::RED);
        framebuffer.set(8, 0, colors::RED);
        framebuffer.set(0, 8, colors::RED);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(framebuffer.get(x, y), Some(colors::BLACK));
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let framebuffer = Framebuffer::new(8, 8, colors::BLACK);
        assert_eq!(framebuffer.get(-1, 0), None);
        assert_eq!(framebuffer.get(8, 8), None);
    }

    #[test]
    fn clear_overwrites_every_pixel() {
        let mut framebuffer = Framebuffer::new(4, 4, colors::BLACK);
        framebuffer.set(1, 1, colors::RED);
        framebuffer.clear(colors::GREEN);
        assert_eq!(framebuffer.get(1, 1), Some(colors::GREEN));
    }

    #[test]
    fn written_file_preserves_channel_values() {
        let mut framebuffer = Framebuffer::new(4, 4, colors::BLACK);
        framebuffer.set(2, 1, colors::BLUE);
        let path = std::env::temp_dir().join("wirecast_framebuffer_test.png");
        framebuffer.write(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(2, 1).0, colors::BLUE.to_rgba());
        assert_eq!(img.get_pixel(0, 0).0, colors::BLACK.to_rgba());
        std::fs::remove_file(&path).ok();
    }
}

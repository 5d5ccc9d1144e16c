//! Color values for drawing.
//!
//! Channels are stored in BGRA order to match the byte layout of the TGA
//! files this renderer targets. Color constants below are written in that
//! order, so the literal channel values look swapped compared to the usual
//! RGBA notation.

/// A four-channel color sample, channels in BGRA order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    /// Construct a color from channel values given in BGRA order.
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Channel bytes reordered to the RGBA layout the image encoder expects.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// attention: BGRA channel order
pub const WHITE: Color = Color::new(255, 255, 255, 255);
pub const GREEN: Color = Color::new(0, 255, 0, 255);
pub const RED: Color = Color::new(0, 0, 255, 255);
pub const BLUE: Color = Color::new(255, 128, 64, 255);
pub const YELLOW: Color = Color::new(0, 200, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0, 255);

//! A minimal CPU wireframe renderer.
//!
//! This crate parses a Wavefront OBJ subset into a [`Mesh`], projects it
//! orthographically onto a pixel grid, and rasterizes every face's edge
//! ring with an integer-only line algorithm. The finished [`Framebuffer`]
//! is encoded to an image file. All rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirecast::prelude::*;
//!
//! let mesh = Mesh::from_obj("model.obj")?;
//! let mut framebuffer = Framebuffer::new(1024, 1024, colors::BLACK);
//! WireframeRenderer::default().render(&mesh, &mut framebuffer)?;
//! framebuffer.write("framebuffer.tga")?;
//! ```

pub mod colors;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use mesh::{Face, LoadError, Mesh};
pub use projection::{Point2, Viewport};
pub use render::{Framebuffer, RenderError, WireframeRenderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirecast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colors::{self, Color};
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{Face, LoadError, Mesh};
    pub use crate::projection::{Point2, Viewport};
    pub use crate::render::{Framebuffer, RenderError, WireframeRenderer};
}

//! Rendering: the pixel buffer, rasterization primitives, and the
//! wireframe render pass.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::Framebuffer;
pub use rasterizer::{draw_line, draw_polygon, EmptyPolygon};
pub use renderer::{RenderError, WireframeRenderer};

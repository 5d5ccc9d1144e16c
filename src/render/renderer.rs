//! The wireframe render pass tying mesh, projection and rasterization
//! together.

use crate::colors::{self, Color};
use crate::mesh::Mesh;
use crate::projection::{Point2, Viewport};

use super::framebuffer::Framebuffer;
use super::rasterizer;

/// Errors produced by a render pass over inconsistent mesh data.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A face has no vertex indices at all.
    #[error("face {face} has no vertices")]
    EmptyFace { face: usize },

    /// A face references a vertex the mesh does not contain.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Draws a mesh as a wireframe: one marker pixel per vertex plus the
/// closed edge ring of every face.
///
/// Colors are plain values handed to each drawing call, not process-wide
/// state; two renderers with different colors can share a mesh freely.
#[derive(Clone, Copy, Debug)]
pub struct WireframeRenderer {
    pub vertex_color: Color,
    pub edge_color: Color,
}

impl Default for WireframeRenderer {
    fn default() -> Self {
        Self {
            vertex_color: colors::WHITE,
            edge_color: colors::WHITE,
        }
    }
}

impl WireframeRenderer {
    pub fn new(vertex_color: Color, edge_color: Color) -> Self {
        Self {
            vertex_color,
            edge_color,
        }
    }

    /// Render `mesh` into `framebuffer`.
    ///
    /// Every vertex is projected exactly once, in mesh order, and plotted
    /// as a single `vertex_color` pixel (a position marker independent of
    /// edge drawing). Each face then gathers its ring of projected points
    /// and rasterizes the closed outline in `edge_color`. Face indices are
    /// validated against the projected list before any lookup; a bad index
    /// is an error, never a silent skip.
    pub fn render(&self, mesh: &Mesh, framebuffer: &mut Framebuffer) -> Result<(), RenderError> {
        let viewport = Viewport::new(framebuffer.width(), framebuffer.height());

        let projected: Vec<Point2> = mesh
            .vertices()
            .iter()
            .map(|&vertex| viewport.project(vertex))
            .collect();
        for point in &projected {
            framebuffer.set(point.x, point.y, self.vertex_color);
        }

        for (face_index, face) in mesh.faces().iter().enumerate() {
            if face.is_empty() {
                return Err(RenderError::EmptyFace { face: face_index });
            }
            let mut ring = Vec::with_capacity(face.len());
            for &index in face.indices() {
                let point =
                    projected
                        .get(index)
                        .copied()
                        .ok_or(RenderError::IndexOutOfRange {
                            face: face_index,
                            index,
                            vertex_count: projected.len(),
                        })?;
                ring.push(point);
            }
            rasterizer::draw_polygon(&ring, framebuffer, self.edge_color)
                .map_err(|_| RenderError::EmptyFace { face: face_index })?;
        }

        Ok(())
    }
}

//! Line and polygon edge rasterization.
//!
//! [`draw_line`] is Bresenham's algorithm: it walks the major axis one
//! pixel at a time and keeps an integer error term measuring how far the
//! drawn pixel has drifted from the ideal line, stepping the minor axis
//! whenever the accumulated error exceeds the major-axis span. The loop is
//! pure integer arithmetic and leaves no gaps regardless of slope.

use std::mem;

use super::framebuffer::Framebuffer;
use crate::colors::Color;
use crate::projection::Point2;

/// Error returned when asked to rasterize a polygon with no points.
#[derive(Debug, thiserror::Error)]
#[error("cannot rasterize a polygon with no points")]
pub struct EmptyPolygon;

/// Draw the segment from `(ax, ay)` to `(bx, by)`, both endpoints
/// inclusive.
///
/// A zero-length segment plots exactly one pixel. The error threshold is a
/// strict `>`, which fixes the tie-break pixel choice and keeps output
/// pixel-exact across runs and platforms.
pub fn draw_line(
    mut ax: i32,
    mut ay: i32,
    mut bx: i32,
    mut by: i32,
    framebuffer: &mut Framebuffer,
    color: Color,
) {
    // Iterate along the axis with the larger extent. A steep line is
    // transposed so that stepping x by one never skips a row.
    let steep = (ax - bx).abs() < (ay - by).abs();
    if steep {
        mem::swap(&mut ax, &mut ay);
        mem::swap(&mut bx, &mut by);
    }
    // Always walk left to right.
    if ax > bx {
        mem::swap(&mut ax, &mut bx);
        mem::swap(&mut ay, &mut by);
    }

    let dx = bx - ax;
    let derror = 2 * (by - ay).abs();
    let y_step = if by > ay { 1 } else { -1 };

    let mut y = ay;
    let mut error = 0;
    for x in ax..=bx {
        if steep {
            // De-transpose before writing.
            framebuffer.set(y, x, color);
        } else {
            framebuffer.set(x, y, color);
        }
        error += derror;
        if error > dx {
            y += y_step;
            error -= 2 * dx;
        }
    }
}

/// Draw the closed edge ring connecting `points` in order.
///
/// Each consecutive pair is joined by a line, then one closing edge leads
/// from the last point back to the first. A single point degenerates to
/// one plotted pixel. Two points draw the same segment twice, forward and
/// closing; the duplicate write is harmless because plots are idempotent.
pub fn draw_polygon(
    points: &[Point2],
    framebuffer: &mut Framebuffer,
    color: Color,
) -> Result<(), EmptyPolygon> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(EmptyPolygon),
    };

    for pair in points.windows(2) {
        draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, framebuffer, color);
    }
    draw_line(last.x, last.y, first.x, first.y, framebuffer, color);
    Ok(())
}

//! Turns a committed stroke into an immovable collision body description.

use glam::Vec2;
use inkroll_engine::{path_to_vertices, BodyDesc, ColliderDesc};

/// A simplified stroke ready to become a fixed polygon-ring body.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBody {
    /// Body origin: midpoint of the first and last simplified vertex.
    pub anchor: Vec2,
    /// Ring vertices relative to `anchor`.
    pub ring: Vec<Vec2>,
}

impl LineBody {
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// Ring vertices in world space.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.ring.iter().map(|v| *v + self.anchor).collect()
    }

    pub fn body_desc(&self) -> BodyDesc {
        BodyDesc::fixed(ColliderDesc::Polygon {
            ring: self.ring.clone(),
        })
        .with_position(self.anchor)
    }
}

/// Simplify `points` at `tolerance` and place the result.
///
/// Returns `None` when fewer than two vertices survive. Self-intersecting or
/// zero-area rings are passed through unvalidated. A stroke that never moves
/// (every point identical) still keeps its two endpoints and yields a
/// zero-length ring at that spot, which the caller commits like any other line.
pub fn build_line_body(points: &[Vec2], tolerance: f32) -> Option<LineBody> {
    let vertices = path_to_vertices(points, tolerance);
    if vertices.len() < 2 {
        return None;
    }
    let first = *vertices.first()?;
    let last = *vertices.last()?;
    let anchor = (first + last) / 2.0;
    Some(LineBody {
        anchor,
        ring: vertices.into_iter().map(|v| v - anchor).collect(),
    })
}

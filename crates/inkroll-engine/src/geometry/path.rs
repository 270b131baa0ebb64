//! Path-to-vertices: turn a raw pointer trail into a reduced vertex list.

use glam::Vec2;
use lyon::math::point;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent};

use super::simplify::simplify_rdp;

/// Smallest flattening tolerance handed to lyon.
const MIN_FLATTEN_TOLERANCE: f32 = 0.01;

/// Build an open lyon polyline through `points`. `None` for an empty slice.
pub fn polyline_path(points: &[Vec2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(point(first.x, first.y));
    for p in rest {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(false);
    Some(builder.build())
}

/// Vertices of `path` after flattening any curves at `tolerance`.
fn flattened_vertices(path: &Path, tolerance: f32) -> Vec<Vec2> {
    let mut out = Vec::new();
    for event in path.iter().flattened(tolerance.max(MIN_FLATTEN_TOLERANCE)) {
        match event {
            PathEvent::Begin { at } => out.push(Vec2::new(at.x, at.y)),
            PathEvent::Line { to, .. } => out.push(Vec2::new(to.x, to.y)),
            _ => {}
        }
    }
    out
}

/// Reduce a freehand path to the vertices that matter at `tolerance`.
///
/// Larger tolerances give fewer vertices and a coarser outline. The first and
/// last input points always survive. Duplicate points are tolerated.
pub fn path_to_vertices(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    let Some(path) = polyline_path(points) else {
        return Vec::new();
    };
    simplify_rdp(&flattened_vertices(&path, tolerance), tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wobbly_line(n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                Vec2::new(100.0 + 600.0 * t, 400.0 + if i % 2 == 0 { 2.0 } else { -2.0 })
            })
            .collect()
    }

    #[test]
    fn empty_input_gives_no_vertices() {
        assert!(path_to_vertices(&[], 30.0).is_empty());
        assert!(polyline_path(&[]).is_none());
    }

    #[test]
    fn flattening_preserves_polyline_vertices() {
        let points = wobbly_line(10);
        let path = polyline_path(&points).unwrap();
        assert_eq!(flattened_vertices(&path, 30.0), points);
    }

    #[test]
    fn horizontal_stroke_reduces_to_its_ends() {
        let points = wobbly_line(10);
        let vertices = path_to_vertices(&points, 30.0);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0], points[0]);
        assert_eq!(vertices[1], points[9]);
    }

    #[test]
    fn larger_tolerance_never_adds_vertices() {
        // A gentle arc.
        let points: Vec<Vec2> = (0..40)
            .map(|i| {
                let a = i as f32 / 39.0 * std::f32::consts::PI;
                Vec2::new(400.0 - 200.0 * a.cos(), 300.0 + 150.0 * a.sin())
            })
            .collect();
        let fine = path_to_vertices(&points, 2.0);
        let coarse = path_to_vertices(&points, 30.0);
        assert!(coarse.len() <= fine.len(), "coarse={} fine={}", coarse.len(), fine.len());
        assert!(coarse.len() >= 3);
        assert!(fine.len() < points.len());
    }
}

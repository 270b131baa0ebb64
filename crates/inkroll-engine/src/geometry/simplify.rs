//! Ramer-Douglas-Peucker polyline simplification.
//!
//! Drops points that lie within `epsilon` of the chord between their
//! neighbours, keeping the overall shape of a hand-drawn stroke with far fewer
//! vertices. Endpoints are always kept.

use glam::Vec2;

/// Distance from `p` to the infinite line through `start` and `end`.
/// Falls back to the distance to `start` when the two coincide.
pub fn perpendicular_distance(p: Vec2, start: Vec2, end: Vec2) -> f32 {
    let d = end - start;
    let len_sq = d.length_squared();
    if len_sq < 1e-10 {
        return p.distance(start);
    }
    (p - start).perp_dot(d).abs() / len_sq.sqrt()
}

/// Simplify a polyline. `epsilon <= 0` keeps every point.
pub fn simplify_rdp(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    if points.len() <= 2 || epsilon <= 0.0 {
        return points.to_vec();
    }
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark(points, 0, points.len() - 1, epsilon, &mut keep);

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

/// Mark the farthest point between `first` and `last` and recurse on both
/// halves while it exceeds `epsilon`.
fn mark(points: &[Vec2], first: usize, last: usize, epsilon: f32, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }
    let (start, end) = (points[first], points[last]);
    let mut max_dist = 0.0;
    let mut max_index = first;
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let dist = perpendicular_distance(*p, start, end);
        if dist > max_dist {
            max_dist = dist;
            max_index = i;
        }
    }
    if max_dist > epsilon {
        keep[max_index] = true;
        mark(points, first, max_index, epsilon, keep);
        mark(points, max_index, last, epsilon, keep);
    }
}

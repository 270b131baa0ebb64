//! Lyon-based vector drawing.
//!
//! Bodies, walls and the live stroke preview are all drawn as tessellated
//! fills and strokes into one flat triangle-list buffer that the page uploads
//! each frame.
//!
//! ```ignore
//! ctx.vectors.fill_circle(Vec2::new(100.0, 50.0), 25.0, VectorColor::YELLOW);
//! ctx.vectors.stroke_polyline(&stroke_points, 4.0, VectorColor::GRAY);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::components::style::VectorColor;

/// Per-vertex data: position + RGBA. 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn at(x: f32, y: f32, color: VectorColor) -> Self {
        Self {
            x,
            y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.color)
    }
}

struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.color)
    }
}

/// Tessellators plus the output vertex buffer.
/// Cleared at the start of every frame and refilled by drawing commands.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    max_vertices: usize,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    /// Create a state that holds at most `max_vertices` vertices per frame.
    /// Shapes that would overflow are dropped whole.
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices * VectorVertex::FLOATS),
            max_vertices,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Raw pointer to the flat float buffer for the page to copy from.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// The vertices drawn so far this frame.
    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        let incoming = self.geometry.indices.len();
        if self.vertex_count() + incoming <= self.max_vertices {
            for idx in &self.geometry.indices {
                let v = &self.geometry.vertices[*idx as usize];
                self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
            }
        } else {
            log::warn!("vector buffer full, dropping {} vertices", incoming);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn polyline(points: &[Vec2], closed: bool) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(closed);
        builder.build()
    }

    /// Fill a closed polygon (convex or concave). Needs at least 3 points.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: VectorColor) {
        if points.len() < 3 {
            return;
        }
        let path = Self::polyline(points, true);
        self.fill_path(&path, color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();
        self.fill_path(&path, color);
    }

    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => {
                log::debug!("fill tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    /// Stroke an open polyline. Needs at least 2 points.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 {
            return;
        }
        let path = Self::polyline(points, false);
        self.stroke_path(&path, width, color);
    }

    /// Stroke a closed outline. Two points draw a there-and-back segment.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 {
            return;
        }
        let path = Self::polyline(points, true);
        self.stroke_path(&path, width, color);
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => {
                log::debug!("stroke tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), VectorVertex::STRIDE_BYTES);
    }

    #[test]
    fn fill_polygon_triangle() {
        let mut state = VectorState::new();
        let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(50.0, 100.0)];
        state.fill_polygon(&points, VectorColor::YELLOW);
        assert_eq!(state.vertex_count(), 3);
        assert_eq!(state.vertices()[0].r, VectorColor::YELLOW.r);
    }

    #[test]
    fn stroke_polyline_needs_two_points() {
        let mut state = VectorState::new();
        state.stroke_polyline(&[Vec2::ZERO], 4.0, VectorColor::GRAY);
        assert_eq!(state.vertex_count(), 0);
        state.stroke_polyline(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], 4.0, VectorColor::GRAY);
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn stroke_polygon_accepts_two_point_ring() {
        let mut state = VectorState::new();
        state.stroke_polygon(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], 5.0, VectorColor::BLACK);
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::new(50.0, 50.0), 25.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn overflowing_shapes_are_dropped() {
        let mut state = VectorState::with_capacity(4);
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(5.0, 10.0)];
        state.fill_polygon(&tri, VectorColor::WHITE);
        state.fill_polygon(&tri, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 3);
    }

    #[test]
    fn degenerate_polygons_produce_nothing() {
        let mut state = VectorState::new();
        state.fill_polygon(&[], VectorColor::WHITE);
        state.fill_polygon(&[Vec2::ZERO, Vec2::ONE], VectorColor::WHITE);
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }
}

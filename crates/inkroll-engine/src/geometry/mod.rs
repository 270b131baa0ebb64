//! Freehand-path geometry: polyline simplification and path-to-vertices.

#[cfg(feature = "vectors")]
pub mod path;
pub mod simplify;

#[cfg(feature = "vectors")]
pub use path::{path_to_vertices, polyline_path};
pub use simplify::{perpendicular_distance, simplify_rdp};

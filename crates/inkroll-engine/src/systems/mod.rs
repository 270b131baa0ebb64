#[cfg(all(feature = "physics", feature = "vectors"))]
pub mod draw;
#[cfg(feature = "vectors")]
pub mod vector;

pub mod game;
pub mod types;
#[cfg(feature = "physics")]
pub mod world;

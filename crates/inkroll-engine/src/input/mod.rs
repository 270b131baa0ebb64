#[cfg(feature = "physics")]
pub mod drag;
pub mod pointer;
pub mod queue;

pub mod entity;
pub mod style;

// Re-export glam for convenience
pub use glam::*;

// Caster math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{dot, length, normalize, subtract, VectorError};

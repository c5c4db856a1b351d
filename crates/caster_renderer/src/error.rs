//! Errors raised before or during a render.

use caster_math::VectorError;
use thiserror::Error;

/// Errors that can occur while rendering or writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene has no camera")]
    NoCamera,

    #[error("Camera has non-positive view plane {width} x {height}")]
    InvalidCamera { width: f64, height: f64 },

    #[error("Invalid output resolution {width} x {height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid ray direction: {0}")]
    Vector(#[from] VectorError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

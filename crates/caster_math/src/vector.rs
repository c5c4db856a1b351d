//! Free-function vector helpers used by the intersection routines.
//!
//! These are thin wrappers over `glam::DVec3`, except for [`normalize`],
//! which turns the degenerate zero-length case into an error instead of
//! producing NaNs.

use glam::DVec3;
use thiserror::Error;

/// Errors raised by vector operations that have no defined result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("cannot normalize a vector with non-finite length {0}")]
    NonFinite(f64),
}

/// Dot product of two vectors.
#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.dot(b)
}

/// Component-wise `a - b`.
#[inline]
pub fn subtract(a: DVec3, b: DVec3) -> DVec3 {
    a - b
}

/// Euclidean length.
#[inline]
pub fn length(a: DVec3) -> f64 {
    a.length()
}

/// Normalize `a`, returning the unit vector and the length it had before.
///
/// Fails only on the exact zero vector and on vectors with an infinite or
/// NaN component. The vector is scaled by its largest component first, so
/// very large or very small finite inputs do not overflow or underflow. The
/// returned length can still be `inf` when the true length exceeds `f64::MAX`.
pub fn normalize(a: DVec3) -> Result<(DVec3, f64), VectorError> {
    if !a.is_finite() {
        return Err(VectorError::NonFinite(a.length()));
    }

    let scale = a.abs().max_element();
    if scale == 0.0 {
        return Err(VectorError::ZeroLength);
    }

    let scaled = a / scale;
    let scaled_len = scaled.length();
    Ok((scaled / scaled_len, scaled_len * scale))
}

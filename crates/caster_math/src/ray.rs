use crate::vector::{normalize, VectorError};
use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// Camera rays built through [`Ray::from_direction`] always carry a unit
/// direction; [`Ray::new`] takes the direction as given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray without touching the direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is normalized first.
    pub fn from_direction(origin: DVec3, direction: DVec3) -> Result<Self, VectorError> {
        let (direction, _) = normalize(direction)?;
        Ok(Self { origin, direction })
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

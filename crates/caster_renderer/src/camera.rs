//! Pinhole camera and view-plane ray generation.
//!
//! The camera sits at the world origin looking down +Z. The view plane is a
//! `width x height` window centered on the Z axis, one unit in front of it.

use caster_core::Scene;
use caster_math::{DVec3, Ray};

use crate::error::{RenderError, RenderResult};

/// View-plane dimensions taken from the scene's camera record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub width: f64,
    pub height: f64,
}

impl ViewPlane {
    /// Create a view plane, rejecting non-positive or non-finite sizes.
    pub fn new(width: f64, height: f64) -> RenderResult<Self> {
        if Self::is_valid(width, height) {
            Ok(Self { width, height })
        } else {
            Err(RenderError::InvalidCamera { width, height })
        }
    }

    fn is_valid(width: f64, height: f64) -> bool {
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// Pick the first usable camera record in document order.
    ///
    /// Cameras with bad dimensions are skipped. Any cameras after the chosen
    /// one are ignored.
    pub fn from_scene(scene: &Scene) -> RenderResult<Self> {
        let mut first_invalid = None;
        let mut chosen = None;

        for (width, height) in scene.cameras() {
            if chosen.is_some() {
                log::debug!("Ignoring additional camera {} x {}", width, height);
                continue;
            }
            if Self::is_valid(width, height) {
                chosen = Some(Self { width, height });
            } else {
                log::warn!("Skipping camera with invalid view plane {} x {}", width, height);
                first_invalid.get_or_insert((width, height));
            }
        }

        match (chosen, first_invalid) {
            (Some(view), _) => Ok(view),
            (None, Some((width, height))) => Err(RenderError::InvalidCamera { width, height }),
            (None, None) => Err(RenderError::NoCamera),
        }
    }

    /// Unnormalized direction through the center of pixel `(x, y)`.
    ///
    /// `y` counts up from the bottom of the view plane.
    pub fn direction(&self, x: u32, y: u32, image_width: u32, image_height: u32) -> DVec3 {
        DVec3::new(
            -self.width / 2.0 + self.width * (x as f64 + 0.5) / image_width as f64,
            -self.height / 2.0 + self.height * (y as f64 + 0.5) / image_height as f64,
            1.0,
        )
    }

    /// Normalized camera ray for image pixel `(x, row)`, with row 0 at the top.
    pub fn primary_ray(&self, x: u32, row: u32, image_width: u32, image_height: u32) -> RenderResult<Ray> {
        let y = image_height - 1 - row;
        let direction = self.direction(x, y, image_width, image_height);
        Ok(Ray::from_direction(DVec3::ZERO, direction)?)
    }
}

//! Caster Renderer - flat-shaded CPU ray casting.
//!
//! One ray per pixel from a pinhole camera at the origin, nearest hit wins,
//! and the hit primitive's color is written as-is. The finished image is
//! written out as a binary PPM.

mod camera;
mod error;
mod intersect;
mod ppm;
mod renderer;

pub use camera::ViewPlane;
pub use error::{RenderError, RenderResult};
pub use intersect::{intersect, intersect_plane, intersect_sphere, nearest_hit, Hit};
pub use ppm::{save_ppm, write_ppm};
pub use renderer::{color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig, Rgb};

/// Re-export common types from caster_core and caster_math
pub use caster_core::{Color, Primitive, Scene};
pub use caster_math::{DVec3, Interval, Ray};

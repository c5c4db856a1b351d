//! Closed-form ray/primitive intersection.
//!
//! Every routine returns the distance along the ray to the first forward
//! hit, or `None`. A distance only counts if it is finite and strictly
//! positive.

use caster_core::{Color, Primitive, Scene};
use caster_math::{dot, subtract, DVec3, Interval, Ray};

/// Nearest visible surface along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub t: f64,
    /// Flat color of the primitive that was hit
    pub color: Color,
}

/// Intersect a ray with a sphere.
///
/// Prefers the near root; when the ray starts inside the sphere the near
/// root is behind it and the far (exit) root is returned instead.
pub fn intersect_sphere(ray: &Ray, center: DVec3, radius: f64) -> Option<f64> {
    let oc = subtract(ray.origin, center);
    let a = dot(ray.direction, ray.direction);
    let b = 2.0 * dot(ray.direction, oc);
    let c = dot(oc, oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    let t0 = (-b - sqrtd) / (2.0 * a);
    if Interval::POSITIVE.surrounds(t0) {
        return Some(t0);
    }

    let t1 = (-b + sqrtd) / (2.0 * a);
    if Interval::POSITIVE.surrounds(t1) {
        return Some(t1);
    }

    None
}

/// Intersect a ray with the plane through `point` with normal `normal`.
///
/// The normal does not need to be unit length. A ray parallel to the plane
/// divides by zero, which lands outside `(0, inf)` and is rejected.
pub fn intersect_plane(ray: &Ray, point: DVec3, normal: DVec3) -> Option<f64> {
    let t = dot(normal, subtract(point, ray.origin)) / dot(normal, ray.direction);
    Interval::POSITIVE.surrounds(t).then_some(t)
}

/// Intersect a ray with any primitive. Cameras are never hit.
pub fn intersect(ray: &Ray, primitive: &Primitive) -> Option<Hit> {
    match *primitive {
        Primitive::Camera { .. } => None,
        Primitive::Sphere {
            color,
            position,
            radius,
        } => intersect_sphere(ray, position, radius).map(|t| Hit { t, color }),
        Primitive::Plane {
            color,
            position,
            normal,
        } => intersect_plane(ray, position, normal).map(|t| Hit { t, color }),
    }
}

/// Find the nearest hit over the whole scene.
///
/// A later primitive only replaces the current best when it is strictly
/// closer, so equal distances keep the primitive declared first.
pub fn nearest_hit(ray: &Ray, scene: &Scene) -> Option<Hit> {
    let mut closest_so_far = Interval::POSITIVE;
    let mut nearest = None;

    for primitive in scene {
        if let Some(hit) = intersect(ray, primitive) {
            if closest_so_far.surrounds(hit.t) {
                closest_so_far = closest_so_far.with_max(hit.t);
                nearest = Some(hit);
            }
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    fn sphere(z: f64, radius: f64, color: Color) -> Primitive {
        Primitive::Sphere {
            color,
            position: DVec3::new(0.0, 0.0, z),
            radius,
        }
    }

    #[test]
    fn test_sphere_hit_distance() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        for radius in [0.5, 1.0, 2.0, 4.5] {
            let t = intersect_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), radius).unwrap();
            assert!((t - (5.0 - radius)).abs() < 1e-9, "radius {radius}: t = {t}");
        }
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        for radius in [0.5, 1.0, 4.9] {
            assert_eq!(intersect_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), radius), None);
        }
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        assert_eq!(intersect_sphere(&ray, DVec3::new(0.0, 0.0, -5.0), 1.0), None);
    }

    #[test]
    fn test_sphere_origin_inside_returns_exit() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let t = intersect_sphere(&ray, DVec3::new(0.0, 0.0, 1.0), 3.0).unwrap();
        assert!((t - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));
        let t = intersect_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        assert!((ray.at(t).z - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::from_direction(DVec3::ZERO, DVec3::new(0.0, -1.0, 1.0)).unwrap();
        let t = intersect_plane(&ray, DVec3::new(0.0, -1.0, 0.0), DVec3::Y).unwrap();
        assert!(t.is_finite() && t > 0.0);
        assert!((t - 2.0_f64.sqrt()).abs() < 1e-9);
        assert!((ray.at(t).y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_plane_unnormalized_normal() {
        let ray = Ray::from_direction(DVec3::ZERO, DVec3::new(0.0, -1.0, 1.0)).unwrap();
        let unit = intersect_plane(&ray, DVec3::new(0.0, -1.0, 0.0), DVec3::Y).unwrap();
        let scaled = intersect_plane(&ray, DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 7.0, 0.0)).unwrap();
        assert!((unit - scaled).abs() < 1e-9);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        assert_eq!(intersect_plane(&ray, DVec3::new(0.0, -1.0, 0.0), DVec3::Y), None);

        // Ray lying in the plane: 0 / 0
        assert_eq!(intersect_plane(&ray, DVec3::ZERO, DVec3::Y), None);
    }

    #[test]
    fn test_plane_behind_ray() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        assert_eq!(intersect_plane(&ray, DVec3::new(0.0, -1.0, 0.0), DVec3::Y), None);
    }

    #[test]
    fn test_camera_is_never_hit() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let camera = Primitive::Camera {
            width: 1.0,
            height: 1.0,
        };
        assert_eq!(intersect(&ray, &camera), None);
    }

    #[test]
    fn test_nearest_hit_ignores_scene_order() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let far_first: Scene = [sphere(10.0, 1.0, RED), sphere(5.0, 1.0, GREEN)].into_iter().collect();
        let near_first: Scene = [sphere(5.0, 1.0, GREEN), sphere(10.0, 1.0, RED)].into_iter().collect();

        for scene in [far_first, near_first] {
            let hit = nearest_hit(&ray, &scene).unwrap();
            assert_eq!(hit.color, GREEN);
            assert!((hit.t - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nearest_hit_tie_keeps_first() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let scene: Scene = [sphere(5.0, 1.0, BLUE), sphere(5.0, 1.0, RED)].into_iter().collect();
        assert_eq!(nearest_hit(&ray, &scene).unwrap().color, BLUE);

        let scene: Scene = [sphere(5.0, 1.0, RED), sphere(5.0, 1.0, BLUE)].into_iter().collect();
        assert_eq!(nearest_hit(&ray, &scene).unwrap().color, RED);
    }

    #[test]
    fn test_nearest_hit_sphere_in_front_of_plane() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let scene: Scene = [
            Primitive::Plane {
                color: BLUE,
                position: DVec3::new(0.0, 0.0, 20.0),
                normal: DVec3::new(0.0, 0.0, -1.0),
            },
            sphere(5.0, 1.0, RED),
        ]
        .into_iter()
        .collect();

        assert_eq!(nearest_hit(&ray, &scene).unwrap().color, RED);
    }

    #[test]
    fn test_nearest_hit_empty_scene() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        assert_eq!(nearest_hit(&ray, &Scene::new()), None);
    }
}

//! Hittable trait and Hit record for ray-object intersection.

use crate::Color;
use ember_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Lives for one tracing step: built by an intersection test, compared by
/// the nearest-hit query, then consumed by the bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point of intersection
    pub position: Vec3,
    /// Parameter along the ray, `position = origin + distance * direction`
    pub distance: f32,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Surface tint
    pub color: Color,
    /// 0 = mirror, towards 1 = diffuse
    pub roughness: f32,
}

impl Hit {
    /// Build a hit at `distance` along `ray`, orienting `normal` against the ray.
    pub fn facing(ray: &Ray, distance: f32, normal: Vec3, color: Color, roughness: f32) -> Self {
        // If the ray and normal point the same way we're on the back side
        let normal = if ray.direction.dot(normal) > 0.0 {
            -normal
        } else {
            normal
        };

        Self {
            position: ray.at(distance),
            distance,
            normal,
            color,
            roughness,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object at a distance strictly inside `ray_t`.
    ///
    /// `ray.direction` must be unit length.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit>;
}

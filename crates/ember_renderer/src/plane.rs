//! Infinite plane primitive.

use crate::hittable::{Hit, Hittable};
use crate::Color;
use ember_math::{Interval, Ray, Vec3};

/// Minimum `dot(direction, normal)` for a plane hit.
///
/// Rejects grazing rays and everything arriving against the normal, which
/// makes planes single-sided.
pub const PLANE_EPSILON: f32 = 1e-6;

/// Infinite plane `dot(p, normal) + offset = 0`.
///
/// Only rays travelling along `normal` (`dot(direction, normal) > 0`) see
/// the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit length by convention
    pub normal: Vec3,
    pub offset: f32,
    pub color: Color,
    pub roughness: f32,
}

impl Plane {
    /// Create a new plane.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is zero or `roughness` is outside `[0, 1)`.
    pub fn new(normal: Vec3, offset: f32, color: Color, roughness: f32) -> Self {
        assert!(normal != Vec3::ZERO, "plane normal must be non-zero");
        assert!(
            (0.0..1.0).contains(&roughness),
            "roughness must be in [0, 1), got {roughness}"
        );

        Self {
            normal,
            offset,
            color,
            roughness,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let denom = ray.direction.dot(self.normal);
        if denom <= PLANE_EPSILON {
            return None;
        }

        let distance = -(ray.origin.dot(self.normal) + self.offset) / denom;
        if !ray_t.surrounds(distance) {
            return None;
        }

        // The accepted side always faces along the ray, so the reported
        // normal is the stored one flipped
        Some(Hit::facing(
            ray,
            distance,
            self.normal,
            self.color,
            self.roughness,
        ))
    }
}

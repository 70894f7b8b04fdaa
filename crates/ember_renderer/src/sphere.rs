//! Sphere primitive for ray tracing.

use crate::hittable::{Hit, Hittable};
use crate::Color;
use ember_math::{norm, Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    pub roughness: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive or `roughness` is outside `[0, 1)`.
    pub fn new(center: Vec3, radius: f32, color: Color, roughness: f32) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "sphere radius must be positive, got {radius}"
        );
        assert!(
            (0.0..1.0).contains(&roughness),
            "roughness must be in [0, 1), got {roughness}"
        );

        Self {
            center,
            radius,
            color,
            roughness,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let c = self.center - ray.origin;
        // Distance from the center to the ray's line, and the center's
        // projection onto the ray
        let d = ray.direction.cross(c).length();
        let t1 = ray.direction.dot(c);

        if t1 <= 0.0 || d > self.radius {
            return None;
        }

        // Near root only. From inside the sphere it lands behind the origin
        // and is rejected by the interval.
        let t2 = (self.radius * self.radius - d * d).sqrt();
        let distance = t1 - t2;
        if !ray_t.surrounds(distance) {
            return None;
        }

        let outward_normal = norm(ray.at(distance) - self.center);
        Some(Hit::facing(
            ray,
            distance,
            outward_normal,
            self.color,
            self.roughness,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 0.5, Color::new(1.0, 0.0, 0.0), 0.0)
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -8.0), Vec3::Z);
        let hit = small_sphere().hit(&ray, Interval::POSITIVE).expect("ray should hit");

        assert!((hit.distance - 7.5).abs() < 1e-5);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert!((hit.position - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
        assert_eq!(hit.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_miss_outside_radius() {
        // Closest approach is 1.0, radius is 0.5
        let ray = Ray::new(Vec3::new(1.0, 0.0, -8.0), Vec3::Z);
        assert!(small_sphere().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_sphere_grazing_hit() {
        // Closest approach exactly equals the radius
        let ray = Ray::new(Vec3::new(0.5, 0.0, -8.0), Vec3::Z);
        let hit = small_sphere().hit(&ray, Interval::POSITIVE).expect("tangent ray should hit");

        assert!((hit.distance - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 8.0), Vec3::Z);
        assert!(small_sphere().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_sphere_from_inside_rejected() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.2), 1.0, Color::ONE, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // The near root is behind the origin
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_sphere_respects_interval() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -8.0), Vec3::Z);
        assert!(small_sphere().hit(&ray, Interval::new(0.0, 7.0)).is_none());
        assert!(small_sphere().hit(&ray, Interval::new(0.0, 8.0)).is_some());
    }

    #[test]
    fn test_sphere_normal_faces_ray() {
        let sphere = Sphere::new(Vec3::new(0.3, -0.2, 2.0), 0.8, Color::ONE, 0.0);
        let origin = Vec3::new(0.0, 0.0, -2.0);

        for i in -4..=4 {
            for j in -4..=4 {
                let target = Vec3::new(0.3 + i as f32 * 0.15, -0.2 + j as f32 * 0.15, 2.0);
                let ray = Ray::through(origin, target);
                if let Some(hit) = sphere.hit(&ray, Interval::POSITIVE) {
                    assert!(ray.direction.dot(hit.normal) <= 0.0);
                    assert!((hit.normal.length() - 1.0).abs() < 1e-5);
                    assert!((ray.at(hit.distance) - hit.position).length() < 1e-5);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_sphere_zero_radius_panics() {
        Sphere::new(Vec3::ZERO, 0.0, Color::ONE, 0.0);
    }

    #[test]
    #[should_panic(expected = "roughness")]
    fn test_sphere_roughness_one_panics() {
        Sphere::new(Vec3::ZERO, 1.0, Color::ONE, 1.0);
    }
}

//! Pinhole camera for ray generation.

use crate::sampling::uniform01;
use ember_math::{Ray, Vec2, Vec3};
use rand::RngCore;

/// Pinhole camera looking down +z.
///
/// The image maps onto a near plane `near` units in front of the camera.
/// The plane spans one unit vertically and `width / height` units
/// horizontally, centered on the camera axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    near: f32,
}

impl Camera {
    /// Create a camera at `(0, 0, -3)` with its near plane 0.5 units ahead.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -3.0),
            near: 0.5,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the distance from the camera to the near plane.
    ///
    /// # Panics
    ///
    /// Panics if `near` is not positive.
    pub fn with_near(mut self, near: f32) -> Self {
        assert!(near > 0.0, "near plane distance must be positive, got {near}");
        self.near = near;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    /// Point on the near plane for pixel `(x, y)` of a `width x height` image.
    pub fn pixel_position(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let aspect_ratio = width as f32 / height as f32;
        Vec3::new(
            aspect_ratio * x as f32 / width as f32 - (aspect_ratio - 1.0) * 0.5 - 0.5,
            y as f32 / height as f32 - 0.5,
            self.position.z + self.near,
        )
    }

    /// Size of one pixel on the near plane.
    pub fn pixel_footprint(width: u32, height: u32) -> Vec2 {
        let aspect_ratio = width as f32 / height as f32;
        Vec2::new(aspect_ratio / width as f32, 1.0 / height as f32)
    }

    /// Generate a ray for pixel `(x, y)`.
    ///
    /// With `jitter` the target moves uniformly within one pixel footprint,
    /// drawing the x offset before the y offset.
    pub fn get_ray(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        jitter: bool,
        rng: &mut dyn RngCore,
    ) -> Ray {
        let mut target = self.pixel_position(x, y, width, height);

        if jitter {
            let sub = Self::pixel_footprint(width, height);
            target.x += uniform01(rng) * sub.x - 0.5 * sub.x;
            target.y += uniform01(rng) * sub.y - 0.5 * sub.y;
        }

        Ray::through(self.position, target)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_center_pixel_on_axis() {
        let camera = Camera::new();
        let p = camera.pixel_position(512, 384, 1024, 768);

        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert_eq!(p.z, -2.5);
    }

    #[test]
    fn test_corner_pixels() {
        let camera = Camera::new();

        // Square image: x spans [-0.5, 0.5)
        let p = camera.pixel_position(0, 0, 100, 100);
        assert!((p - Vec3::new(-0.5, -0.5, -2.5)).length() < 1e-6);

        // 2:1 image: x spans [-1, 1)
        let p = camera.pixel_position(0, 0, 200, 100);
        assert!((p.x + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_footprint() {
        let sub = Camera::pixel_footprint(1024, 768);

        assert!((sub.x - (4.0 / 3.0) / 1024.0).abs() < 1e-9);
        assert!((sub.y - 1.0 / 768.0).abs() < 1e-9);
    }

    #[test]
    fn test_unjittered_ray_is_deterministic() {
        let camera = Camera::new();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);

        let ray_a = camera.get_ray(10, 20, 64, 48, false, &mut a);
        let ray_b = camera.get_ray(10, 20, 64, 48, false, &mut b);

        assert_eq!(ray_a, ray_b);
        assert_eq!(ray_a.origin, camera.position());
        assert!((ray_a.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_jitter_stays_within_pixel() {
        let camera = Camera::new().with_position(Vec3::new(0.0, 0.0, -2.0)).with_near(1.0);
        let (width, height) = (40, 30);
        let center = camera.pixel_position(7, 9, width, height);
        let sub = Camera::pixel_footprint(width, height);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..500 {
            let ray = camera.get_ray(7, 9, width, height, true, &mut rng);
            // Back onto the near plane, one unit ahead of the camera
            let hit = ray.at(1.0 / ray.direction.z);

            assert!((hit.x - center.x).abs() <= 0.5 * sub.x + 1e-5);
            assert!((hit.y - center.y).abs() <= 0.5 * sub.y + 1e-5);
        }
    }

    #[test]
    #[should_panic(expected = "near plane")]
    fn test_zero_near_panics() {
        let _ = Camera::new().with_near(0.0);
    }
}

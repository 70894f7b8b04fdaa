//! Scene: an ordered list of primitives with a nearest-hit query.

use crate::hittable::{Hit, Hittable};
use crate::{Color, Plane, Primitive, Sphere};
use ember_math::{Interval, Ray, Vec3};

/// A fixed set of primitives.
///
/// Order matters only for exact distance ties, where the earlier primitive wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene the renderer ships with: a reddish, slightly rough sphere
    /// at the origin and a rough grey plane at y = 1.
    pub fn reference() -> Self {
        let mut scene = Self::new();
        scene.add(Sphere::new(
            Vec3::ZERO,
            1.0,
            Color::new(0.8, 0.3, 0.2),
            0.2,
        ));
        scene.add(Plane::new(Vec3::Y, -1.0, Color::new(0.8, 0.8, 0.8), 0.9));
        scene
    }

    /// Append a primitive.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Builder-style [`Scene::add`].
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.add(primitive);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest hit in front of the ray origin, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.hit(ray, Interval::POSITIVE)
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.distance;
                closest = Some(hit);
            }
        }

        closest
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

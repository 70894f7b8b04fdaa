//! Closed set of scene primitives.

use crate::hittable::{Hit, Hittable};
use crate::{Plane, Sphere};
use ember_math::{Interval, Ray};

/// Any shape a scene can hold.
///
/// Using an enum keeps the scene a flat `Vec` and avoids dynamic dispatch
/// per intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
            Primitive::Plane(plane) => plane.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

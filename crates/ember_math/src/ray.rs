use crate::{vector::norm, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// The intersection routines assume `direction` is unit length. Use
/// [`Ray::through`] or [`Ray::normalized`] when the direction comes from
/// arbitrary vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with its direction scaled to unit length.
    ///
    /// Panics if `direction` is zero.
    pub fn normalized(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, norm(direction))
    }

    /// Create a unit ray starting at `origin` and passing through `target`.
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self::normalized(origin, target - origin)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Move the origin forward along the direction by `epsilon`.
    ///
    /// Secondary rays start exactly on a surface; without the nudge they
    /// re-hit that surface through rounding error.
    #[inline]
    pub fn nudged(self, epsilon: f32) -> Self {
        Self {
            origin: self.at(epsilon),
            direction: self.direction,
        }
    }
}

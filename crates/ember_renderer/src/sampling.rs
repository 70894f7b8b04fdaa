//! Random sampling helpers.
//!
//! Every function draws from the generator it is handed, so a render is
//! reproducible whenever the caller seeds that generator.

use ember_math::Vec3;
use rand::{Rng, RngCore};

/// Uniform value in `[0, 1)`.
#[inline]
pub fn uniform01(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point in the cube `[-1, 1)^3`.
#[inline]
pub fn uniform_in_cube(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        2.0 * uniform01(rng) - 1.0,
        2.0 * uniform01(rng) - 1.0,
        2.0 * uniform01(rng) - 1.0,
    )
}

/// Uniform point inside the unit ball (`length <= 1`).
///
/// Rejection sampling from the enclosing cube; on average about 1.9 draws
/// of three scalars each.
pub fn uniform_in_ball(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = uniform_in_cube(rng);
        if p.length() <= 1.0 {
            return p;
        }
    }
}

//! Path tracing core.
//!
//! A path bounces from surface to surface along the mirror direction,
//! jittered by each surface's roughness, and picks up that surface's tint.
//! It ends when it escapes to the sky or runs out of bounces, and either
//! way the sky gradient is what gets tinted.

use crate::hittable::{Hit, Hittable};
use crate::sampling::uniform_in_ball;
use crate::Color;
use ember_math::{lerp, norm, reflect, Interval, Ray, Vec3};
use rand::RngCore;

/// How far a bounce ray starts past the surface it leaves.
pub const BOUNCE_EPSILON: f32 = 1e-4;

/// Sky color straight up.
pub const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Sky color straight down.
pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Sky gradient keyed on the ray's vertical direction.
pub fn background(ray: &Ray) -> Color {
    let t = (0.5 * (ray.direction.y + 1.0)).clamp(0.0, 1.0);
    lerp(SKY_BLUE, SKY_WHITE, t)
}

/// Jitter a unit direction by a random offset of at most `roughness`.
///
/// A sample is always drawn so the random stream advances the same way
/// for every surface. Zero roughness returns `direction` untouched.
pub fn perturb(direction: Vec3, roughness: f32, rng: &mut dyn RngCore) -> Vec3 {
    let offset = uniform_in_ball(rng) * roughness;
    if roughness == 0.0 {
        return direction;
    }
    norm(direction + offset)
}

/// The ray leaving `hit` after `ray` arrives there.
pub fn bounce(ray: &Ray, hit: &Hit, rng: &mut dyn RngCore) -> Ray {
    let reflected = reflect(ray.direction, hit.normal);
    let origin = Ray::new(hit.position, reflected)
        .nudged(BOUNCE_EPSILON)
        .origin;

    Ray::new(origin, perturb(reflected, hit.roughness, rng))
}

/// Compute the color seen along a ray.
///
/// Follows at most `bounces` surface interactions. Misses and an exhausted
/// budget both end on [`background`], so a path that never escapes still
/// sees the sky rather than black.
pub fn trace(ray: &Ray, world: &dyn Hittable, bounces: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;
    let mut remaining = bounces;

    while remaining > 0 {
        let Some(hit) = world.hit(&ray, Interval::POSITIVE) else {
            break;
        };

        attenuation *= hit.color;
        ray = bounce(&ray, &hit, rng);
        remaining -= 1;
    }

    attenuation * background(&ray)
}

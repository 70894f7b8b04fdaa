//! Vector and color helpers on top of `glam::Vec3`.
//!
//! glam already covers add/sub/mul/dot/cross/length. The functions here are
//! the remaining operations the tracer needs, with the contracts it relies on.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// # Panics
///
/// Panics if `v` has zero (or non-finite) length. A zero-length direction is
/// a caller bug and would otherwise poison every color downstream with NaN.
#[inline]
pub fn norm(v: Vec3) -> Vec3 {
    let len = v.length();
    assert!(
        len > 0.0 && len.is_finite(),
        "cannot normalize vector {v} of length {len}"
    );
    v * (1.0 / len)
}

/// Reflect `v` about the unit normal `n`.
///
/// Returns `v - 2 * dot(v, n) * n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Clamp each channel independently to `[0, 1]`.
#[inline]
pub fn saturate(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Linear blend from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

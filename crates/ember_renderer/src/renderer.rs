//! Per-pixel rendering.
//!
//! Implements the pixel contract the image driver calls:
//! - Sub-pixel jitter and sample averaging for anti-aliasing
//! - Path tracing, plus two debug shading modes

use crate::tracer::{background, trace};
use crate::{Camera, Color, Hittable};
use ember_math::{Interval, Ray, Vec3};
use rand::RngCore;

/// How a camera ray is turned into a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShadingMode {
    /// Full path tracing with roughness-driven bounces
    #[default]
    Path,
    /// Nearest-hit normal mapped to `0.5 * (n + 1)`, sky on miss
    Normals,
    /// Red on any hit, black on miss
    Coverage,
}

/// Color [`ShadingMode::Coverage`] paints hits with.
pub const COVERAGE_COLOR: Color = Color::new(1.0, 0.0, 0.0);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum surface interactions per path
    pub bounce_budget: u32,
    /// Samples per pixel; more than one enables sub-pixel jitter
    pub samples: u32,
    pub shading: ShadingMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            bounce_budget: 10,
            samples: 100,
            shading: ShadingMode::Path,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, bounce_budget: u32) -> Self {
        self.samples = samples;
        self.bounce_budget = bounce_budget;
        self
    }

    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Compute the color for one camera ray under `config.shading`.
pub fn shade(
    ray: &Ray,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    match config.shading {
        ShadingMode::Path => trace(ray, world, config.bounce_budget, rng),
        ShadingMode::Normals => match world.hit(ray, Interval::POSITIVE) {
            Some(hit) => (hit.normal + Vec3::ONE) * 0.5,
            None => background(ray),
        },
        ShadingMode::Coverage => match world.hit(ray, Interval::POSITIVE) {
            Some(_) => COVERAGE_COLOR,
            None => Color::ZERO,
        },
    }
}

/// Render a single pixel with multi-sampling.
///
/// Returns the mean over `config.samples` rays. The result is linear and
/// unclamped; display conversion belongs to the caller.
///
/// # Panics
///
/// Panics if the resolution or sample count is zero.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    assert!(
        config.width > 0 && config.height > 0,
        "resolution must be non-zero, got {}x{}",
        config.width,
        config.height
    );
    assert!(config.samples > 0, "samples per pixel must be non-zero");

    // A single sample goes through the pixel's corner point, unjittered
    let jitter = config.samples > 1;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples {
        let ray = camera.get_ray(x, y, config.width, config.height, jitter, rng);
        pixel_color += shade(&ray, world, config, rng);
    }

    pixel_color * (1.0 / config.samples as f32)
}

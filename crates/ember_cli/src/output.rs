//! Image storage and PNG export.
//!
//! Pixels are kept as linear floats while rendering and converted to 8-bit
//! only on save: each channel is clamped to [0, 1] and scaled by 255, with
//! no gamma curve applied.

use std::path::Path;

use anyhow::{Context, Result};
use ember_math::saturate;
use ember_renderer::Color;
use image::{Rgb, RgbImage};
use log::info;

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = saturate(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Row-major float image.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to an 8-bit image.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(color_to_rgb(self.get(x, y))))
    }

    /// Save as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_rgb8()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

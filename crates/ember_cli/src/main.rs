mod cli;
mod output;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ember_math::Vec3;
use ember_renderer::{render_pixel, Camera, Hittable, RenderConfig, Scene, SceneDescription};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use cli::Args;
use output::ImageBuffer;

/// Render every pixel in row-major order, logging once per percent of rows.
fn render_image(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    let mut reported = 0;

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }

        let percent = (y + 1) as u64 * 100 / config.height as u64;
        if percent > reported {
            reported = percent;
            info!("Progress {percent}%");
        }
    }

    image
}

fn load_scene(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => Ok(SceneDescription::reference()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let description = load_scene(&args)?;
    if args.print_scene {
        println!("{}", description.to_json()?);
        return Ok(());
    }
    let scene: Scene = description.build().context("Invalid scene")?;

    anyhow::ensure!(args.near > 0.0, "--near must be positive, got {}", args.near);
    let camera = Camera::new()
        .with_position(Vec3::new(0.0, 0.0, args.camera_z))
        .with_near(args.near);

    let config = RenderConfig::default()
        .with_resolution(args.width, args.height)
        .with_quality(args.samples, args.bounces)
        .with_shading(args.shading.into());

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    info!(
        "Rendering {}x{} with {} spp, {} bounces ({:?} shading)",
        config.width, config.height, config.samples, config.bounce_budget, config.shading
    );
    debug!("Scene has {} primitives, seed {}", scene.len(), seed);

    let start = Instant::now();
    let image = render_image(&camera, &scene, &config, &mut rng);
    info!("Rendered {} pixels in {:.2?}", config.pixel_count(), start.elapsed());

    image.save_png(&args.output)?;
    Ok(())
}

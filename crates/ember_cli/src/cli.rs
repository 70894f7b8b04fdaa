use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ember_renderer::ShadingMode;
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Shading modes selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shading {
    /// Full path tracing
    Path,
    /// Surface normals as colors
    Normals,
    /// Red where anything is hit
    Coverage,
}

impl From<Shading> for ShadingMode {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Path => ShadingMode::Path,
            Shading::Normals => ShadingMode::Normals,
            Shading::Coverage => ShadingMode::Coverage,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "ember")]
#[command(about = "Render a sphere/plane scene with a small Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Maximum bounces per path
    #[arg(long, short = 'b', default_value_t = 10)]
    pub bounces: u32,

    /// Samples per pixel (1 disables anti-aliasing jitter)
    #[arg(long, short = 's', default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Seed for the random stream; drawn from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene description; the built-in reference scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Print the scene description as JSON and exit
    #[arg(long)]
    pub print_scene: bool,

    /// How camera rays are shaded
    #[arg(long, value_enum, default_value = "path")]
    pub shading: Shading,

    /// Camera position along z
    #[arg(long, default_value_t = -3.0, allow_hyphen_values = true)]
    pub camera_z: f32,

    /// Distance from the camera to its near plane
    #[arg(long, default_value_t = 0.5)]
    pub near: f32,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

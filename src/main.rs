use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sphere_caster::raytracing::output::save_frame;
use sphere_caster::{render, Camera, CameraConfig, SceneKind};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
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

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the path where the rendered image is saved, plain PPM for .ppm,
    /// otherwise the format is picked from the extension
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,
    /// what to draw
    #[arg(long, value_enum, default_value_t = SceneKind::Sphere)]
    scene: SceneKind,
    /// image width in pixels, the height follows from the aspect ratio
    #[arg(long, default_value_t = 400)]
    width: u32,
    /// viewport width over viewport height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect_ratio: f64,
    /// height of the viewport in world units
    #[arg(long, default_value_t = 2.0)]
    viewport_height: f64,
    /// distance from the camera to the viewport
    #[arg(long, default_value_t = 1.0)]
    focal_length: f64,
    /// logging verbosity, RUST_LOG can refine it per module
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let config = CameraConfig {
        aspect_ratio: args.aspect_ratio,
        viewport_height: args.viewport_height,
        focal_length: args.focal_length,
        image_width: args.width,
    };
    config.validate()?;

    let camera = Camera::new(&config);
    let frame = render(&camera, args.scene, config.image_width, config.image_height());

    save_frame(&args.output, &frame)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    Ok(())
}

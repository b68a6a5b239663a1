//! Batch entry point: build the scene, render once, write the image.

use anyhow::Context;
use clap::Parser;
use glint_renderer::{output, random_scene, render, Camera, RenderConfig, Vec3};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// A batch Monte Carlo path tracer for sphere scenes
#[derive(Parser)]
#[command(name = "glint")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 32,
          value_parser = clap::value_parser!(u32).range(1..))]
    samples_per_pixel: u32,

    /// Base RNG seed; defaults to the wall clock, pass a value for
    /// reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "result.ppm")]
    output: PathBuf,
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(wall_clock_seed);

    info!(
        "glint: {}x{} at {} spp, seed {}",
        args.width, args.height, args.samples_per_pixel, seed
    );

    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let world = random_scene(&mut rng);
    info!("scene built in {:.2?}", start.elapsed());

    let look_from = Vec3::new(9.5, 2.0, 2.5);
    let look_at = Vec3::new(3.0, 0.5, 0.65);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3::new(0.0, 1.0, 0.0),
        25.0,
        args.width as f32 / args.height as f32,
        0.01,
        (look_from - look_at).length(),
    );

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        seed,
    };

    let start = Instant::now();
    let framebuffer = render(&world, &camera, &config);
    info!("rendered in {:.2?}", start.elapsed());

    output::save(&framebuffer, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}

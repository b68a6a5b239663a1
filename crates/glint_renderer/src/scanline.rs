//! Parallel scanline scheduler.
//!
//! One image row is the unit of work. Rows have no data dependency
//! on each other and every row gets its own seeded RNG, so the
//! result is identical no matter how rayon distributes the work.

use crate::integrator::render_pixel;
use crate::{Camera, Color, Hittable};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Render parameters for one batch run.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Jittered camera rays per pixel
    pub samples_per_pixel: u32,
    /// Base seed; every row derives its own stream from it
    pub seed: u64,
}

/// Rendered image, row-major in final image order (top row first).
/// Each cell is a gamma-corrected color, written exactly once.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), y counted from the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in storage (file) order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Derive an independent RNG stream for one scanline.
fn row_rng(seed: u64, y: u32) -> StdRng {
    // Same mixing shape the renderer has always used: distinct odd
    // seeds per row, decorrelated from neighbours.
    let mixed = (y as u64)
        .wrapping_mul(9781)
        .wrapping_add(seed.wrapping_mul(6271))
        | 1;
    StdRng::seed_from_u64(mixed)
}

/// Render one scanline into a private buffer.
///
/// `y` counts from the bottom of the image (v grows upward).
fn render_row(
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    y: u32,
) -> Vec<Color> {
    let mut rng = row_rng(config.seed, y);
    let row = (0..config.width)
        .map(|x| {
            render_pixel(
                camera,
                world,
                x,
                y,
                config.width,
                config.height,
                config.samples_per_pixel,
                &mut rng,
            )
        })
        .collect();
    debug!("finished row {}", y);
    row
}

/// Render the scene across all cores, one worker per row.
pub fn render(world: &dyn Hittable, camera: &Camera, config: &RenderConfig) -> Framebuffer {
    info!(
        "rendering {}x{} at {} spp (seed {})",
        config.width, config.height, config.samples_per_pixel, config.seed
    );

    let rows: Vec<Vec<Color>> = (0..config.height)
        .into_par_iter()
        .map(|y| render_row(world, camera, config, y))
        .collect();

    // Rows were rendered bottom-to-top; the framebuffer stores the
    // top row first, so the row index flips here.
    let mut fb = Framebuffer::new(config.width, config.height);
    for (y, row) in rows.into_iter().enumerate() {
        let file_y = config.height - 1 - y as u32;
        for (x, color) in row.into_iter().enumerate() {
            fb.set(x as u32, file_y, color);
        }
    }

    fb
}

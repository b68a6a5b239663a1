//! Recursive radiance integrator.
//!
//! Traces a camera ray through the scene, multiplying in each
//! surface's attenuation until the ray escapes to the sky, is
//! absorbed, or runs out of bounce budget.

use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable};
use glint_math::{Interval, Ray};
use rand::RngCore;

/// Hard recursion cutoff. Deep specular chains get truncated to
/// black instead of growing the stack without bound.
pub const MAX_DEPTH: u32 = 50;

/// Lower bound of every hit query; scattered rays start exactly on a
/// surface and would otherwise re-hit it at t ~ 0 (shadow acne).
const T_MIN: f32 = 0.001;

/// Compute the color seen by a ray.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) {
        if depth < MAX_DEPTH {
            if let Some(scatter) = rec.material.scatter(ray, &rec, rng) {
                return scatter.attenuation * ray_color(&scatter.scattered, world, depth + 1, rng);
            }
        }
        // Absorbed, or bounce budget exhausted
        return Color::ZERO;
    }

    sky_gradient(ray)
}

/// Analytic sky: lerp white at the horizon to blue at the zenith.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * white + t * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a gamma-corrected color to 8-bit RGB,
/// floor(255 * clamped channel).
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b]
}

/// Render a single pixel: average `samples` jittered camera rays,
/// then gamma-correct the result.
///
/// `x` counts from the left, `y` from the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    // A zero sample count would divide to NaN below; treat it as 1.
    let samples = samples.max(1);
    let mut color = Color::ZERO;

    for _ in 0..samples {
        let s = (x as f32 + gen_f32(rng)) / width as f32;
        let t = (y as f32 + gen_f32(rng)) / height as f32;
        let ray = camera.get_ray(s, t, rng);
        color += ray_color(&ray, world, 0, rng);
    }

    color /= samples as f32;
    Color::new(
        linear_to_gamma(color.x),
        linear_to_gamma(color.y),
        linear_to_gamma(color.z),
    )
}

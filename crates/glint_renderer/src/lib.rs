//! Glint - CPU Monte Carlo path tracing
//!
//! A batch path tracer for sphere scenes: stochastic camera rays,
//! recursive scattering through diffuse/metal/glass materials, and a
//! parallel scanline scheduler producing one image per run.

mod camera;
mod hittable;
mod integrator;
mod material;
mod sampling;
mod scanline;
mod scene;
mod sphere;

pub mod output;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{ray_color, render_pixel, color_to_rgb8, linear_to_gamma, MAX_DEPTH};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use scanline::{render, Framebuffer, RenderConfig};
pub use scene::random_scene;
pub use sphere::Sphere;

/// Re-export math types
pub use glint_math::{Interval, Ray, Vec3};

//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scattering event.
pub struct ScatterResult {
    /// Per-channel reflectance multiplied into the path
    pub attenuation: Color,
    /// The next ray to trace
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        // Aim at a random point in the unit sphere tangent to the hit
        // point; this approximates cosine-weighted diffuse scattering.
        let target = rec.p + rec.normal + random_in_unit_sphere(rng);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, target - rec.p),
        })
    }
}

/// Metal (specular) material.
#[derive(Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzzing can push the ray below the surface; absorb it there.
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Clone)]
pub struct Dielectric {
    /// Index of refraction (1.5 = glass, 2.4 = diamond)
    refractive_index: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    pub fn new(refractive_index: f32) -> Self {
        Self { refractive_index }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let dir = ray_in.direction();
        let d_dot_n = dir.dot(rec.normal);

        // The stored normal is the geometric outward normal; flip it
        // and the index ratio so the refraction math always sees the
        // ray arriving from outside the interface.
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            (
                -rec.normal,
                self.refractive_index,
                self.refractive_index * d_dot_n / dir.length(),
            )
        } else {
            (
                rec.normal,
                1.0 / self.refractive_index,
                -d_dot_n / dir.length(),
            )
        };

        let refracted = refract(dir, outward_normal, ni_over_nt);
        let reflect_prob = match refracted {
            // Angle-dependent Fresnel reflectance
            Some(_) => schlick(cosine, self.refractive_index),
            // Total internal reflection
            None => 1.0,
        };

        let direction = match refracted {
            Some(refr) if gen_f32(rng) >= reflect_prob => refr,
            _ => reflect(dir.normalize(), rec.normal),
        };

        // Clear glass: no absorption on either path.
        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface, or `None` on total internal
/// reflection (negative discriminant in Snell's law).
#[inline]
fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for Fresnel reflectance.
#[inline]
fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

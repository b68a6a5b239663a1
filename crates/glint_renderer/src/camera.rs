//! Thin-lens camera for stochastic ray generation.

use crate::sampling::random_in_unit_disk;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// All fields are derived at construction and immutable afterwards;
/// the viewport spans the focus plane, so points at `focus_dist`
/// render sharp and everything else blurs with the aperture.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Camera-local orthonormal basis
    u: Vec3,
    v: Vec3,
    #[allow(dead_code)]
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `look_from` / `look_at` / `vup`: position and orientation
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width / height
    /// - `aperture`: lens diameter (0 disables defocus blur)
    /// - `focus_dist`: distance to the plane of perfect focus
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left_corner: look_from
                - half_width * focus_dist * u
                - half_height * focus_dist * v
                - focus_dist * w,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through viewport coordinates (s, t) in [0, 1],
    /// with the origin jittered over the lens aperture.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_camera(aperture: f32) -> Camera {
        Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            2.0,
            aperture,
            1.0,
        )
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = test_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        let dir = ray.direction().normalize();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_aperture_has_fixed_origin() {
        let camera = test_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..16 {
            let ray = camera.get_ray(0.25, 0.75, &mut rng);
            assert_eq!(ray.origin(), Vec3::ZERO);
        }
    }

    #[test]
    fn test_aperture_jitters_origin_within_lens() {
        let camera = test_camera(0.5);
        let mut rng = StdRng::seed_from_u64(42);

        let mut moved = false;
        for _ in 0..16 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            let offset = ray.origin().length();
            assert!(offset <= 0.25 + 1e-6);
            moved |= offset > 0.0;
        }
        assert!(moved);
    }

    #[test]
    fn test_viewport_corners() {
        // vfov 90 at focus 1: half height 1, half width = aspect.
        let camera = test_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        let bottom_left = camera.get_ray(0.0, 0.0, &mut rng);
        assert!((bottom_left.direction() - Vec3::new(-2.0, -1.0, -1.0)).length() < 1e-5);

        let top_right = camera.get_ray(1.0, 1.0, &mut rng);
        assert!((top_right.direction() - Vec3::new(2.0, 1.0, -1.0)).length() < 1e-5);
    }
}

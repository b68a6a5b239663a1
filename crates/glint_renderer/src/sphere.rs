//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive. Owns its material.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            center,
            radius,
            material,
        }
    }
}

impl<M: Material> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Half-angle form: discriminant is h^2 - ac, no factor of 4.
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn gray_sphere(center: Vec3, radius: f32) -> Sphere<Lambertian> {
        Sphere::new(center, radius, Lambertian::new(Vec3::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn test_through_center_hit_distance() {
        // A ray through the center hits at |center - origin| - radius.
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let center = Vec3::new(1.0, 2.0, -7.0);
        let sphere = gray_sphere(center, 2.0);

        let ray = Ray::new(origin, (center - origin).normalize());
        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();

        let expected = (center - origin).length() - 2.0;
        assert!((rec.t - expected).abs() < 1e-4);
    }

    #[test]
    fn test_hit_normal_is_outward_unit() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();

        // Front of the sphere: normal faces back toward the origin.
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .is_none());
    }

    #[test]
    fn test_far_root_from_inside() {
        // From the center, the near root is negative and must be
        // rejected in favor of the far one.
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        // Outward geometric normal, even though the ray is inside.
        assert!((rec.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_roots_outside_range_are_rejected() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Entry at t=4, exit at t=6; a range past both misses.
        assert!(sphere.hit(&ray, Interval::new(6.5, 100.0)).is_none());
        // A range between the roots picks the exit point.
        let rec = sphere.hit(&ray, Interval::new(4.5, 100.0)).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-4);
    }
}

//! Shared random sampling helpers.
//!
//! Every function takes the caller's RNG explicitly; there is no
//! global or thread-local generator anywhere in the transport loop.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Rejection sampling terminates in a couple of iterations on
/// average; the cap only removes the theoretical unbounded loop.
const REJECTION_CAP: u32 = 64;

/// Generate a uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Sample a uniform random point inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    let mut p = Vec3::ZERO;
    for _ in 0..REJECTION_CAP {
        p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    // Cap exhausted: the last candidate is outside the sphere and
    // therefore nonzero, so project it onto the boundary.
    p.normalize()
}

/// Sample a uniform random point inside the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    let mut p = Vec3::ZERO;
    for _ in 0..REJECTION_CAP {
        p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    p.normalize()
}

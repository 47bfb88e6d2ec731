use glam::{Vec2, Vec3};
use oorandom::Rand32;

/// Per axis midpoint, height included
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) / 2.0
}

pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    a.truncate().distance(b.truncate())
}

/// Uniform in [-1, 1)
pub fn random_scalar(rng: &mut Rand32) -> f32 {
    rng.rand_float() * 2.0 - 1.0
}

/// Random point in the square of half-size `radius` around `center`
pub fn random_offset(rng: &mut Rand32, center: Vec2, radius: f32) -> Vec2 {
    let rx = random_scalar(rng);
    let ry = random_scalar(rng);
    center + Vec2::new(rx, ry) * radius
}

/// Uniform index into a collection of `len` elements
pub fn random_index(rng: &mut Rand32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.rand_range(0..len as u32) as usize)
}

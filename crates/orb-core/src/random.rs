use rand::Rng;
use std::f32::consts::TAU;

/// Uniform value in `[min, max)`. Returns `min` for an empty range.
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.gen::<f32>() * (max - min) + min
}

#[inline]
pub fn rand_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * TAU
}

/// `u^exponent` for uniform `u`; exponents above 1 bias toward zero.
#[inline]
pub fn biased_unit<R: Rng + ?Sized>(rng: &mut R, exponent: f32) -> f32 {
    rng.gen::<f32>().powf(exponent)
}

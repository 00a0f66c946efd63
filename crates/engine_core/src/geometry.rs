//! Angle conversion, numeric rounding, and random sampling helpers.

use rand::Rng;

/// Convert degrees to radians (`d * π / 180`).
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Uniform integer in the inclusive range `[min, max]`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Round `value` to `decimals` decimal places.
///
/// Scales by `10^decimals`. Scaling by `10 * decimals` only agrees for a
/// single decimal place.
pub fn round_to(value: f32, decimals: u32) -> f32 {
    let scale = 10f32.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Normalize an angle in degrees into `[0, 360)`, handling negative input.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

//! Fractal Brownian motion over the simplex kernels.
//!
//! Each octave doubles the sampling frequency and halves the amplitude. The
//! sum is not renormalised: with more octaves its magnitude approaches twice
//! the single-octave range, so callers must not assume `[-1, 1]`.

use crate::noise::simplex::{noise2, noise3, noise4};

/// Octave count used when a caller has no preference.
pub const DEFAULT_OCTAVES: u32 = 3;

/// Sums `octaves` layers of `kernel`, starting at weight 1.0.
#[inline]
fn accumulate<const N: usize>(
    mut coords: [f64; N],
    octaves: u32,
    kernel: impl Fn([f64; N]) -> f64,
) -> f64 {
    let mut sum = 0.0;
    let mut weight = 1.0;
    for _ in 0..octaves {
        sum += kernel(coords) * weight;
        for c in &mut coords {
            *c *= 2.0;
        }
        weight *= 0.5;
    }
    sum
}

/// 2D fractal noise. Zero octaves yield `0.0`.
#[must_use]
pub fn fbm2(x: f64, y: f64, octaves: u32) -> f64 {
    accumulate([x, y], octaves, |[x, y]| noise2(x, y))
}

/// 3D fractal noise. Zero octaves yield `0.0`.
#[must_use]
pub fn fbm3(x: f64, y: f64, z: f64, octaves: u32) -> f64 {
    accumulate([x, y, z], octaves, |[x, y, z]| noise3(x, y, z))
}

/// 4D fractal noise. Zero octaves yield `0.0`.
#[must_use]
pub fn fbm4(x: f64, y: f64, z: f64, w: f64, octaves: u32) -> f64 {
    accumulate([x, y, z, w], octaves, |[x, y, z, w]| noise4(x, y, z, w))
}

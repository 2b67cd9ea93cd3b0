//! Loopable 1D noise.
//!
//! A phase `x` is mapped onto a circle in 2D noise space, so the output repeats
//! exactly with period 1.0. Useful for crossfading wavetables and looping
//! animation curves.

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::MAX_OCTAVES;
use crate::error::ConfigError;
use crate::noise::fractal::{DEFAULT_OCTAVES, fbm2};

/// Default circle centre, chosen away from lattice symmetry points.
pub const DEFAULT_OFFSET: DVec2 = DVec2::new(31.4, -62.8);
/// Default circle radius.
pub const DEFAULT_FREQ_SCALE: f64 = 0.2;

/// Sample fractal noise on a circle of radius `freq_scale` centred at `offset`.
///
/// `periodic(x, ..) == periodic(x + 1.0, ..)` up to floating-point error, for
/// any magnitude of `x`: the phase is reduced to `[0, 1)` before scaling by `2π`.
#[must_use]
pub fn periodic(x: f64, offset: DVec2, freq_scale: f64, octaves: u32) -> f64 {
    let phase = x.rem_euclid(1.0) * TAU;
    let p = DVec2::new(phase.cos(), phase.sin()) * freq_scale + offset;
    fbm2(p.x, p.y, octaves)
}

/// Parameters for [`periodic`], with the conventional defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicNoise {
    /// Centre of the sampling circle in noise space.
    pub offset: DVec2,
    /// Radius of the sampling circle; larger values give busier loops.
    pub freq_scale: f64,
    /// Number of fBm octaves.
    pub octaves: u32,
}

impl Default for PeriodicNoise {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_FREQ_SCALE, DEFAULT_OCTAVES)
    }
}

impl PeriodicNoise {
    /// Create a parameter set.
    #[must_use]
    pub const fn new(offset: DVec2, freq_scale: f64, octaves: u32) -> Self {
        Self {
            offset,
            freq_scale,
            octaves,
        }
    }

    /// Sample at phase `x`.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64) -> f64 {
        periodic(x, self.offset, self.freq_scale, self.octaves)
    }

    /// Reject parameters that cannot produce a meaningful loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset {
                x: self.offset.x,
                y: self.offset.y,
            });
        }
        if !self.freq_scale.is_finite() || self.freq_scale <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.freq_scale));
        }
        if self.octaves > MAX_OCTAVES {
            return Err(ConfigError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        Ok(())
    }
}

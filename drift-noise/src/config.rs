//! Configuration for the noise wrappers.
//!
//! Kernels take no configuration; only the fBm octave count and the
//! [`PeriodicNoise`] parameters have tunable defaults. Configs are written in
//! JSON5, every field is optional:
//!
//! ```json5
//! {
//!     octaves: 4,
//!     periodic: { offset: [12.0, -7.5], freq_scale: 0.35 },
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::noise::{DEFAULT_OCTAVES, PeriodicNoise, fbm2, fbm3, fbm4};

/// Largest accepted octave count.
///
/// The last accepted octave samples at `2^31` times the base frequency, where
/// coordinates of magnitude 1 reach the edge of the `i32` lattice. Further
/// octaves would only sample saturated cells.
pub const MAX_OCTAVES: u32 = 32;

/// Tunable defaults for the noise wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Octave count for the fBm helpers on this config.
    pub octaves: u32,
    /// Parameters for periodic noise.
    pub periodic: PeriodicNoise,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            periodic: PeriodicNoise::default(),
        }
    }
}

impl NoiseConfig {
    /// Parse and validate a JSON5 config.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(source)?;
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected noise config");
            return Err(err);
        }
        tracing::debug!(
            octaves = config.octaves,
            periodic_octaves = config.periodic.octaves,
            freq_scale = config.periodic.freq_scale,
            "loaded noise config"
        );
        Ok(config)
    }

    /// Read, parse and validate a JSON5 config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading noise config");
        Self::from_json5(&fs::read_to_string(path)?)
    }

    /// Check every field is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.octaves > MAX_OCTAVES {
            return Err(ConfigError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        self.periodic.validate()
    }

    /// [`fbm2`] with this config's octave count.
    #[inline]
    #[must_use]
    pub fn fbm2(&self, x: f64, y: f64) -> f64 {
        fbm2(x, y, self.octaves)
    }

    /// [`fbm3`] with this config's octave count.
    #[inline]
    #[must_use]
    pub fn fbm3(&self, x: f64, y: f64, z: f64) -> f64 {
        fbm3(x, y, z, self.octaves)
    }

    /// [`fbm4`] with this config's octave count.
    #[inline]
    #[must_use]
    pub fn fbm4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        fbm4(x, y, z, w, self.octaves)
    }

    /// Periodic noise at phase `x` with this config's parameters.
    #[inline]
    #[must_use]
    pub fn periodic(&self, x: f64) -> f64 {
        self.periodic.sample(x)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::noise::{DEFAULT_FREQ_SCALE, DEFAULT_OFFSET};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = NoiseConfig::from_json5("{}").expect("empty config should parse");
        assert_eq!(config, NoiseConfig::default());
        assert_eq!(config.octaves, 3);
        assert_eq!(config.periodic.offset, DEFAULT_OFFSET);
    }

    #[test]
    fn test_partial_config() {
        let source = r"{
            // comments and trailing commas are fine in JSON5
            octaves: 5,
            periodic: { offset: [12.0, -7.5], },
        }";
        let config = NoiseConfig::from_json5(source).expect("config should parse");
        assert_eq!(config.octaves, 5);
        assert_eq!(config.periodic.offset, DVec2::new(12.0, -7.5));
        assert!((config.periodic.freq_scale - DEFAULT_FREQ_SCALE).abs() < f64::EPSILON);
        assert_eq!(config.periodic.octaves, DEFAULT_OCTAVES);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            NoiseConfig::from_json5("{ octaves: 33 }"),
            Err(ConfigError::TooManyOctaves { octaves: 33, max: MAX_OCTAVES })
        ));
        assert!(matches!(
            NoiseConfig::from_json5("{ periodic: { freq_scale: -1.0 } }"),
            Err(ConfigError::InvalidFrequency(_))
        ));
        assert!(matches!(
            NoiseConfig::from_json5("{ octaves: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_octave_cap_matches_lattice_range() {
        // Octave n scales coordinates by 2^n; the last accepted one lands on the i32 edge
        let last_scale = 2f64.powi(MAX_OCTAVES as i32 - 1);
        assert_eq!(last_scale, -f64::from(i32::MIN));
        assert!(last_scale > f64::from(i32::MAX));

        let config = NoiseConfig::from_json5("{ octaves: 32 }").expect("cap is inclusive");
        assert_eq!(config.octaves, MAX_OCTAVES);
        assert!(config.fbm2(0.7, -1.3).is_finite());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            NoiseConfig::load("/nonexistent/drift-noise.json5"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_helpers_use_config() {
        let config = NoiseConfig {
            octaves: 2,
            ..NoiseConfig::default()
        };
        assert_eq!(config.fbm2(0.3, 0.9), fbm2(0.3, 0.9, 2));
        assert_eq!(config.fbm3(0.3, 0.9, 1.1), fbm3(0.3, 0.9, 1.1, 2));
        assert_eq!(config.fbm4(0.3, 0.9, 1.1, 2.0), fbm4(0.3, 0.9, 1.1, 2.0, 2));
        assert_eq!(config.periodic(0.5), config.periodic.sample(0.5));
    }
}

//! Error types for the noise crate.
//!
//! The kernels themselves are total; errors only arise from misuse of the
//! [`Simplex`](crate::noise::Simplex) namespace and from loading configuration.

use std::io;

use thiserror::Error;

/// An error raised by the noise kernel namespace.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseError {
    /// The kernel namespace holds no state and cannot be instantiated.
    #[error("Simplex is a stateless namespace and cannot be instantiated; call its functions directly")]
    Stateless,
}

/// An error that can occur while loading or validating noise configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read noise config: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse JSON5 into a config.
    #[error("Failed to parse noise config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The periodic offset has a non-finite component.
    #[error("Periodic offset must be finite, got ({x}, {y})")]
    NonFiniteOffset {
        /// X component of the offending offset.
        x: f64,
        /// Y component of the offending offset.
        y: f64,
    },
    /// The periodic frequency scale is non-finite or not positive.
    #[error("Frequency scale must be finite and positive, got {0}")]
    InvalidFrequency(f64),
    /// More octaves were requested than carry any signal.
    #[error("Octave count {octaves} exceeds the maximum of {max}")]
    TooManyOctaves {
        /// The requested octave count.
        octaves: u32,
        /// The largest accepted octave count.
        max: u32,
    },
}

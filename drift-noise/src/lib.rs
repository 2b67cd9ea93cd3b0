//! Deterministic, seedless simplex noise.
//!
//! Provides 2D, 3D and 4D simplex kernels over `f64` coordinates, fractal
//! Brownian motion wrappers, and a periodic 1D variant for loopable signals.
//! All data is compile-time constant and every function is pure, so noise can
//! be sampled from any number of threads without synchronisation.
//!
//! ```
//! use drift_noise::noise::{PeriodicNoise, fbm2, noise3};
//!
//! let v = noise3(5.077, 7.508, 7.33);
//! assert!((v + 0.5456).abs() < 1e-4);
//!
//! let detail = fbm2(1.5, -2.5, 4);
//! assert!(detail.abs() < 2.0);
//!
//! let lfo = PeriodicNoise::default();
//! assert!((lfo.sample(0.25) - lfo.sample(1.25)).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod noise;

pub use config::NoiseConfig;
pub use error::{ConfigError, NoiseError};

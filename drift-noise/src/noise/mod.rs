//! Seedless simplex noise and the wrappers built on it.
//!
//! - [`noise2`], [`noise3`], [`noise4`] - the simplex kernels
//! - [`fbm2`], [`fbm3`], [`fbm4`] - fractal Brownian motion over the kernels
//! - [`periodic`] / [`PeriodicNoise`] - 1D noise that loops with period 1.0
//! - [`gradient_table`] - the constant permutation and gradient data

pub mod gradient_table;

mod fractal;
mod periodic;
mod simplex;

pub use fractal::{DEFAULT_OCTAVES, fbm2, fbm3, fbm4};
pub use periodic::{DEFAULT_FREQ_SCALE, DEFAULT_OFFSET, PeriodicNoise, periodic};
pub use simplex::{
    F2, F3, F4, G2, G3, G4, Simplex, noise2, noise2v, noise3, noise3v, noise4, noise4v,
};

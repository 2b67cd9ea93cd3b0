//! Simplex noise kernels over 2D, 3D and 4D coordinates.
//!
//! Follows Gustavson's reference formulation: skew the input onto the simplex
//! grid, locate the containing simplex, then sum radially attenuated gradient
//! contributions from its corners. Every function here is pure and seedless;
//! the only shared data is the read-only [`gradient_table`](super::gradient_table).

use glam::{DVec2, DVec3, DVec4};

use crate::error::NoiseError;
use crate::math::floor;
use crate::noise::fractal::{fbm2, fbm3, fbm4};
use crate::noise::gradient_table::{GRADIENT_3D, GRADIENT_4D, dot2, dot3, dot4, perm, perm_mod12};
use crate::noise::periodic::periodic;

/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
#[allow(clippy::unreadable_literal)]
pub const F2: f64 = 0.36602540378444;
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
#[allow(clippy::unreadable_literal)]
pub const G2: f64 = 0.21132486540519;
/// Skewing factor for 3D simplex: `1/3`
pub const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
pub const G3: f64 = 1.0 / 6.0;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
#[allow(clippy::unreadable_literal)]
pub const F4: f64 = 0.30901699437495;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
#[allow(clippy::unreadable_literal)]
pub const G4: f64 = 0.13819660112501;

/// Squared radius of a corner's influence in 2D.
const RADIUS_2D: f64 = 0.5;
/// Squared radius of a corner's influence in 3D and 4D.
const RADIUS_3D: f64 = 0.6;

const SCALE_2D: f64 = 70.0;
const SCALE_3D: f64 = 32.0;
const SCALE_4D: f64 = 27.0;

/// Radial falloff `t⁴` for a corner, or `None` outside its radius.
#[inline]
fn falloff(t: f64) -> Option<f64> {
    if t < 0.0 {
        None
    } else {
        let t = t * t;
        Some(t * t)
    }
}

#[inline]
fn corner_2d(gi: usize, x: f64, y: f64) -> f64 {
    falloff(RADIUS_2D - x * x - y * y).map_or(0.0, |t| t * dot2(&GRADIENT_3D[gi], x, y))
}

#[inline]
fn corner_3d(gi: usize, x: f64, y: f64, z: f64) -> f64 {
    falloff(RADIUS_3D - x * x - y * y - z * z)
        .map_or(0.0, |t| t * dot3(&GRADIENT_3D[gi], x, y, z))
}

#[inline]
fn corner_4d(gi: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
    falloff(RADIUS_3D - x * x - y * y - z * z - w * w)
        .map_or(0.0, |t| t * dot4(&GRADIENT_4D[gi], x, y, z, w))
}

/// Wraps a lattice coordinate into the permutation table.
#[inline]
const fn wrap(cell: i32) -> usize {
    (cell & 0xFF) as usize
}

/// Sample 2D simplex noise.
///
/// Returns a value in roughly `[-1, 1]` (scaled by 70). Non-finite input
/// yields an unspecified (typically `NaN`) result.
#[must_use]
pub fn noise2(xin: f64, yin: f64) -> f64 {
    let s = (xin + yin) * F2;
    let i = floor(xin + s);
    let j = floor(yin + s);
    let t = (f64::from(i) + f64::from(j)) * G2;
    let x0 = xin - (f64::from(i) - t);
    let y0 = yin - (f64::from(j) - t);

    // Lower triangle walks x first; ties fall to the upper triangle
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = wrap(i);
    let jj = wrap(j);
    let gi0 = perm_mod12(ii + perm(jj));
    let gi1 = perm_mod12(ii + i1 + perm(jj + j1));
    let gi2 = perm_mod12(ii + 1 + perm(jj + 1));

    let n0 = corner_2d(gi0, x0, y0);
    let n1 = corner_2d(gi1, x1, y1);
    let n2 = corner_2d(gi2, x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

/// Sample 3D simplex noise.
///
/// Returns a value in roughly `[-1, 1]` (scaled by 32).
#[must_use]
pub fn noise3(xin: f64, yin: f64, zin: f64) -> f64 {
    let s = (xin + yin + zin) * F3;
    let i = floor(xin + s);
    let j = floor(yin + s);
    let k = floor(zin + s);
    let t = (f64::from(i) + f64::from(j) + f64::from(k)) * G3;
    let x0 = xin - (f64::from(i) - t);
    let y0 = yin - (f64::from(j) - t);
    let z0 = zin - (f64::from(k) - t);

    // Offsets of the second and third corners, ordered by descending local coordinate
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0) // X Y Z
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1) // X Z Y
        } else {
            (0, 0, 1, 1, 0, 1) // Z X Y
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1) // Z Y X
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1) // Y Z X
    } else {
        (0, 1, 0, 1, 1, 0) // Y X Z
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let gi0 = perm_mod12(ii + perm(jj + perm(kk)));
    let gi1 = perm_mod12(ii + i1 + perm(jj + j1 + perm(kk + k1)));
    let gi2 = perm_mod12(ii + i2 + perm(jj + j2 + perm(kk + k2)));
    let gi3 = perm_mod12(ii + 1 + perm(jj + 1 + perm(kk + 1)));

    let n0 = corner_3d(gi0, x0, y0, z0);
    let n1 = corner_3d(gi1, x1, y1, z1);
    let n2 = corner_3d(gi2, x2, y2, z2);
    let n3 = corner_3d(gi3, x3, y3, z3);

    SCALE_3D * (n0 + n1 + n2 + n3)
}

/// Sample 4D simplex noise.
///
/// The containing simplex is found by ranking the four local coordinates
/// against each other; an axis with rank `r` steps in at corner `4 - r`.
/// Returns a value in roughly `[-1, 1]` (scaled by 27).
#[must_use]
pub fn noise4(xin: f64, yin: f64, zin: f64, win: f64) -> f64 {
    let s = (xin + yin + zin + win) * F4;
    let i = floor(xin + s);
    let j = floor(yin + s);
    let k = floor(zin + s);
    let l = floor(win + s);
    let t = (f64::from(i) + f64::from(j) + f64::from(k) + f64::from(l)) * G4;
    let local = [
        xin - (f64::from(i) - t),
        yin - (f64::from(j) - t),
        zin - (f64::from(k) - t),
        win - (f64::from(l) - t),
    ];

    let mut rank = [0u8; 4];
    for a in 0..4 {
        for b in a + 1..4 {
            if local[a] > local[b] {
                rank[a] += 1;
            } else {
                rank[b] += 1;
            }
        }
    }

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let ll = wrap(l);

    let mut sum = 0.0;
    for depth in 0..=4u8 {
        // Corner 0 takes no steps, corner 4 steps along every axis
        let step = rank.map(|r| usize::from(r + depth >= 4));
        let unskew = f64::from(depth) * G4;
        let x = local[0] - step[0] as f64 + unskew;
        let y = local[1] - step[1] as f64 + unskew;
        let z = local[2] - step[2] as f64 + unskew;
        let w = local[3] - step[3] as f64 + unskew;

        let gi = perm(
            ii + step[0] + perm(jj + step[1] + perm(kk + step[2] + perm(ll + step[3]))),
        ) % GRADIENT_4D.len();
        sum += corner_4d(gi, x, y, z, w);
    }

    SCALE_4D * sum
}

/// [`noise2`] taking a [`DVec2`].
#[inline]
#[must_use]
pub fn noise2v(p: DVec2) -> f64 {
    noise2(p.x, p.y)
}

/// [`noise3`] taking a [`DVec3`].
#[inline]
#[must_use]
pub fn noise3v(p: DVec3) -> f64 {
    noise3(p.x, p.y, p.z)
}

/// [`noise4`] taking a [`DVec4`].
#[inline]
#[must_use]
pub fn noise4v(p: DVec4) -> f64 {
    noise4(p.x, p.y, p.z, p.w)
}

/// Namespace for the simplex kernels and the wrappers built on them.
///
/// Nothing here carries per-instance state, so this type has no values:
/// call [`Simplex::noise2`], [`Simplex::fbm2`], [`Simplex::periodic`] and
/// friends directly. [`Simplex::try_new`] exists
/// only to report that construction is meaningless.
#[derive(Debug)]
pub enum Simplex {}

impl Simplex {
    /// Always fails with [`NoiseError::Stateless`].
    pub fn try_new() -> Result<Self, NoiseError> {
        tracing::warn!("attempted to construct the stateless simplex namespace");
        Err(NoiseError::Stateless)
    }

    /// See [`noise2`].
    #[inline]
    #[must_use]
    pub fn noise2(x: f64, y: f64) -> f64 {
        noise2(x, y)
    }

    /// See [`noise3`].
    #[inline]
    #[must_use]
    pub fn noise3(x: f64, y: f64, z: f64) -> f64 {
        noise3(x, y, z)
    }

    /// See [`noise4`].
    #[inline]
    #[must_use]
    pub fn noise4(x: f64, y: f64, z: f64, w: f64) -> f64 {
        noise4(x, y, z, w)
    }

    /// See [`fbm2`].
    #[inline]
    #[must_use]
    pub fn fbm2(x: f64, y: f64, octaves: u32) -> f64 {
        fbm2(x, y, octaves)
    }

    /// See [`fbm3`].
    #[inline]
    #[must_use]
    pub fn fbm3(x: f64, y: f64, z: f64, octaves: u32) -> f64 {
        fbm3(x, y, z, octaves)
    }

    /// See [`fbm4`].
    #[inline]
    #[must_use]
    pub fn fbm4(x: f64, y: f64, z: f64, w: f64, octaves: u32) -> f64 {
        fbm4(x, y, z, w, octaves)
    }

    /// See [`periodic`].
    #[inline]
    #[must_use]
    pub fn periodic(x: f64, offset: DVec2, freq_scale: f64, octaves: u32) -> f64 {
        periodic(x, offset, freq_scale, octaves)
    }
}

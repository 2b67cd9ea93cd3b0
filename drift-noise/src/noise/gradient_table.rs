//! Permutation and gradient tables shared by every simplex kernel.
//!
//! All data here is built at compile time. The 256-entry permutation is the
//! classic Perlin reference permutation; it is mirrored into a 512-entry table
//! so hashing `ii + perm(jj + 1)` never needs to wrap.

/// The base permutation of `0..=255`.
#[rustfmt::skip]
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Length of the mirrored lookup tables.
pub const TABLE_LEN: usize = 512;

static PERM: [u8; TABLE_LEN] = mirror(&PERMUTATION, 256);
static PERM_MOD12: [u8; TABLE_LEN] = mirror(&PERMUTATION, 12);

/// Gradient vectors for 2D and 3D noise: the twelve edge midpoints of a cube.
///
/// 2D noise uses only the first two components.
pub const GRADIENT_3D: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Gradient vectors for 4D noise: one zero component, the other three `±1`.
pub const GRADIENT_4D: [[i32; 4]; 32] = [
    [0, 1, 1, 1],
    [0, 1, 1, -1],
    [0, 1, -1, 1],
    [0, 1, -1, -1],
    [0, -1, 1, 1],
    [0, -1, 1, -1],
    [0, -1, -1, 1],
    [0, -1, -1, -1],
    [1, 0, 1, 1],
    [1, 0, 1, -1],
    [1, 0, -1, 1],
    [1, 0, -1, -1],
    [-1, 0, 1, 1],
    [-1, 0, 1, -1],
    [-1, 0, -1, 1],
    [-1, 0, -1, -1],
    [1, 1, 0, 1],
    [1, 1, 0, -1],
    [1, -1, 0, 1],
    [1, -1, 0, -1],
    [-1, 1, 0, 1],
    [-1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, -1, 0, -1],
    [1, 1, 1, 0],
    [1, 1, -1, 0],
    [1, -1, 1, 0],
    [1, -1, -1, 0],
    [-1, 1, 1, 0],
    [-1, 1, -1, 0],
    [-1, -1, 1, 0],
    [-1, -1, -1, 0],
];

/// Expands `base` to [`TABLE_LEN`] entries, reducing each value modulo `modulus`.
const fn mirror(base: &[u8; 256], modulus: u16) -> [u8; TABLE_LEN] {
    let mut out = [0u8; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        out[i] = (base[i & 0xFF] as u16 % modulus) as u8;
        i += 1;
    }
    out
}

/// Looks up the mirrored permutation table.
///
/// # Panics
///
/// Panics if `index >= 512`. Kernel hashing peaks at index 511.
#[inline]
#[must_use]
pub fn perm(index: usize) -> usize {
    usize::from(PERM[index])
}

/// Looks up the permutation table reduced modulo 12, indexing [`GRADIENT_3D`].
///
/// # Panics
///
/// Panics if `index >= 512`.
#[inline]
#[must_use]
pub fn perm_mod12(index: usize) -> usize {
    usize::from(PERM_MOD12[index])
}

/// Dot product of a 3D gradient's first two components with a 2D offset.
#[inline]
pub(crate) fn dot2(g: &[i32; 3], x: f64, y: f64) -> f64 {
    f64::from(g[0]) * x + f64::from(g[1]) * y
}

#[inline]
pub(crate) fn dot3(g: &[i32; 3], x: f64, y: f64, z: f64) -> f64 {
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
}

#[inline]
pub(crate) fn dot4(g: &[i32; 4], x: f64, y: f64, z: f64, w: f64) -> f64 {
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z + f64::from(g[3]) * w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_is_bijection() {
        let mut seen = [false; 256];
        for &value in &PERMUTATION {
            assert!(!seen[usize::from(value)], "{value} appears twice");
            seen[usize::from(value)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_mirrored_tables() {
        for i in 0..TABLE_LEN {
            assert_eq!(perm(i), perm(i & 0xFF), "perm mirror broken at {i}");
            assert_eq!(perm(i), usize::from(PERMUTATION[i & 0xFF]));
            assert_eq!(perm_mod12(i), perm(i) % 12);
            assert!(perm_mod12(i) < GRADIENT_3D.len());
        }
    }

    #[test]
    fn test_gradient_shapes() {
        for g in &GRADIENT_3D {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{g:?}");
            assert!(g.iter().all(|&c| c == 0 || c.abs() == 1));
        }
        for g in &GRADIENT_4D {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{g:?}");
            assert!(g.iter().all(|&c| c == 0 || c.abs() == 1));
        }

        let mut unique = GRADIENT_4D.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), GRADIENT_4D.len());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_dot_products() {
        assert_eq!(dot2(&GRADIENT_3D[1], 0.25, 0.5), 0.25);
        assert_eq!(dot3(&GRADIENT_3D[7], 2.0, 9.0, 3.0), -5.0);
        assert_eq!(dot4(&GRADIENT_4D[31], 1.0, 2.0, 3.0, 100.0), -6.0);
    }
}

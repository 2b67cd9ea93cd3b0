//! Numeric helpers shared by the noise kernels.

/// Floors `value` to the containing `i32` lattice cell.
///
/// Truncates and corrects negative non-integers, which is cheaper than
/// `value.floor() as i32`. Values outside the `i32` range saturate and `NaN`
/// maps to `0`; the kernels stay panic-free either way.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

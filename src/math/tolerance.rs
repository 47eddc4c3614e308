//! Tolerance-based float comparison.

/// Absolute tolerance used when comparing discounted amounts.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
///
/// `NaN` never compares equal. Equal infinities compare equal.
///
/// # Examples
///
/// ```
/// use discount_calc::math::{DEFAULT_TOLERANCE, approx_eq};
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, DEFAULT_TOLERANCE));
/// assert!(!approx_eq(1.0, 1.1, DEFAULT_TOLERANCE));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance
}

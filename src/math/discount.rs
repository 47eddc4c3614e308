//! Core discount formula.

/// Computes `amount − amount × fraction`.
///
/// `fraction` is expected to be normalized to `[0, 1]`; no range check is
/// performed here. `NaN` and infinities in `amount` propagate per IEEE 754.
///
/// # Examples
///
/// ```
/// use discount_calc::math::discounted_amount;
///
/// assert!((discounted_amount(100.0, 0.1) - 90.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn discounted_amount(amount: f64, fraction: f64) -> f64 {
    amount - amount * fraction
}

/// Computes `amount − amount × percent / 100`.
///
/// Multiplies before dividing by 100. No range check is performed here.
///
/// # Examples
///
/// ```
/// use discount_calc::math::discounted_amount_percent;
///
/// assert!((discounted_amount_percent(100.0, 10.0) - 90.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn discounted_amount_percent(amount: f64, percent: f64) -> f64 {
    amount - amount * percent / 100.0
}

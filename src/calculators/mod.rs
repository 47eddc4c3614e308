//! Concrete discount calculators.
//!
//! | Type | Factor range | Formula |
//! |------|--------------|---------|
//! | [`PercentageCalculator`] | `[0, 100]` | `amount − amount × f / 100` |
//! | [`RateCalculator`] | `[0, 1]` | `amount − amount × f` |
//!
//! [`CalculatorBox`] wraps both for runtime selection. The free functions
//! [`apply_percentage_discount`] and [`apply_rate_discount`] are shorthands
//! for calling the unit structs directly.

mod calculator_box;
mod percentage;
mod rate;

#[cfg(test)]
mod proptest_properties;

pub use calculator_box::CalculatorBox;
pub use percentage::PercentageCalculator;
pub use rate::RateCalculator;

use crate::error::Result;
use crate::traits::DiscountCalculator;

/// Applies a percentage discount in `[0, 100]` to `amount`.
///
/// # Errors
///
/// Returns [`DiscountError::InvalidArgument`](crate::error::DiscountError::InvalidArgument)
/// if `percent` is out of range.
///
/// # Examples
///
/// ```
/// use discount_calc::calculators::apply_percentage_discount;
///
/// let v = apply_percentage_discount(50.0, 100.0).expect("valid");
/// assert!(v.abs() < 1e-4);
/// ```
pub fn apply_percentage_discount(amount: f64, percent: f64) -> Result<f64> {
    PercentageCalculator.apply_discount(amount, percent)
}

/// Applies a rate discount in `[0, 1]` to `amount`.
///
/// # Errors
///
/// Returns [`DiscountError::InvalidArgument`](crate::error::DiscountError::InvalidArgument)
/// if `rate` is out of range.
pub fn apply_rate_discount(amount: f64, rate: f64) -> Result<f64> {
    RateCalculator.apply_discount(amount, rate)
}

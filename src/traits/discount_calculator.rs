//! Core calculator trait.
//!
//! [`DiscountCalculator`] is implemented once per [`Convention`]. Every
//! implementation validates the factor before touching the amount:
//!
//! ```text
//! factor ∉ [min, max]  →  Err(InvalidArgument)
//! fraction   = normalize(factor)
//! discounted = amount − amount × fraction
//! ```
//!
//! Calculators are stateless unit structs; see the `calculators` module for
//! the `CalculatorBox` enum that dispatches between them.

use crate::domain::{Convention, DiscountFactor};
use crate::error::{DiscountError, Result};

/// A stateless discount calculator bound to a single [`Convention`].
///
/// # Implementors
///
/// - `PercentageCalculator`: factor in `[0, 100]`
/// - `RateCalculator`: factor in `[0, 1]`
/// - `CalculatorBox`: delegates to either of the above
///
/// # Errors
///
/// - [`DiscountError::InvalidArgument`] if the factor is out of range.
/// - [`DiscountError::ConventionMismatch`] if a [`DiscountFactor`] of the
///   other convention is supplied to [`apply_factor`](Self::apply_factor).
pub trait DiscountCalculator {
    /// Returns the convention this calculator interprets factors in.
    #[must_use]
    fn convention(&self) -> Convention;

    /// Validates `factor` and returns the discounted `amount`.
    ///
    /// Boundary factors are valid. No rounding is applied to the result.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`] if `factor` is outside the
    /// convention's closed interval or is `NaN`. No computation is performed
    /// in that case.
    fn apply_discount(&self, amount: f64, factor: f64) -> Result<f64>;

    /// Applies a factor that has already been validated.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::ConventionMismatch`] if `factor` was
    /// validated under a different convention.
    fn apply_factor(&self, amount: f64, factor: DiscountFactor) -> Result<f64> {
        let expected = self.convention();
        let found = factor.convention();
        if expected != found {
            return Err(DiscountError::ConventionMismatch { expected, found });
        }
        self.apply_discount(amount, factor.raw())
    }
}

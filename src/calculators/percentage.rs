//! Percentage-convention calculator.
//!
//! A factor of `f` in `[0, 100]` removes `f / 100` of the amount:
//!
//! ```text
//! discounted = amount − amount × f / 100
//! ```

use crate::domain::{Convention, Percent};
use crate::error::Result;
use crate::math::discounted_amount_percent;
use crate::traits::DiscountCalculator;

/// Applies discounts expressed as a percentage in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use discount_calc::calculators::PercentageCalculator;
/// use discount_calc::traits::DiscountCalculator;
///
/// let calc = PercentageCalculator;
/// let price = calc.apply_discount(100.0, 10.0).expect("valid percent");
/// assert!((price - 90.0).abs() < 1e-4);
/// assert!(calc.apply_discount(100.0, 150.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PercentageCalculator;

impl PercentageCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an already-validated [`Percent`]. Infallible.
    #[must_use]
    pub fn apply_percent(&self, amount: f64, percent: Percent) -> f64 {
        discounted_amount_percent(amount, percent.get())
    }
}

impl DiscountCalculator for PercentageCalculator {
    fn convention(&self) -> Convention {
        Convention::Percentage
    }

    fn apply_discount(&self, amount: f64, factor: f64) -> Result<f64> {
        let percent = Percent::new(factor).inspect_err(|err| {
            tracing::warn!(convention = %Convention::Percentage, factor, %err, "discount rejected");
        })?;
        let discounted = self.apply_percent(amount, percent);
        tracing::debug!(
            convention = %Convention::Percentage,
            amount,
            factor,
            discounted,
            "discount applied"
        );
        Ok(discounted)
    }
}

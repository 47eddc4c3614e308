//! Rate-convention calculator.

use crate::domain::{Convention, Rate};
use crate::error::Result;
use crate::math::discounted_amount;
use crate::traits::DiscountCalculator;

/// Applies discounts expressed as a fraction in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use discount_calc::calculators::RateCalculator;
/// use discount_calc::traits::DiscountCalculator;
///
/// let calc = RateCalculator;
/// let price = calc.apply_discount(100.0, 0.10).expect("valid rate");
/// assert!((price - 90.0).abs() < 1e-4);
/// assert!(calc.apply_discount(100.0, 1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RateCalculator;

impl RateCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an already-validated [`Rate`]. Infallible.
    #[must_use]
    pub fn apply_rate(&self, amount: f64, rate: Rate) -> f64 {
        discounted_amount(amount, rate.get())
    }
}

impl DiscountCalculator for RateCalculator {
    fn convention(&self) -> Convention {
        Convention::Rate
    }

    fn apply_discount(&self, amount: f64, factor: f64) -> Result<f64> {
        let rate = Rate::new(factor).inspect_err(|err| {
            tracing::warn!(convention = %Convention::Rate, factor, %err, "discount rejected");
        })?;
        let discounted = self.apply_rate(amount, rate);
        tracing::debug!(
            convention = %Convention::Rate,
            amount,
            factor,
            discounted,
            "discount applied"
        );
        Ok(discounted)
    }
}

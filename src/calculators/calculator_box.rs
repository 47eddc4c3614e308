//! Enum dispatch wrapper for both calculator conventions.
//!
//! [`CalculatorBox`] lets callers pick a convention at runtime (for example
//! from a [`DiscountConfig`](crate::config::DiscountConfig)) while keeping
//! static dispatch.

use super::percentage::PercentageCalculator;
use super::rate::RateCalculator;

use crate::domain::{Convention, DiscountFactor};
use crate::error::Result;
use crate::traits::DiscountCalculator;

/// Zero-cost dispatch enum wrapping the concrete calculators.
///
/// Implements [`DiscountCalculator`] by delegating every method to the
/// inner calculator via `match`.
///
/// # Example
///
/// ```
/// use discount_calc::calculators::CalculatorBox;
/// use discount_calc::domain::Convention;
/// use discount_calc::traits::DiscountCalculator;
///
/// let calc = CalculatorBox::new(Convention::Rate);
/// assert_eq!(calc.convention(), Convention::Rate);
/// assert!(calc.apply_discount(100.0, 0.5).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorBox {
    /// Factor in `[0, 100]`.
    Percentage(PercentageCalculator),

    /// Factor in `[0, 1]`.
    Rate(RateCalculator),
}

/// Delegates a method call to every `CalculatorBox` variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            CalculatorBox::Percentage(c) => c.$method($($arg),*),
            CalculatorBox::Rate(c) => c.$method($($arg),*),
        }
    };
}

impl CalculatorBox {
    /// Builds the calculator for `convention`.
    #[must_use]
    pub const fn new(convention: Convention) -> Self {
        match convention {
            Convention::Percentage => Self::Percentage(PercentageCalculator::new()),
            Convention::Rate => Self::Rate(RateCalculator::new()),
        }
    }
}

impl From<Convention> for CalculatorBox {
    fn from(convention: Convention) -> Self {
        Self::new(convention)
    }
}

impl From<PercentageCalculator> for CalculatorBox {
    fn from(calc: PercentageCalculator) -> Self {
        Self::Percentage(calc)
    }
}

impl From<RateCalculator> for CalculatorBox {
    fn from(calc: RateCalculator) -> Self {
        Self::Rate(calc)
    }
}

impl DiscountCalculator for CalculatorBox {
    fn convention(&self) -> Convention {
        delegate!(self, convention())
    }

    fn apply_discount(&self, amount: f64, factor: f64) -> Result<f64> {
        delegate!(self, apply_discount(amount, factor))
    }

    fn apply_factor(&self, amount: f64, factor: DiscountFactor) -> Result<f64> {
        delegate!(self, apply_factor(amount, factor))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::{DEFAULT_TOLERANCE, approx_eq};

    #[test]
    fn new_selects_variant() {
        assert!(matches!(
            CalculatorBox::new(Convention::Percentage),
            CalculatorBox::Percentage(_)
        ));
        assert!(matches!(
            CalculatorBox::new(Convention::Rate),
            CalculatorBox::Rate(_)
        ));
    }

    #[test]
    fn convention_delegates() {
        assert_eq!(
            CalculatorBox::from(Convention::Percentage).convention(),
            Convention::Percentage
        );
        assert_eq!(
            CalculatorBox::from(RateCalculator).convention(),
            Convention::Rate
        );
    }

    #[test]
    fn same_factor_differs_by_convention() {
        let pct = CalculatorBox::new(Convention::Percentage);
        let rate = CalculatorBox::new(Convention::Rate);
        let Ok(a) = pct.apply_discount(100.0, 1.0) else {
            panic!("expected Ok");
        };
        let Ok(b) = rate.apply_discount(100.0, 1.0) else {
            panic!("expected Ok");
        };
        assert!(approx_eq(a, 99.0, DEFAULT_TOLERANCE));
        assert!(approx_eq(b, 0.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn apply_discount_propagates_error() {
        let calc = CalculatorBox::from(PercentageCalculator);
        assert!(calc.apply_discount(100.0, 150.0).is_err());
    }

    #[test]
    fn apply_factor_delegates() {
        let calc = CalculatorBox::new(Convention::Rate);
        let Ok(f) = DiscountFactor::parse(Convention::Rate, 0.25) else {
            panic!("expected Ok");
        };
        let Ok(v) = calc.apply_factor(200.0, f) else {
            panic!("expected Ok");
        };
        assert!(approx_eq(v, 150.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn heterogeneous_collection() {
        let calcs = [
            CalculatorBox::new(Convention::Percentage),
            CalculatorBox::new(Convention::Rate),
        ];
        let results: Vec<_> = calcs
            .iter()
            .map(|c| c.apply_discount(100.0, 0.0))
            .collect();
        assert!(results.iter().all(|r| matches!(r, Ok(v) if approx_eq(*v, 100.0, DEFAULT_TOLERANCE))));
    }
}

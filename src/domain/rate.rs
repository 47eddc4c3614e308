//! Validated discount rate.

use core::fmt;

use super::{Convention, Percent};
use crate::error::{DiscountError, Result};

/// A discount expressed as a fraction in the closed interval `[0, 1]`.
///
/// # Examples
///
/// ```
/// use discount_calc::domain::Rate;
///
/// let r = Rate::new(0.1).expect("in range");
/// assert!((r.as_percent().get() - 10.0).abs() < 1e-12);
/// assert!(Rate::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rate(f64);

impl Rate {
    /// No discount.
    pub const ZERO: Self = Self(0.0);

    /// Full discount.
    pub const FULL: Self = Self(1.0);

    /// Creates a new `Rate`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`] if `value` is outside
    /// `[0, 1]` or is `NaN`.
    pub fn new(value: f64) -> Result<Self> {
        if !Convention::Rate.contains(value) {
            return Err(DiscountError::InvalidArgument(
                Convention::Rate.out_of_range_message(),
            ));
        }
        Ok(Self(value))
    }

    /// Builds a rate from a fraction already known to be in `[0, 1]`.
    pub(crate) const fn from_fraction(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying value in `[0, 1]`.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Converts to the equivalent [`Percent`].
    ///
    /// `x * 100` stays inside `[0, 100]` for every `x` in `[0, 1]`.
    #[must_use]
    pub fn as_percent(&self) -> Percent {
        Percent::from_value(self.0 * 100.0)
    }
}

impl TryFrom<f64> for Rate {
    type Error = DiscountError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Validated discount percentage.

use core::fmt;

use super::{Convention, Rate};
use crate::error::{DiscountError, Result};

/// A discount expressed as a percentage in the closed interval `[0, 100]`.
///
/// Construction is the only place the range is checked; every `Percent`
/// that exists is valid.
///
/// # Examples
///
/// ```
/// use discount_calc::domain::Percent;
///
/// let p = Percent::new(10.0).expect("in range");
/// assert!((p.as_rate().get() - 0.1).abs() < 1e-12);
/// assert!(Percent::new(150.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    /// No discount.
    pub const ZERO: Self = Self(0.0);

    /// Full discount.
    pub const FULL: Self = Self(100.0);

    /// Creates a new `Percent`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`] if `value` is outside
    /// `[0, 100]` or is `NaN`.
    pub fn new(value: f64) -> Result<Self> {
        if !Convention::Percentage.contains(value) {
            return Err(DiscountError::InvalidArgument(
                Convention::Percentage.out_of_range_message(),
            ));
        }
        Ok(Self(value))
    }

    /// Builds a percent from a value already known to be in `[0, 100]`.
    pub(crate) const fn from_value(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying value in `[0, 100]`.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Converts to the equivalent [`Rate`].
    #[must_use]
    pub fn as_rate(&self) -> Rate {
        Rate::from_fraction(self.0 / 100.0)
    }
}

impl TryFrom<f64> for Percent {
    type Error = DiscountError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

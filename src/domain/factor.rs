//! A validated discount factor tagged with its convention.

use core::fmt;

use super::{Convention, Percent, Rate};
use crate::error::Result;

/// A discount factor that has already passed range validation.
///
/// Keeps the convention alongside the value so a percentage can never be
/// silently read as a rate.
///
/// # Examples
///
/// ```
/// use discount_calc::domain::{Convention, DiscountFactor};
///
/// let f = DiscountFactor::parse(Convention::Percentage, 10.0).expect("valid");
/// assert_eq!(f.convention(), Convention::Percentage);
/// assert!((f.fraction() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountFactor {
    /// Percentage convention.
    Percent(Percent),
    /// Rate convention.
    Rate(Rate),
}

impl DiscountFactor {
    /// Validates `value` under `convention`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`](crate::error::DiscountError::InvalidArgument)
    /// if `value` is outside the convention's interval.
    pub fn parse(convention: Convention, value: f64) -> Result<Self> {
        match convention {
            Convention::Percentage => Percent::new(value).map(Self::Percent),
            Convention::Rate => Rate::new(value).map(Self::Rate),
        }
    }

    /// Returns the convention the factor was validated under.
    #[must_use]
    pub const fn convention(&self) -> Convention {
        match self {
            Self::Percent(_) => Convention::Percentage,
            Self::Rate(_) => Convention::Rate,
        }
    }

    /// Returns the raw value as supplied.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        match self {
            Self::Percent(p) => p.get(),
            Self::Rate(r) => r.get(),
        }
    }

    /// Returns the factor normalized to a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.convention().normalize(self.raw())
    }
}

impl From<Percent> for DiscountFactor {
    fn from(value: Percent) -> Self {
        Self::Percent(value)
    }
}

impl From<Rate> for DiscountFactor {
    fn from(value: Rate) -> Self {
        Self::Rate(value)
    }
}

impl fmt::Display for DiscountFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}"),
            Self::Rate(r) => write!(f, "rate {r}"),
        }
    }
}

//! The two ways a discount factor can be expressed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Specifies how a raw discount factor is interpreted.
///
/// The conventions are never interchangeable: a factor of `1.0` is a 1 %
/// discount under [`Convention::Percentage`] but a full discount under
/// [`Convention::Rate`].
///
/// # Examples
///
/// ```
/// use discount_calc::domain::Convention;
///
/// assert_eq!(Convention::Percentage.bounds(), (0.0, 100.0));
/// assert!(Convention::Rate.contains(0.25));
/// assert!(!Convention::Rate.contains(25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Factor in `[0, 100]`, divided by 100 before use.
    Percentage,
    /// Factor in `[0, 1]`, used directly.
    Rate,
}

impl Convention {
    /// Returns the inclusive `(min, max)` interval of valid factors.
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Percentage => (0.0, 100.0),
            Self::Rate => (0.0, 1.0),
        }
    }

    /// Returns `true` if `factor` lies in the closed interval.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, factor: f64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&factor)
    }

    /// Converts a factor of this convention into a fraction in `[0, 1]`.
    ///
    /// No range check is performed.
    #[must_use]
    pub fn normalize(&self, factor: f64) -> f64 {
        match self {
            Self::Percentage => factor / 100.0,
            Self::Rate => factor,
        }
    }

    /// Message carried by [`DiscountError::InvalidArgument`](crate::error::DiscountError::InvalidArgument)
    /// when a factor falls outside [`bounds`](Self::bounds).
    #[must_use]
    pub const fn out_of_range_message(&self) -> &'static str {
        match self {
            Self::Percentage => "Discount percent must be between 0 and 100.",
            Self::Rate => "Rate must be between 0 and 1",
        }
    }

    /// Returns a human-readable description of the convention.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage in [0, 100]",
            Self::Rate => "rate in [0, 1]",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => f.write_str("percentage"),
            Self::Rate => f.write_str("rate"),
        }
    }
}

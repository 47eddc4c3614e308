//! Unified error types for the discount calculators.
//!
//! All fallible operations across the crate return [`DiscountError`] as their
//! error type, so callers match on a single enum regardless of which
//! convention produced the failure.

use thiserror::Error;

use crate::domain::Convention;

/// Errors produced while validating or applying a discount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscountError {
    /// The discount factor lies outside its convention's closed interval.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A pre-validated factor was handed to a calculator of the other
    /// convention.
    #[error("convention mismatch: expected {expected}, found {found}")]
    ConventionMismatch {
        /// Convention of the calculator.
        expected: Convention,
        /// Convention carried by the factor.
        found: Convention,
    },

    /// A discount configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DiscountError {
    /// Returns `true` for [`DiscountError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<toml::de::Error> for DiscountError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, DiscountError>;

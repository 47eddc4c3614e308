//! Declarative blueprint for a fixed discount.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::calculators::CalculatorBox;
use crate::domain::{Convention, DiscountFactor};
use crate::error::{DiscountError, Result};
use crate::traits::DiscountCalculator;

/// Configuration for a fixed discount such as "10 % off" or "rate 0.25".
///
/// # TOML shape
///
/// ```toml
/// convention = "percentage"   # or "rate"
/// factor = 10.0
/// ```
///
/// # Validation
///
/// - `factor` must lie in the closed interval of `convention`.
///
/// Deserialization goes through the same check as [`new`](Self::new), so
/// an out-of-range config cannot be built from any serde format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDiscountConfig")]
pub struct DiscountConfig {
    convention: Convention,
    factor: f64,
}

/// Unvalidated wire shape of [`DiscountConfig`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawDiscountConfig {
    convention: Convention,
    factor: f64,
}

impl TryFrom<RawDiscountConfig> for DiscountConfig {
    type Error = DiscountError;

    fn try_from(raw: RawDiscountConfig) -> Result<Self> {
        Self::new(raw.convention, raw.factor)
    }
}

impl DiscountConfig {
    /// Creates a new `DiscountConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`] if `factor` is outside the
    /// convention's interval.
    pub fn new(convention: Convention, factor: f64) -> Result<Self> {
        let config = Self { convention, factor };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::InvalidConfiguration`] if the document is not
    ///   valid TOML or lacks a field.
    /// - [`DiscountError::InvalidArgument`] if `factor` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use discount_calc::config::DiscountConfig;
    ///
    /// let cfg = DiscountConfig::from_toml_str("convention = \"rate\"\nfactor = 0.25\n")
    ///     .expect("valid config");
    /// assert!((cfg.apply(100.0).expect("valid") - 75.0).abs() < 1e-4);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawDiscountConfig = toml::from_str(source)?;
        let config = Self::try_from(raw)?;
        tracing::debug!(%config, "discount config loaded");
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidArgument`] if `factor` is outside the
    /// convention's interval.
    pub fn validate(&self) -> Result<()> {
        if !self.convention.contains(self.factor) {
            return Err(DiscountError::InvalidArgument(
                self.convention.out_of_range_message(),
            ));
        }
        Ok(())
    }

    /// Returns the convention.
    #[must_use]
    pub const fn convention(&self) -> Convention {
        self.convention
    }

    /// Returns the raw factor.
    #[must_use]
    pub const fn raw_factor(&self) -> f64 {
        self.factor
    }

    /// Returns the factor tagged with its convention.
    ///
    /// # Errors
    ///
    /// Only fails for a config that bypassed [`validate`](Self::validate),
    /// which neither the constructors nor deserialization allow.
    pub fn factor(&self) -> Result<DiscountFactor> {
        DiscountFactor::parse(self.convention, self.factor)
    }

    /// Returns the calculator matching the convention.
    #[must_use]
    pub const fn calculator(&self) -> CalculatorBox {
        CalculatorBox::new(self.convention)
    }

    /// Applies the configured discount to `amount`.
    ///
    /// # Errors
    ///
    /// Propagates [`DiscountError::InvalidArgument`] from the calculator.
    pub fn apply(&self, amount: f64) -> Result<f64> {
        self.calculator().apply_discount(amount, self.factor)
    }
}

impl fmt::Display for DiscountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} discount of {}", self.convention, self.factor)
    }
}

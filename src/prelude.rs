//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use discount_calc::prelude::*;
//!
//! let v = apply_rate_discount(100.0, 0.1).expect("valid rate");
//! assert!(approx_eq(v, 90.0, DEFAULT_TOLERANCE));
//! ```

pub use crate::calculators::{
    CalculatorBox, PercentageCalculator, RateCalculator, apply_percentage_discount,
    apply_rate_discount,
};
pub use crate::config::DiscountConfig;
pub use crate::domain::{Convention, DiscountFactor, Percent, Rate};
pub use crate::error::{DiscountError, Result};
pub use crate::math::{DEFAULT_TOLERANCE, approx_eq};
pub use crate::traits::DiscountCalculator;

//! # discount-calc
//!
//! Validated discount calculators for monetary amounts.
//!
//! A discount factor is expressed in one of two conventions that are never
//! merged:
//!
//! - **Percentage**: factor in `[0, 100]`, divided by 100 before use.
//! - **Rate**: factor in `[0, 1]`, used directly.
//!
//! A factor outside its closed interval (or `NaN`) is rejected with
//! [`DiscountError::InvalidArgument`](error::DiscountError::InvalidArgument)
//! before any arithmetic is performed. Results are plain `f64` with no
//! rounding; compare them with [`math::approx_eq`].
//!
//! # Quick Start
//!
//! ```rust
//! use discount_calc::calculators::{PercentageCalculator, RateCalculator};
//! use discount_calc::math::{DEFAULT_TOLERANCE, approx_eq};
//! use discount_calc::traits::DiscountCalculator;
//!
//! let price = PercentageCalculator.apply_discount(100.0, 10.0).expect("valid percent");
//! assert!(approx_eq(price, 90.0, DEFAULT_TOLERANCE));
//!
//! let price = RateCalculator.apply_discount(100.0, 0.10).expect("valid rate");
//! assert!(approx_eq(price, 90.0, DEFAULT_TOLERANCE));
//!
//! assert!(PercentageCalculator.apply_discount(100.0, 150.0).is_err());
//! ```
//!
//! ## From configuration
//!
//! ```rust
//! use discount_calc::config::DiscountConfig;
//!
//! let cfg = DiscountConfig::from_toml_str(
//!     r#"
//!     convention = "percentage"
//!     factor = 25.0
//!     "#,
//! )
//! .expect("valid config");
//! assert!((cfg.apply(200.0).expect("valid") - 150.0).abs() < 1e-4);
//! ```
//!
//! # Logging
//!
//! Calculators emit [`tracing`] events: `debug` for every applied discount
//! and `warn` for every rejected factor. No subscriber is installed by the
//! library.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Percent`](domain::Percent), [`Rate`](domain::Rate), [`Convention`](domain::Convention), [`DiscountFactor`](domain::DiscountFactor) |
//! | [`traits`] | [`DiscountCalculator`](traits::DiscountCalculator) |
//! | [`calculators`] | [`PercentageCalculator`](calculators::PercentageCalculator), [`RateCalculator`](calculators::RateCalculator), [`CalculatorBox`](calculators::CalculatorBox) |
//! | [`config`] | [`DiscountConfig`](config::DiscountConfig) |
//! | [`math`] | Discount formula and tolerance comparison |
//! | [`error`] | [`DiscountError`](error::DiscountError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod calculators;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;

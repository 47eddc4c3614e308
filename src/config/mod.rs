//! Discount configuration.
//!
//! [`DiscountConfig`] is a declarative, validated description of a fixed
//! discount. It can be built in code or parsed from TOML.

mod discount_config;

pub use discount_config::DiscountConfig;

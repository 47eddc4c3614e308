//! Core trait abstractions.
//!
//! [`DiscountCalculator`] is the single operation every calculator exposes.

mod discount_calculator;

pub use discount_calculator::DiscountCalculator;

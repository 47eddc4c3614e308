//! Floating-point helpers shared by the calculators.
//!
//! All arithmetic is plain IEEE 754 `f64`: no rounding or clamping is
//! applied to results, so comparisons should go through [`approx_eq`].

mod discount;
mod tolerance;

pub use discount::{discounted_amount, discounted_amount_percent};
pub use tolerance::{DEFAULT_TOLERANCE, approx_eq};

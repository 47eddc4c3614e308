//! Value types describing a discount.
//!
//! Discount factors are wrapped in newtypes with validated constructors so
//! that an out-of-range factor can only exist as an error.

mod convention;
mod factor;
mod percent;
mod rate;

pub use convention::Convention;
pub use factor::DiscountFactor;
pub use percent::Percent;
pub use rate::Rate;

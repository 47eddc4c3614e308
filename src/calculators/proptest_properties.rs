//! Property-based tests using `proptest` for discount invariants.
//!
//! 1. **Zero discount**: the lower bound factor leaves the amount unchanged.
//! 2. **Full discount**: the upper bound factor yields zero.
//! 3. **Formula**: result equals `amount − amount × fraction`.
//! 4. **Rejection**: any factor outside the interval is `InvalidArgument`.
//! 5. **Convention equivalence**: `p` percent equals rate `p / 100`.
//! 6. **Monotonicity**: a larger factor never yields a larger result.

use proptest::prelude::*;

use super::{PercentageCalculator, RateCalculator};
use crate::math::{DEFAULT_TOLERANCE, approx_eq};
use crate::traits::DiscountCalculator;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn amount_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

fn percent_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn bad_percent_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-1_000_000.0f64..-1e-9, 100.000_001f64..1_000_000.0]
}

fn bad_rate_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-1_000.0f64..-1e-12, 1.000_000_1f64..1_000.0]
}

// ---------------------------------------------------------------------------
// 1 & 2. Boundary factors
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_zero_discount_keeps_amount(amount in amount_strategy()) {
        let Ok(pct) = PercentageCalculator.apply_discount(amount, 0.0) else {
            return Err(TestCaseError::fail("0% must be valid"));
        };
        let Ok(rate) = RateCalculator.apply_discount(amount, 0.0) else {
            return Err(TestCaseError::fail("rate 0 must be valid"));
        };
        prop_assert!(approx_eq(pct, amount, DEFAULT_TOLERANCE), "pct={} amount={}", pct, amount);
        prop_assert!(approx_eq(rate, amount, DEFAULT_TOLERANCE), "rate={} amount={}", rate, amount);
    }

    #[test]
    fn prop_full_discount_is_zero(amount in amount_strategy()) {
        let Ok(pct) = PercentageCalculator.apply_discount(amount, 100.0) else {
            return Err(TestCaseError::fail("100% must be valid"));
        };
        let Ok(rate) = RateCalculator.apply_discount(amount, 1.0) else {
            return Err(TestCaseError::fail("rate 1 must be valid"));
        };
        prop_assert!(approx_eq(pct, 0.0, DEFAULT_TOLERANCE), "pct={}", pct);
        prop_assert!(approx_eq(rate, 0.0, DEFAULT_TOLERANCE), "rate={}", rate);
    }
}

// ---------------------------------------------------------------------------
// 3. Formula
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_percentage_formula(amount in amount_strategy(), percent in percent_strategy()) {
        let Ok(v) = PercentageCalculator.apply_discount(amount, percent) else {
            return Err(TestCaseError::fail("in-range percent rejected"));
        };
        let expected = amount - amount * (percent / 100.0);
        prop_assert!(approx_eq(v, expected, DEFAULT_TOLERANCE), "got={} expected={}", v, expected);
    }

    #[test]
    fn prop_rate_formula(amount in amount_strategy(), rate in rate_strategy()) {
        let Ok(v) = RateCalculator.apply_discount(amount, rate) else {
            return Err(TestCaseError::fail("in-range rate rejected"));
        };
        let expected = amount - amount * rate;
        prop_assert!(approx_eq(v, expected, DEFAULT_TOLERANCE), "got={} expected={}", v, expected);
    }
}

// ---------------------------------------------------------------------------
// 4. Rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_out_of_range_percent_rejected(amount in amount_strategy(), percent in bad_percent_strategy()) {
        let result = PercentageCalculator.apply_discount(amount, percent);
        prop_assert!(
            matches!(&result, Err(e) if e.is_invalid_argument()),
            "percent {} should be rejected, got {:?}", percent, result
        );
    }

    #[test]
    fn prop_out_of_range_rate_rejected(amount in amount_strategy(), rate in bad_rate_strategy()) {
        let result = RateCalculator.apply_discount(amount, rate);
        prop_assert!(
            matches!(&result, Err(e) if e.is_invalid_argument()),
            "rate {} should be rejected, got {:?}", rate, result
        );
    }
}

// ---------------------------------------------------------------------------
// 5 & 6. Cross-convention and ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_percent_matches_rate(amount in amount_strategy(), percent in percent_strategy()) {
        let Ok(a) = PercentageCalculator.apply_discount(amount, percent) else {
            return Err(TestCaseError::fail("in-range percent rejected"));
        };
        let Ok(b) = RateCalculator.apply_discount(amount, percent / 100.0) else {
            return Err(TestCaseError::fail("derived rate rejected"));
        };
        prop_assert!(approx_eq(a, b, DEFAULT_TOLERANCE), "percent={} rate={}", a, b);
    }

    #[test]
    fn prop_monotonic_in_factor(
        amount in amount_strategy(),
        r1 in rate_strategy(),
        r2 in rate_strategy(),
    ) {
        let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
        let Ok(small) = RateCalculator.apply_discount(amount, lo) else {
            return Err(TestCaseError::fail("in-range rate rejected"));
        };
        let Ok(large) = RateCalculator.apply_discount(amount, hi) else {
            return Err(TestCaseError::fail("in-range rate rejected"));
        };
        prop_assert!(
            large <= small + DEFAULT_TOLERANCE,
            "larger rate gave larger result: {}@{} vs {}@{}",
            large, hi, small, lo
        );
    }
}

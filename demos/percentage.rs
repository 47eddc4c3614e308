//! Percentage-convention discounts.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=discount_calc=debug cargo run --example percentage
//! ```

use discount_calc::calculators::PercentageCalculator;
use discount_calc::domain::Percent;
use discount_calc::traits::DiscountCalculator;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("discount_calc=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    println!("=== Percentage discounts ===\n");

    let calc = PercentageCalculator::new();

    // ── 1. Typical discounts ────────────────────────────────────────────
    for (price, percent) in [(100.0, 10.0), (200.0, 0.0), (50.0, 100.0), (80.0, 12.5)] {
        let discounted = calc.apply_discount(price, percent)?;
        println!("  {price:>8.2} - {percent:>5.1}%  = {discounted:>8.2}");
    }

    // ── 2. Pre-validated percent ────────────────────────────────────────
    let quarter = Percent::new(25.0)?;
    println!("\n  {quarter} off 40.00 = {:.2}", calc.apply_percent(40.0, quarter));
    println!("  {quarter} as a rate = {}", quarter.as_rate());

    // ── 3. Out of range ─────────────────────────────────────────────────
    match calc.apply_discount(100.0, 150.0) {
        Ok(v) => println!("\n  unexpected result {v}"),
        Err(err) => println!("\n  150% rejected: {err}"),
    }

    println!("\n=== Done ===");
    Ok(())
}

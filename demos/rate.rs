//! Rate-convention discounts.
//!
//! # Run
//!
//! ```bash
//! cargo run --example rate
//! ```

use discount_calc::calculators::{RateCalculator, apply_percentage_discount};
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

    println!("=== Rate discounts ===\n");

    let calc = RateCalculator::new();

    for (amount, rate) in [(100.0, 0.10), (100.0, 0.0), (100.0, 1.0), (19.99, 0.15)] {
        let discounted = calc.apply_discount(amount, rate)?;
        println!("  {amount:>8.2} x (1 - {rate:.2}) = {discounted:>8.2}");
    }

    // The same factor means different things under each convention.
    println!("\n--- Factor 1.0 ---");
    println!("  as rate:       {:.2}", calc.apply_discount(100.0, 1.0)?);
    println!("  as percentage: {:.2}", apply_percentage_discount(100.0, 1.0)?);

    if let Err(err) = calc.apply_discount(100.0, 1.5) {
        println!("\n  rate 1.5 rejected: {err}");
    }

    println!("\n=== Done ===");
    Ok(())
}

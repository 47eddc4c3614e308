//! Loading a fixed discount from TOML.
//!
//! # Run
//!
//! ```bash
//! cargo run --example from_config
//! ```

use discount_calc::config::DiscountConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const SPRING_SALE: &str = r#"
convention = "percentage"
factor = 30.0
"#;

const LOYALTY: &str = r#"
convention = "rate"
factor = 0.05
"#;

const BROKEN: &str = r#"
convention = "rate"
factor = 5.0
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("discount_calc=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    println!("=== Discounts from configuration ===\n");

    for (name, source) in [("spring sale", SPRING_SALE), ("loyalty", LOYALTY)] {
        let config = DiscountConfig::from_toml_str(source)?;
        println!("  {name}: {config}");
        println!("    120.00 -> {:.2}", config.apply(120.0)?);
    }

    match DiscountConfig::from_toml_str(BROKEN) {
        Ok(config) => println!("\n  unexpected config {config}"),
        Err(err) => println!("\n  broken config rejected: {err}"),
    }

    println!("\n=== Done ===");
    Ok(())
}

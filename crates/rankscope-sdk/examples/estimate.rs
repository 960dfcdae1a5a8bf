//! Command-line estimation example
//!
//! Usage:
//!
//! ```text
//! cargo run -p rankscope-sdk --example estimate -- marks 185
//! cargo run -p rankscope-sdk --example estimate -- percentile 99.9 APP-1042
//! ```
//!
//! Configuration comes from `config/rankscope.*` and `RANKSCOPE_*`
//! variables; set `RUST_LOG=debug` to see the engine's events.

use rankscope_sdk::{EngineConfig, EstimationEngineBuilder, InputMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let mode: InputMode = args.next().unwrap_or_else(|| "marks".to_string()).parse()?;
    let raw = args.next().unwrap_or_else(|| "185".to_string());
    let application_ref = args.next();

    let config = EngineConfig::load()?;
    let engine = EstimationEngineBuilder::from_config(config).build().await?;

    let result = engine
        .calculate_raw(mode, &raw, application_ref.as_deref())
        .await?;

    println!("=== Estimate ===");
    println!("  {}: {}", result.input_mode, result.value);
    println!("  percentile: {:.2}", result.percentile);
    println!("  rank: {} of {}", result.rank, result.pool_size);

    println!("\nRecent calculations:");
    for (index, entry) in engine.history().list().await.iter().enumerate() {
        println!(
            "  [{}] {} {} -> {:.2} (rank {}) {}",
            index,
            entry.result.input_mode,
            entry.result.value,
            entry.result.percentile,
            entry.result.rank,
            entry.application_ref.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

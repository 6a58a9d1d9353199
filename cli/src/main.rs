//! Market Simulator CLI
//!
//! Loads a scenario file, validates it, runs the engine and prints the result
//! as JSON on stdout. Logs go to stderr.
//!
//! ```text
//! market-sim --config demos/baseline.json --pretty
//! market-sim --config demos/baseline.json --seed 7 --summary
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use market_simulator_core_rs::{compute_config_hash, run_simulation, ScenarioConfig};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "market-sim")]
#[command(about = "Deterministic buyer/seller bargaining market simulator")]
struct Args {
    /// Scenario file (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Override the scenario seed
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Print metrics only instead of the full result
    #[arg(long, default_value = "false")]
    summary: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value = "false")]
    pretty: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read scenario {}", args.config.display()))?;
    let mut config = ScenarioConfig::from_json(&raw).context("Failed to parse scenario")?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("Scenario rejected")?;

    let config_hash = compute_config_hash(&config)?;
    info!(
        scenario = config.name.as_deref().unwrap_or("unnamed"),
        config_hash = %config_hash,
        "running scenario"
    );

    let result = run_simulation(&config);

    let output = if args.summary {
        json!({ "configHash": config_hash, "metrics": result.metrics })
    } else {
        json!({ "configHash": config_hash, "result": result })
    };

    let text = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);

    Ok(())
}

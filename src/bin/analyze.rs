//! Analyze an OHLCV CSV file and print the augmented table as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use trendlens::config::{EngineConfig, Variant};
use trendlens::data::load_csv;
use trendlens::logging;
use trendlens::SignalEngine;

#[derive(Debug, Parser)]
#[command(name = "analyze", about = "Derive indicators, signals and trend from an OHLCV CSV")]
struct Args {
    /// CSV file with Open, High, Low, Close, Volume and a timestamp column
    path: PathBuf,

    /// Dashboard variant: daily or intraday
    #[arg(long, default_value = "daily")]
    variant: Variant,

    /// Timestamp column name (defaults to Date for daily, Datetime for intraday)
    #[arg(long)]
    timestamp_column: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_logging();

    let args = Args::parse();

    let mut config = EngineConfig::from_env(args.variant);
    if let Some(column) = args.timestamp_column {
        config = config.with_timestamp_column(column);
    }

    let raw = load_csv(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let report = SignalEngine::analyze(&raw, &config)
        .with_context(|| format!("failed to analyze {}", args.path.display()))?;

    info!(
        rows = report.table.len(),
        trend = %report.trend,
        support = report.levels.support,
        resistance = report.levels.resistance,
        "Report ready"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}

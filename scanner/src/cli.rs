use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Candle timeframe. A default/validation value only; it does not alter
/// the per-cycle computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    #[value(name = "5m")]
    M5,
    #[value(name = "15m")]
    M15,
    #[value(name = "60m")]
    M60,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::M60 => "60m",
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "bitget-scanner", version)]
pub struct Cli {
    /// Pairs to monitor (comma-separated), or "all" for every contract
    #[clap(long, value_delimiter = ',', required = true)]
    pub pairs: Vec<String>,

    /// Candle timeframe
    #[clap(long, value_enum, default_value = "5m")]
    pub timeframe: Timeframe,

    /// Seconds between poll cycles
    #[clap(long, default_value_t = 60)]
    pub poll_interval_secs: u64,

    /// Liquidity deviation percent that triggers a desktop alert
    #[clap(long, default_value_t = 50.0)]
    pub alert_threshold_pct: f64,

    /// Risk tolerance percent for stop-loss / take-profit brackets
    #[clap(long, default_value_t = 1.0)]
    pub risk_tolerance: f64,

    /// Bitget REST endpoint
    #[clap(long, default_value = "https://api.bitget.com")]
    pub rest_url: String,

    /// Directory receiving per-cycle snapshot CSVs
    #[clap(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory holding <pair>_historical.csv seed files
    #[clap(long, default_value = "snapshots")]
    pub snapshots_dir: PathBuf,
}

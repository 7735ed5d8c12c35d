use std::path::PathBuf;
use std::time::Duration;

use market::alert::AlertConfig;

use crate::cli::{Cli, Timeframe};

/// Order-book levels requested per side.
pub const DEPTH_LEVEL: u32 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bitget REST endpoint.
    pub rest_url: String,

    /// Levels per order-book side per fetch.
    pub depth_level: u32,

    /// Gap between poll cycles.
    pub poll_interval: Duration,

    /// Deviation threshold / window / cooldown for liquidity alerts.
    pub alert: AlertConfig,

    /// Percent distance of stop-loss / take-profit from the target price.
    pub risk_tolerance_pct: f64,

    /// Selected candle timeframe. Validation/default value only.
    pub timeframe: Timeframe,

    /// Per-cycle snapshot CSVs live under `<data_dir>/<pair>/<ts>.csv`.
    pub data_dir: PathBuf,

    /// Historical seed CSVs live at `<snapshots_dir>/<pair>_historical.csv`.
    pub snapshots_dir: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let alert = AlertConfig {
            deviation_threshold: cli.alert_threshold_pct / 100.0,
            ..Default::default()
        };

        Self {
            rest_url: cli.rest_url.clone(),
            depth_level: DEPTH_LEVEL,
            poll_interval: Duration::from_secs(cli.poll_interval_secs),
            alert,
            risk_tolerance_pct: cli.risk_tolerance,
            timeframe: cli.timeframe,
            data_dir: cli.data_dir.clone(),
            snapshots_dir: cli.snapshots_dir.clone(),
        }
    }
}

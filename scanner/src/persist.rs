//! CSV sinks and the historical seed reader.
//!
//! Snapshot files land at `<data_dir>/<pair>/<unix_ts>.csv`, one file per
//! pair per cycle, written to a temp path and renamed so an interrupt
//! never leaves a truncated row behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use market::state::HistoricalSample;
use market::types::{Pair, SnapshotRecord};

/// Column order of a snapshot file. The historical reader skips the
/// first column, so a snapshot row (pair, price, bid, ask, ...) reads
/// back as a valid seed record.
const SNAPSHOT_HEADERS: [&str; 14] = [
    "Pair",
    "Price",
    "Bid Liquidity (USD)",
    "Ask Liquidity (USD)",
    "5m Delta",
    "% Change (Bid)",
    "% Change (Ask)",
    "% Change (5m)",
    "Spread",
    "Action",
    "Target Price",
    "Stop-Loss",
    "Take-Profit",
    "Sentiment",
];

fn raw(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Write one cycle's snapshot for one pair. Returns the final path.
pub fn write_snapshot(data_dir: &Path, record: &SnapshotRecord) -> Result<PathBuf> {
    let pair_dir = data_dir.join(record.pair.as_str());
    fs::create_dir_all(&pair_dir)
        .with_context(|| format!("create snapshot dir {}", pair_dir.display()))?;

    let final_path = pair_dir.join(format!("{}.csv", record.ts));
    let tmp_path = pair_dir.join(format!("{}.csv.tmp", record.ts));

    let mut wtr = csv::Writer::from_path(&tmp_path)
        .with_context(|| format!("open {}", tmp_path.display()))?;

    wtr.write_record(SNAPSHOT_HEADERS)?;
    wtr.write_record([
        record.pair.as_str().to_string(),
        record.price.to_string(),
        record.bid_liquidity.to_string(),
        record.ask_liquidity.to_string(),
        raw(record.delta_5m),
        raw(record.pct_change_bid),
        raw(record.pct_change_ask),
        raw(record.pct_change_5m),
        record.spread.to_string(),
        record.action.to_string(),
        raw(record.target_price),
        raw(record.stop_loss),
        raw(record.take_profit),
        record.sentiment.to_string(),
    ])?;
    wtr.flush()?;
    drop(wtr);

    fs::rename(&tmp_path, &final_path)
        .with_context(|| format!("rename into {}", final_path.display()))?;
    Ok(final_path)
}

/// Location of a pair's historical seed file.
pub fn historical_path(snapshots_dir: &Path, pair: &Pair) -> PathBuf {
    snapshots_dir.join(format!("{}_historical.csv", pair.as_str()))
}

/// Read historical seed records for a pair.
///
/// A missing or malformed file is treated as absent seed data: the pair
/// starts unseeded and startup proceeds.
pub fn read_historical(snapshots_dir: &Path, pair: &Pair) -> Vec<HistoricalSample> {
    let path = historical_path(snapshots_dir, pair);
    if !path.is_file() {
        return Vec::new();
    }

    match read_historical_file(&path) {
        Ok(samples) => samples,
        Err(e) => {
            warn!(pair = %pair, error = %e, "malformed historical file; starting unseeded");
            Vec::new()
        }
    }
}

/// Parse a seed CSV: header skipped, first column ignored, then
/// price / bid liquidity / ask liquidity as floats.
pub fn read_historical_file(path: &Path) -> Result<Vec<HistoricalSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let mut samples = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let field = |i: usize| -> Result<f64> {
            let s = row
                .get(i)
                .with_context(|| format!("row has no column {i}"))?;
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("column {i} is not a number: {s:?}"))
        };

        samples.push(HistoricalSample {
            price: field(1)?,
            bid_liquidity: field(2)?,
            ask_liquidity: field(3)?,
        });
    }
    Ok(samples)
}

/// Write the `pairs.csv` instrument index produced by "all" mode.
pub fn write_pairs_index(path: &Path, symbols: &[String]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("open {}", path.display()))?;
    wtr.write_record(["Pair"])?;
    for symbol in symbols {
        wtr.write_record([symbol])?;
    }
    wtr.flush()?;
    Ok(())
}

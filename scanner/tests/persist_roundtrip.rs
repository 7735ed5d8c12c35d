//! A snapshot row written by the CSV sink must read back through the
//! historical seed reader with the same price and liquidity values.

use std::fs;
use std::path::PathBuf;

use market::signal::{Action, Sentiment};
use market::state::{RollingStateStore, SEED_WINDOW};
use market::types::{Pair, SnapshotRecord};
use scanner::persist::{historical_path, read_historical, read_historical_file, write_snapshot};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scanner-{tag}-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn record(pair: &Pair, ts: i64) -> SnapshotRecord {
    SnapshotRecord {
        pair: pair.clone(),
        ts,
        price: 50_005.0,
        best_bid: 50_000.0,
        best_ask: 50_010.0,
        bid_liquidity: 2_500_250_000.0,
        ask_liquidity: 2_500_750_100.5,
        delta_5m: None,
        pct_change_bid: Some(25.0),
        pct_change_ask: None,
        pct_change_5m: None,
        spread: 10.0,
        action: Action::Buy,
        target_price: Some(51_005.1),
        stop_loss: Some(50_495.049),
        take_profit: Some(51_515.151),
        sentiment: Sentiment::Positive,
    }
}

#[test]
fn snapshot_row_round_trips_through_seed_reader() {
    let data_dir = temp_dir("roundtrip");
    let pair = Pair::normalize("BTCUSDT");

    let path = write_snapshot(&data_dir, &record(&pair, 1_700_000_000)).unwrap();
    assert!(path.ends_with("BTCUSDT_UMCBL/1700000000.csv"));
    // No temp file left behind.
    assert!(!path.with_extension("csv.tmp").exists());

    let samples = read_historical_file(&path).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].price, 50_005.0);
    assert_eq!(samples[0].bid_liquidity, 2_500_250_000.0);
    assert_eq!(samples[0].ask_liquidity, 2_500_750_100.5);
}

#[test]
fn seed_files_prime_the_rolling_state() {
    let snapshots_dir = temp_dir("seeding");
    let pair = Pair::normalize("BTCUSDT");

    let path = historical_path(&snapshots_dir, &pair);
    let mut body = String::from("timestamp,price,bid_liquidity,ask_liquidity\n");
    for i in 0..SEED_WINDOW {
        body.push_str(&format!("17000000{i:02},50000,{},{}\n", 100 + i, 200 + i));
    }
    fs::write(&path, body).unwrap();

    let samples = read_historical(&snapshots_dir, &pair);
    assert_eq!(samples.len(), SEED_WINDOW);

    let mut state = RollingStateStore::new();
    state.seed(&pair, &samples);

    let seeded = state.get(&pair).unwrap();
    // Mean of 100..=109 and 200..=209.
    assert_eq!(seeded.prev_bid_liquidity, Some(104.5));
    assert_eq!(seeded.prev_ask_liquidity, Some(204.5));
}

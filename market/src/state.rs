//! Per-pair rolling state carried between poll cycles.
//!
//! Owned by the orchestrator and passed explicitly into each cycle; there
//! is no ambient global. Percentage-change calculations must read the
//! values written by the *previous* cycle, so [`RollingStateStore::update`]
//! runs last in a cycle, after all comparisons.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::Pair;

/// Seeding averages this many trailing historical records.
pub const SEED_WINDOW: usize = 10;

/// One historical snapshot row, as read back from a seed CSV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalSample {
    pub price: f64,
    pub bid_liquidity: f64,
    pub ask_liquidity: f64,
}

/// State the previous successful cycle left behind for one pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairState {
    pub prev_bid_liquidity: Option<f64>,
    pub prev_ask_liquidity: Option<f64>,
    pub prev_delta_5m: Option<f64>,
    pub last_alert: Option<DateTime<Utc>>,
}

/// In-memory map of [`PairState`] per pair. Lives for the process
/// lifetime; mutated only by the single orchestrator task.
#[derive(Debug, Default)]
pub struct RollingStateStore {
    inner: HashMap<Pair, PairState>,
}

impl RollingStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the previous bid/ask liquidity from historical records.
    ///
    /// Uses the arithmetic mean of the most recent [`SEED_WINDOW`]
    /// samples. With fewer samples the pair stays unseeded and the first
    /// cycle compares current liquidity against itself (zero change).
    pub fn seed(&mut self, pair: &Pair, samples: &[HistoricalSample]) {
        if samples.len() < SEED_WINDOW {
            return;
        }

        let tail = &samples[samples.len() - SEED_WINDOW..];
        let n = SEED_WINDOW as f64;
        let avg_bid = tail.iter().map(|s| s.bid_liquidity).sum::<f64>() / n;
        let avg_ask = tail.iter().map(|s| s.ask_liquidity).sum::<f64>() / n;

        let entry = self.inner.entry(pair.clone()).or_default();
        entry.prev_bid_liquidity = Some(avg_bid);
        entry.prev_ask_liquidity = Some(avg_ask);
    }

    pub fn get(&self, pair: &Pair) -> Option<&PairState> {
        self.inner.get(pair)
    }

    /// Record this cycle's values as "previous" for the next cycle.
    pub fn update(&mut self, pair: &Pair, bid_liquidity: f64, ask_liquidity: f64, delta_5m: f64) {
        let entry = self.inner.entry(pair.clone()).or_default();
        entry.prev_bid_liquidity = Some(bid_liquidity);
        entry.prev_ask_liquidity = Some(ask_liquidity);
        entry.prev_delta_5m = Some(delta_5m);
    }

    pub fn last_alert(&self, pair: &Pair) -> Option<DateTime<Utc>> {
        self.inner.get(pair).and_then(|s| s.last_alert)
    }

    pub fn set_last_alert(&mut self, pair: &Pair, ts: DateTime<Utc>) {
        self.inner.entry(pair.clone()).or_default().last_alert = Some(ts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(bid: f64, ask: f64) -> HistoricalSample {
        HistoricalSample {
            price: 100.0,
            bid_liquidity: bid,
            ask_liquidity: ask,
        }
    }

    fn pair() -> Pair {
        Pair::normalize("BTCUSDT")
    }

    #[test]
    fn seed_needs_a_full_window() {
        let mut store = RollingStateStore::new();
        let samples: Vec<_> = (0..SEED_WINDOW - 1).map(|_| sample(10.0, 20.0)).collect();

        store.seed(&pair(), &samples);
        assert!(store.get(&pair()).is_none());
    }

    #[test]
    fn seed_averages_the_trailing_window() {
        let mut store = RollingStateStore::new();
        // 12 samples; only the last 10 (bid 3.0, ask 6.0) should count.
        let mut samples = vec![sample(1000.0, 1000.0), sample(1000.0, 1000.0)];
        samples.extend((0..SEED_WINDOW).map(|_| sample(3.0, 6.0)));

        store.seed(&pair(), &samples);
        let state = store.get(&pair()).unwrap();
        assert_eq!(state.prev_bid_liquidity, Some(3.0));
        assert_eq!(state.prev_ask_liquidity, Some(6.0));
        assert_eq!(state.prev_delta_5m, None);
    }

    #[test]
    fn update_overwrites_previous_cycle() {
        let mut store = RollingStateStore::new();
        store.update(&pair(), 1.0, 2.0, 3.0);
        store.update(&pair(), 10.0, 20.0, 30.0);

        let state = store.get(&pair()).unwrap();
        assert_eq!(state.prev_bid_liquidity, Some(10.0));
        assert_eq!(state.prev_ask_liquidity, Some(20.0));
        assert_eq!(state.prev_delta_5m, Some(30.0));
    }

    #[test]
    fn alert_clock_is_per_pair() {
        let mut store = RollingStateStore::new();
        let other = Pair::normalize("ETHUSDT");
        let now = Utc::now();

        store.set_last_alert(&pair(), now);
        assert_eq!(store.last_alert(&pair()), Some(now));
        assert_eq!(store.last_alert(&other), None);
    }
}

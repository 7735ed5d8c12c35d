//! Snapshot loop orchestrator.
//!
//! One cycle walks the configured pairs in order: fetch ticker and depth,
//! derive metrics, compare against the rolling state, classify, detect
//! liquidity alerts, persist a CSV snapshot, and update the state. A
//! failed fetch skips that pair for the cycle; the next cycle is the
//! retry. After all pairs, the cycle's rows are printed as one table.

use anyhow::Result;
use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, info, warn};

use common::logger::{TraceId, cycle_span};
use common::time::unix_ts;
use market::alert::LiquidityAlertDetector;
use market::bitget::MarketApi;
use market::metrics;
use market::signal::{self, SentimentSource};
use market::state::RollingStateStore;
use market::types::{Pair, SnapshotRecord};

use crate::config::AppConfig;
use crate::notify::AlertSink;
use crate::persist;
use crate::render;

pub struct Scanner<C> {
    client: C,
    cfg: AppConfig,
    state: RollingStateStore,
    detector: LiquidityAlertDetector,
    sentiment: Box<dyn SentimentSource>,
    alerts: Box<dyn AlertSink>,
}

impl<C: MarketApi> Scanner<C> {
    pub fn new(
        client: C,
        cfg: AppConfig,
        state: RollingStateStore,
        sentiment: Box<dyn SentimentSource>,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        let detector = LiquidityAlertDetector::new(cfg.alert.clone());
        Self {
            client,
            cfg,
            state,
            detector,
            sentiment,
            alerts,
        }
    }

    /// Poll forever. Terminates only through task cancellation (ctrl-c in
    /// main selects against this future).
    pub async fn run(&mut self, pairs: &[Pair]) -> Result<()> {
        let mut ticker = interval(self.cfg.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            pairs = pairs.len(),
            every_secs = self.cfg.poll_interval.as_secs(),
            timeframe = self.cfg.timeframe.as_str(),
            "scanner started"
        );

        loop {
            ticker.tick().await;

            let span = cycle_span(&TraceId::default());
            let records = self.cycle(pairs).instrument(span).await;

            if records.is_empty() {
                warn!("no pair produced a snapshot this cycle");
                continue;
            }
            println!("{}", render::cycle_table(&records));
        }
    }

    /// One full pass over the configured pairs, in input order.
    pub async fn cycle(&mut self, pairs: &[Pair]) -> Vec<SnapshotRecord> {
        let ts = unix_ts();
        let mut records = Vec::with_capacity(pairs.len());

        for pair in pairs {
            match self.poll_pair(pair, ts).await {
                Ok(record) => records.push(record),
                Err(e) => warn!(pair = %pair, error = %e, "skipping pair for this cycle"),
            }
        }

        records
    }

    async fn poll_pair(&mut self, pair: &Pair, ts: i64) -> Result<SnapshotRecord> {
        let price = self.client.fetch_ticker(pair).await?;
        let book = self
            .client
            .fetch_order_book(pair, self.cfg.depth_level)
            .await?;

        let bid_liquidity = metrics::liquidity(&book.bids, price);
        let ask_liquidity = metrics::liquidity(&book.asks, price);
        let deltas = metrics::price_deltas(&metrics::level_prices(&book));
        let spread = metrics::spread(book.best_bid, book.best_ask);
        let delta_5m = deltas.m5.unwrap_or(0.0);

        // Percentage changes read the previous cycle's values; a pair
        // without history compares against itself (zero change).
        let prev = self.state.get(pair).copied().unwrap_or_default();
        let pct_change_bid = metrics::percentage_change(
            Some(prev.prev_bid_liquidity.unwrap_or(bid_liquidity)),
            bid_liquidity,
        );
        let pct_change_ask = metrics::percentage_change(
            Some(prev.prev_ask_liquidity.unwrap_or(ask_liquidity)),
            ask_liquidity,
        );
        let pct_change_5m =
            metrics::percentage_change(Some(prev.prev_delta_5m.unwrap_or(delta_5m)), delta_5m);

        let action = signal::classify(pct_change_bid);
        let sentiment = self.sentiment.classify(pair);
        let target_price = signal::target_price(price, action);
        let (stop_loss, take_profit) =
            signal::stop_loss_take_profit(target_price, self.cfg.risk_tolerance_pct);

        let now = Utc::now();
        if let Some(event) = self
            .detector
            .evaluate(pair, &book, self.state.last_alert(pair), now)
        {
            info!(
                pair = %pair,
                direction = %event.direction,
                deviation = event.deviation,
                "liquidity alert"
            );
            if let Err(e) = self.alerts.notify(&event) {
                warn!(pair = %pair, error = %e, "alert delivery failed");
            }
            self.state.set_last_alert(pair, event.ts);
        }

        let record = SnapshotRecord {
            pair: pair.clone(),
            ts,
            price,
            best_bid: book.best_bid,
            best_ask: book.best_ask,
            bid_liquidity,
            ask_liquidity,
            delta_5m: deltas.m5,
            pct_change_bid,
            pct_change_ask,
            pct_change_5m,
            spread,
            action,
            target_price,
            stop_loss,
            take_profit,
            sentiment,
        };

        if let Err(e) = persist::write_snapshot(&self.cfg.data_dir, &record) {
            warn!(pair = %pair, error = %e, "failed to persist snapshot");
        }

        self.state.update(pair, bid_liquidity, ask_liquidity, delta_5m);

        Ok(record)
    }

    /// Seed the rolling state from historical snapshot files.
    pub fn seed_from_history(&mut self, pairs: &[Pair]) {
        for pair in pairs {
            let samples = persist::read_historical(&self.cfg.snapshots_dir, pair);
            if samples.is_empty() {
                continue;
            }
            self.state.seed(pair, &samples);
            info!(pair = %pair, samples = samples.len(), "rolling state seeded from history");
        }
    }

    pub fn state(&self) -> &RollingStateStore {
        &self.state
    }
}

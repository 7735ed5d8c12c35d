//! Detector + rolling state across simulated cycles: the cooldown must
//! admit exactly one alert per 5-minute window per pair.

use chrono::{Duration, Utc};

use market::alert::{AlertEvent, LiquidityAlertDetector};
use market::state::RollingStateStore;
use market::types::{OrderBookSnapshot, Pair, PriceLevel};

fn deviating_book() -> OrderBookSnapshot {
    // Heavy top-of-book: full-book bid liquidity far above the
    // trailing-10-level average.
    let mut bids = vec![PriceLevel {
        price: 50_000.0,
        qty: 40.0,
    }];
    bids.extend((0..19).map(|_| PriceLevel {
        price: 50_000.0,
        qty: 1.0,
    }));
    let asks = (0..20)
        .map(|_| PriceLevel {
            price: 50_010.0,
            qty: 1.0,
        })
        .collect();

    OrderBookSnapshot {
        best_bid: 50_000.0,
        best_ask: 50_010.0,
        bids,
        asks,
    }
}

/// One cycle's worth of alert handling, the way the orchestrator does it.
fn run_cycle(
    detector: &LiquidityAlertDetector,
    state: &mut RollingStateStore,
    pair: &Pair,
    book: &OrderBookSnapshot,
    now: chrono::DateTime<Utc>,
) -> Option<AlertEvent> {
    let event = detector.evaluate(pair, book, state.last_alert(pair), now)?;
    state.set_last_alert(pair, event.ts);
    Some(event)
}

#[test]
fn back_to_back_deviations_yield_one_alert() {
    let detector = LiquidityAlertDetector::default();
    let mut state = RollingStateStore::new();
    let pair = Pair::normalize("BTCUSDT");
    let book = deviating_book();

    let t0 = Utc::now();
    let first = run_cycle(&detector, &mut state, &pair, &book, t0);
    let second = run_cycle(&detector, &mut state, &pair, &book, t0 + Duration::minutes(1));

    assert!(first.is_some());
    assert!(second.is_none());
}

#[test]
fn deviations_five_minutes_apart_yield_two_alerts() {
    let detector = LiquidityAlertDetector::default();
    let mut state = RollingStateStore::new();
    let pair = Pair::normalize("BTCUSDT");
    let book = deviating_book();

    let t0 = Utc::now();
    let first = run_cycle(&detector, &mut state, &pair, &book, t0);
    let second = run_cycle(&detector, &mut state, &pair, &book, t0 + Duration::minutes(5));

    assert!(first.is_some());
    assert!(second.is_some());
}

#[test]
fn cooldowns_do_not_leak_across_pairs() {
    let detector = LiquidityAlertDetector::default();
    let mut state = RollingStateStore::new();
    let btc = Pair::normalize("BTCUSDT");
    let eth = Pair::normalize("ETHUSDT");
    let book = deviating_book();

    let t0 = Utc::now();
    assert!(run_cycle(&detector, &mut state, &btc, &book, t0).is_some());
    // BTC is cooling down; ETH is still eligible in the same cycle.
    assert!(run_cycle(&detector, &mut state, &eth, &book, t0).is_some());
    assert!(run_cycle(&detector, &mut state, &btc, &book, t0 + Duration::minutes(1)).is_none());
}

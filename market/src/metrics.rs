//! Pure metric functions over a single order-book snapshot.
//!
//! Two different liquidity notions exist in this system and both are kept:
//! [`liquidity`] scales every level by the ticker reference price (the
//! quote-currency metric the percentage-change comparisons run on), while
//! the alert detector sums raw `price × qty` without the multiplier.

use crate::types::{OrderBookSnapshot, PriceDeltas, PriceLevel};

/// Lookback windows (in samples) for [`price_deltas`].
const DELTA_WINDOWS: [usize; 3] = [5, 15, 60];

/// Liquidity in quote currency: `Σ price × qty × reference_price`.
///
/// The reference price multiplies every level, not just the top. The
/// downstream percentage-change comparisons are self-consistent under
/// this scaling.
pub fn liquidity(levels: &[PriceLevel], reference_price: f64) -> f64 {
    levels
        .iter()
        .map(|l| l.price * l.qty * reference_price)
        .sum()
}

/// Best-ask minus best-bid. Negative only on crossed (bad-quality) data.
pub fn spread(best_bid: f64, best_ask: f64) -> f64 {
    best_ask - best_bid
}

/// Price samples feeding [`price_deltas`]: bid level prices followed by
/// ask level prices of the current snapshot. Not a time series.
pub fn level_prices(book: &OrderBookSnapshot) -> Vec<f64> {
    book.bids
        .iter()
        .chain(book.asks.iter())
        .map(|l| l.price)
        .collect()
}

/// Delta per window `w`: last sample minus the `(w-1)`-th-from-last,
/// present only when there are at least `w` samples.
pub fn price_deltas(samples: &[f64]) -> PriceDeltas {
    let delta = |w: usize| {
        if samples.len() > w - 1 {
            let last = samples[samples.len() - 1];
            Some(last - samples[samples.len() - w])
        } else {
            None
        }
    };

    let [m5, m15, m60] = DELTA_WINDOWS.map(delta);
    PriceDeltas { m5, m15, m60 }
}

/// Percentage change of `current` against `previous`.
///
/// `None` when there is no previous value or it is zero; the metric is
/// undefined rather than infinite.
pub fn percentage_change(previous: Option<f64>, current: f64) -> Option<f64> {
    match previous {
        None => None,
        Some(p) if p == 0.0 => None,
        Some(p) => Some((current - p) / p * 100.0),
    }
}

//! Liquidity deviation alerts.
//!
//! Compares the full book's unscaled liquidity (`Σ price × qty`, no
//! reference-price multiplier) against the trailing average taken over
//! the last [`AlertConfig::window`] levels of the *same* snapshot. The
//! deviation is measured against the tail of the current book, not a
//! historical series.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::types::{OrderBookSnapshot, Pair, PriceLevel};

/// Default deviation (as a fraction) that triggers an alert.
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 0.5;

/// Default number of trailing levels averaged.
pub const DEFAULT_WINDOW: usize = 10;

/// Minimum minutes between alerts for the same pair.
pub const COOLDOWN_MINUTES: i64 = 5;

#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// `current/average - 1` beyond which an alert fires.
    pub deviation_threshold: f64,
    /// Trailing level count for the average.
    pub window: usize,
    /// Per-pair minimum gap between alerts.
    pub cooldown: Duration,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            window: DEFAULT_WINDOW,
            cooldown: Duration::minutes(COOLDOWN_MINUTES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDirection {
    BuyingPressure,
    SellingPressure,
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlertDirection::BuyingPressure => "buying",
            AlertDirection::SellingPressure => "selling",
        })
    }
}

/// Emitted when liquidity deviates past the threshold outside a cooldown.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub pair: Pair,
    pub direction: AlertDirection,
    /// Deviation as a fraction of the trailing average (0.65 = 65%).
    pub deviation: f64,
    pub ts: DateTime<Utc>,
}

/// Per-pair two-state machine: Idle, or Cooldown while the last alert is
/// younger than [`AlertConfig::cooldown`]. The cooldown clock itself lives
/// in the rolling state store; the detector is stateless.
#[derive(Debug, Clone, Default)]
pub struct LiquidityAlertDetector {
    cfg: AlertConfig,
}

impl LiquidityAlertDetector {
    pub fn new(cfg: AlertConfig) -> Self {
        Self { cfg }
    }

    /// Evaluate one snapshot. At most one event per call; the bid side is
    /// checked first, so simultaneous deviations report buying pressure.
    pub fn evaluate(
        &self,
        pair: &Pair,
        book: &OrderBookSnapshot,
        last_alert: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<AlertEvent> {
        let cooled_down = match last_alert {
            None => true,
            Some(t) => now - t >= self.cfg.cooldown,
        };
        if !cooled_down {
            return None;
        }

        let bid_deviation = self.deviation(&book.bids);
        let ask_deviation = self.deviation(&book.asks);

        if bid_deviation > self.cfg.deviation_threshold {
            return Some(AlertEvent {
                pair: pair.clone(),
                direction: AlertDirection::BuyingPressure,
                deviation: bid_deviation,
                ts: now,
            });
        }

        if ask_deviation < -self.cfg.deviation_threshold {
            return Some(AlertEvent {
                pair: pair.clone(),
                direction: AlertDirection::SellingPressure,
                deviation: ask_deviation,
                ts: now,
            });
        }

        None
    }

    /// `current/average - 1` where the average divides the trailing-window
    /// sum by the full window size even when fewer levels exist.
    fn deviation(&self, levels: &[PriceLevel]) -> f64 {
        let current: f64 = levels.iter().map(|l| l.price * l.qty).sum();

        let tail_start = levels.len().saturating_sub(self.cfg.window);
        let tail_sum: f64 = levels[tail_start..].iter().map(|l| l.price * l.qty).sum();
        let average = tail_sum / self.cfg.window as f64;

        current / average - 1.0
    }
}

//! Directional signal derived from the change in bid-side liquidity.

pub mod sentiment;

use std::fmt;

pub use sentiment::{RandomSentiment, Sentiment, SentimentSource};

/// Suggested action for a pair this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Buy => "Buy",
            Action::Sell => "Sell",
            Action::Hold => "Hold",
        })
    }
}

/// Classify the percentage change in bid liquidity.
///
/// Total over `Option<f64>`: growing bid liquidity reads as buying
/// pressure, shrinking as selling pressure, zero or unknown as Hold.
pub fn classify(pct_change_bid_liquidity: Option<f64>) -> Action {
    match pct_change_bid_liquidity {
        Some(change) if change > 0.0 => Action::Buy,
        Some(change) if change < 0.0 => Action::Sell,
        _ => Action::Hold,
    }
}

/// Target price for the action: +2% for Buy, -1% for Sell, none for Hold.
pub fn target_price(current_price: f64, action: Action) -> Option<f64> {
    match action {
        Action::Buy => Some(current_price * 1.02),
        Action::Sell => Some(current_price * 0.99),
        Action::Hold => None,
    }
}

/// Stop-loss / take-profit bracketing the target by the risk tolerance.
pub fn stop_loss_take_profit(
    target_price: Option<f64>,
    risk_tolerance_pct: f64,
) -> (Option<f64>, Option<f64>) {
    let Some(target) = target_price else {
        return (None, None);
    };

    let stop_loss = target * (1.0 - risk_tolerance_pct / 100.0);
    let take_profit = target * (1.0 + risk_tolerance_pct / 100.0);
    (Some(stop_loss), Some(take_profit))
}

use std::fmt;

use crate::signal::{Action, Sentiment};

/// Suffix Bitget uses for USDT-margined perpetual symbols.
pub const MARKET_SUFFIX: &str = "_UMCBL";

/// Normalized instrument identifier, e.g. `BTCUSDT_UMCBL`.
///
/// Immutable once constructed; user input is uppercased, stripped of
/// spaces and hyphens, and suffixed for the futures market.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair(String);

impl Pair {
    /// Build a pair from free-form user input (`btc-usdt` → `BTCUSDT_UMCBL`).
    pub fn normalize(raw: &str) -> Self {
        let mut sym: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect::<String>()
            .to_uppercase();

        if !sym.ends_with(MARKET_SUFFIX) {
            sym.push_str(MARKET_SUFFIX);
        }
        Self(sym)
    }

    /// Build a pair from a symbol the exchange already reported.
    pub fn from_symbol(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One visible order-book level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLevel {
    pub price: f64,
    pub qty: f64,
}

/// Order book captured atomically in one poll, best-first on both sides.
#[derive(Debug, Clone)]
pub struct OrderBookSnapshot {
    pub best_bid: f64,
    pub best_ask: f64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

/// Short-horizon price deltas keyed by lookback window.
///
/// A delta is present only when the sample list is long enough for its
/// window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceDeltas {
    pub m5: Option<f64>,
    pub m15: Option<f64>,
    pub m60: Option<f64>,
}

/// Everything computed for one pair in one cycle. Consumed by the table
/// renderer and the snapshot CSV sink; never read back as state.
#[derive(Debug, Clone)]
pub struct SnapshotRecord {
    pub pair: Pair,
    pub ts: i64,
    pub price: f64,
    pub best_bid: f64,
    pub best_ask: f64,
    pub bid_liquidity: f64,
    pub ask_liquidity: f64,
    pub delta_5m: Option<f64>,
    pub pct_change_bid: Option<f64>,
    pub pct_change_ask: Option<f64>,
    pub pct_change_5m: Option<f64>,
    pub spread: f64,
    pub action: Action,
    pub target_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(Pair::normalize("btc usdt").as_str(), "BTCUSDT_UMCBL");
        assert_eq!(Pair::normalize("eth-usdt").as_str(), "ETHUSDT_UMCBL");
        assert_eq!(Pair::normalize("BTCUSDT").as_str(), "BTCUSDT_UMCBL");
    }

    #[test]
    fn normalize_keeps_existing_suffix() {
        assert_eq!(Pair::normalize("BTCUSDT_UMCBL").as_str(), "BTCUSDT_UMCBL");
        assert_eq!(Pair::normalize("btcusdt_umcbl").as_str(), "BTCUSDT_UMCBL");
    }

    #[test]
    fn from_symbol_is_verbatim() {
        assert_eq!(Pair::from_symbol("XRPUSDT_UMCBL").as_str(), "XRPUSDT_UMCBL");
    }
}

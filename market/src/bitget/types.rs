//! Bitget response envelopes. Payloads arrive under a `data` key with
//! all numeric fields encoded as strings.

use serde::Deserialize;

use crate::bitget::errors::BitgetError;
use crate::types::{OrderBookSnapshot, PriceLevel};

#[derive(Debug, Deserialize)]
pub struct ContractsEnvelope {
    pub data: Vec<Contract>,
}

#[derive(Debug, Deserialize)]
pub struct Contract {
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct TickerEnvelope {
    pub data: TickerData,
}

#[derive(Debug, Deserialize)]
pub struct TickerData {
    /// Last traded price.
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct DepthEnvelope {
    pub data: DepthData,
}

/// `bids`/`asks` are best-first `[price, quantity]` string pairs.
#[derive(Debug, Deserialize)]
pub struct DepthData {
    pub bids: Vec<[String; 2]>,
    pub asks: Vec<[String; 2]>,
}

impl DepthData {
    /// Parse into a typed snapshot. Fails when either side is empty (no
    /// best price derivable) or a level does not parse as a float.
    pub fn into_snapshot(self) -> Result<OrderBookSnapshot, BitgetError> {
        let bids = parse_levels(&self.bids)?;
        let asks = parse_levels(&self.asks)?;

        let best_bid = bids
            .first()
            .map(|l| l.price)
            .ok_or(BitgetError::EmptyOrderBook("bid"))?;
        let best_ask = asks
            .first()
            .map(|l| l.price)
            .ok_or(BitgetError::EmptyOrderBook("ask"))?;

        Ok(OrderBookSnapshot {
            best_bid,
            best_ask,
            bids,
            asks,
        })
    }
}

fn parse_levels(raw: &[[String; 2]]) -> Result<Vec<PriceLevel>, BitgetError> {
    raw.iter()
        .map(|[price, qty]| {
            Ok(PriceLevel {
                price: price.parse()?,
                qty: qty.parse()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_envelope_parses_and_converts() {
        let json = r#"{
            "code": "00000",
            "msg": "success",
            "data": {
                "asks": [["50010.5", "1.2"], ["50011.0", "0.4"]],
                "bids": [["50000.0", "1.0"], ["49999.5", "2.0"]],
                "timestamp": "1700000000000"
            }
        }"#;

        let env: DepthEnvelope = serde_json::from_str(json).unwrap();
        let book = env.data.into_snapshot().unwrap();

        assert_eq!(book.best_bid, 50_000.0);
        assert_eq!(book.best_ask, 50_010.5);
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.asks[1].qty, 0.4);
    }

    #[test]
    fn empty_bid_side_is_an_error() {
        let data = DepthData {
            bids: vec![],
            asks: vec![["1.0".into(), "1.0".into()]],
        };
        assert!(matches!(
            data.into_snapshot(),
            Err(BitgetError::EmptyOrderBook("bid"))
        ));
    }

    #[test]
    fn garbage_level_is_a_parse_error() {
        let data = DepthData {
            bids: vec![["not-a-number".into(), "1.0".into()]],
            asks: vec![["1.0".into(), "1.0".into()]],
        };
        assert!(matches!(
            data.into_snapshot(),
            Err(BitgetError::ParseFloat(_))
        ));
    }

    #[test]
    fn ticker_envelope_parses() {
        let json = r#"{"code":"00000","data":{"symbol":"BTCUSDT_UMCBL","last":"50005"}}"#;
        let env: TickerEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.data.last, "50005");
    }

    #[test]
    fn contracts_envelope_parses() {
        let json = r#"{"data":[{"symbol":"BTCUSDT_UMCBL"},{"symbol":"ETHUSDT_UMCBL"}]}"#;
        let env: ContractsEnvelope = serde_json::from_str(json).unwrap();
        let symbols: Vec<_> = env.data.into_iter().map(|c| c.symbol).collect();
        assert_eq!(symbols, vec!["BTCUSDT_UMCBL", "ETHUSDT_UMCBL"]);
    }
}

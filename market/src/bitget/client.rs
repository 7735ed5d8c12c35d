use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::bitget::MarketApi;
use crate::bitget::errors::BitgetError;
use crate::bitget::types::{ContractsEnvelope, DepthEnvelope, TickerEnvelope};
use crate::types::{OrderBookSnapshot, Pair};

/// Caps a stuck call well below the poll interval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Product type selecting USDT-margined perpetuals.
const PRODUCT_TYPE: &str = "umcbl";

#[derive(Clone)]
pub struct BitgetClient {
    http: Client,
    base_url: String,
}

impl BitgetClient {
    pub fn new(base_url: String) -> Result<Self, BitgetError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// GET a `data`-wrapped JSON payload, mapping non-success statuses to
    /// a distinct variant so callers can tell transport from rejection.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BitgetError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.http.get(&url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BitgetError::Status(status));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl MarketApi for BitgetClient {
    #[instrument(skip(self), level = "debug")]
    async fn list_contracts(&self) -> Result<Vec<String>, BitgetError> {
        let env: ContractsEnvelope = self
            .get_json(
                "/api/mix/v1/market/contracts",
                &[("productType", PRODUCT_TYPE)],
            )
            .await?;

        let symbols: Vec<String> = env.data.into_iter().map(|c| c.symbol).collect();
        debug!(count = symbols.len(), "contracts fetched");
        Ok(symbols)
    }

    #[instrument(skip(self), fields(pair = %pair), level = "debug")]
    async fn fetch_ticker(&self, pair: &Pair) -> Result<f64, BitgetError> {
        let env: TickerEnvelope = self
            .get_json("/api/mix/v1/market/ticker", &[("symbol", pair.as_str())])
            .await?;

        let last: f64 = env.data.last.parse()?;
        debug!(last, "ticker fetched");
        Ok(last)
    }

    #[instrument(skip(self), fields(pair = %pair), level = "debug")]
    async fn fetch_order_book(
        &self,
        pair: &Pair,
        depth: u32,
    ) -> Result<OrderBookSnapshot, BitgetError> {
        let limit = depth.to_string();
        let env: DepthEnvelope = self
            .get_json(
                "/api/mix/v1/market/depth",
                &[("symbol", pair.as_str()), ("limit", &limit)],
            )
            .await?;

        let book = env.data.into_snapshot()?;
        debug!(
            best_bid = book.best_bid,
            best_ask = book.best_ask,
            bid_levels = book.bids.len(),
            ask_levels = book.asks.len(),
            "order book fetched"
        );
        Ok(book)
    }
}

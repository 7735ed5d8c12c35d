//! Bitget public REST market data.
//!
//! Read-only: instrument list, ticker, order-book depth. Authenticated
//! trading endpoints are out of scope.

pub mod client;
pub mod errors;
pub mod types;

pub use client::BitgetClient;
pub use errors::BitgetError;

use async_trait::async_trait;

use crate::types::{OrderBookSnapshot, Pair};

/// Seam between the orchestrator and the exchange. Tests substitute a
/// mock; production uses [`BitgetClient`].
#[async_trait]
pub trait MarketApi: Send + Sync {
    /// All USDT-margined perpetual symbols.
    async fn list_contracts(&self) -> Result<Vec<String>, BitgetError>;

    /// Last traded price for a pair.
    async fn fetch_ticker(&self, pair: &Pair) -> Result<f64, BitgetError>;

    /// Order-book snapshot bounded to `depth` levels per side.
    async fn fetch_order_book(
        &self,
        pair: &Pair,
        depth: u32,
    ) -> Result<OrderBookSnapshot, BitgetError>;
}

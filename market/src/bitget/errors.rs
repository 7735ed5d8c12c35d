use thiserror::Error;

/// Typed failure for one REST call. The orchestrator treats every
/// variant as "skip this pair this cycle", never as fatal.
#[derive(Error, Debug)]
pub enum BitgetError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bitget returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("numeric field parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("order book has an empty {0} side")]
    EmptyOrderBook(&'static str),
}

use tracing::Span;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

/// Correlation ID attached to every poll cycle's root span.
#[derive(Clone, Debug)]
pub struct TraceId(String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self(Uuid::new_v4().as_hyphenated().to_string())
    }
}

/// Initializes the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Production gets JSON
/// lines; anything else gets the pretty human format.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = fmt::layer().with_target(true).with_line_number(true);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base)
            .init();
    }
}

/// Root span for one poll cycle across all configured pairs.
pub fn cycle_span(trace_id: &TraceId) -> Span {
    tracing::info_span!("cycle", trace_id = %trace_id.as_str())
}

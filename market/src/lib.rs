pub mod alert;
pub mod bitget;
pub mod metrics;
pub mod signal;
pub mod state;
pub mod types;

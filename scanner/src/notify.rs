//! Desktop notification sink for liquidity alerts.

use anyhow::Result;

use market::alert::{AlertDirection, AlertEvent};

/// How long the notification stays on screen.
const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Where alert events go. The orchestrator only knows this trait; tests
/// plug in a recording sink.
pub trait AlertSink: Send {
    fn notify(&mut self, event: &AlertEvent) -> Result<()>;
}

pub fn title(event: &AlertEvent) -> String {
    match event.direction {
        AlertDirection::BuyingPressure => {
            format!("Strong Buying Volume Detected for {}", event.pair)
        }
        AlertDirection::SellingPressure => {
            format!("Strong Selling Volume Detected for {}", event.pair)
        }
    }
}

pub fn message(event: &AlertEvent) -> String {
    match event.direction {
        AlertDirection::BuyingPressure => format!(
            "Bid Liquidity is {:.2}% higher than the average.",
            event.deviation * 100.0
        ),
        AlertDirection::SellingPressure => format!(
            "Ask Liquidity is {:.2}% lower than the average.",
            event.deviation.abs() * 100.0
        ),
    }
}

/// OS taskbar notifications via the desktop notification daemon.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl AlertSink for DesktopNotifier {
    fn notify(&mut self, event: &AlertEvent) -> Result<()> {
        notify_rust::Notification::new()
            .summary(&title(event))
            .body(&message(event))
            .timeout(notify_rust::Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS))
            .show()?;
        Ok(())
    }
}

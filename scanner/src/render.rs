//! Console table for one poll cycle: 16 columns, one row per pair, in
//! the configured pair order.

use comfy_table::{Cell, Color, Table, presets};

use market::types::SnapshotRecord;

const HEADERS: [&str; 16] = [
    "Pair",
    "Price",
    "Best Bid",
    "Best Ask",
    "Bid Liquidity (USD)",
    "Ask Liquidity (USD)",
    "5m Delta",
    "% Change (Bid)",
    "% Change (Ask)",
    "% Change (5m)",
    "Spread",
    "Action",
    "Target Price",
    "Stop-Loss",
    "Take-Profit",
    "Sentiment",
];

/// Thousands-separated two-decimal rendering, `-` when absent.
pub fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => group_thousands(v),
        None => "-".to_string(),
    }
}

fn group_thousands(v: f64) -> String {
    let formatted = format!("{:.2}", v.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{int_grouped}.{frac_part}")
}

/// Percentage cell: green for gains (and zero), red for losses.
fn pct_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => {
            let color = if v >= 0.0 { Color::Green } else { Color::Red };
            Cell::new(format!("{v:.2}%")).fg(color)
        }
        None => Cell::new("-"),
    }
}

pub fn cycle_table(records: &[SnapshotRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(HEADERS);

    for r in records {
        table.add_row(vec![
            Cell::new(r.pair.as_str()),
            Cell::new(r.price.to_string()),
            Cell::new(fmt_value(Some(r.best_bid))),
            Cell::new(fmt_value(Some(r.best_ask))),
            Cell::new(fmt_value(Some(r.bid_liquidity))),
            Cell::new(fmt_value(Some(r.ask_liquidity))),
            pct_cell(r.delta_5m),
            pct_cell(r.pct_change_bid),
            pct_cell(r.pct_change_ask),
            pct_cell(r.pct_change_5m),
            Cell::new(fmt_value(Some(r.spread))),
            Cell::new(r.action.to_string()),
            Cell::new(fmt_value(r.target_price)),
            Cell::new(fmt_value(r.stop_loss)),
            Cell::new(fmt_value(r.take_profit)),
            Cell::new(r.sentiment.to_string()),
        ]);
    }

    table
}

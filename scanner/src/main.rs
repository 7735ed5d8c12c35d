use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use common::logger::init_tracing;
use market::bitget::{BitgetClient, MarketApi};
use market::signal::RandomSentiment;
use market::state::RollingStateStore;
use market::types::Pair;
use scanner::cli::Cli;
use scanner::config::AppConfig;
use scanner::notify::DesktopNotifier;
use scanner::persist;
use scanner::runner::Scanner;

/// Seed pair always monitored first in "all" mode.
const DEFAULT_PAIR: &str = "BTCUSDT";

/// Expand the CLI pair list. `all` pulls every contract from the
/// exchange and records the instrument index in `pairs.csv`.
async fn resolve_pairs(client: &BitgetClient, cli: &Cli) -> Result<Vec<Pair>> {
    if cli.pairs.len() == 1 && cli.pairs[0].eq_ignore_ascii_case("all") {
        let symbols = client.list_contracts().await?;
        persist::write_pairs_index(Path::new("pairs.csv"), &symbols)?;

        let mut pairs = vec![Pair::normalize(DEFAULT_PAIR)];
        pairs.extend(symbols.iter().map(Pair::from_symbol));
        return Ok(pairs);
    }

    Ok(cli.pairs.iter().map(|p| Pair::normalize(p)).collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";
    init_tracing(is_production);

    let cfg = AppConfig::from_cli(&cli);
    let client = BitgetClient::new(cfg.rest_url.clone())?;

    let pairs = resolve_pairs(&client, &cli).await?;
    info!(pairs = pairs.len(), "starting bitget scanner");

    let mut scanner = Scanner::new(
        client,
        cfg,
        RollingStateStore::new(),
        Box::new(RandomSentiment),
        Box::new(DesktopNotifier),
    );
    scanner.seed_from_history(&pairs);

    tokio::select! {
        res = scanner.run(&pairs) => res,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping scanner");
            Ok(())
        }
    }
}

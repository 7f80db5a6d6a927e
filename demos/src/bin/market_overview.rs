//! Demo 1: Market Overview
//!
//! Showcases: Public endpoints, no credentials needed
//!
//! Run: cargo run --bin market_overview [MARKET]

use bittrex_rest::{BittrexClient, OrderBookSide};
use colored::*;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market = std::env::args().nth(1).unwrap_or_else(|| "BTC-LTC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  MARKET OVERVIEW".cyan().bold());
    println!("{}", format!("  {}", market).cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BittrexClient::new()?;
    let public = client.public().with_deadline(Duration::from_secs(10));

    let ticker = public.get_ticker(&market).await?;
    let bid = decimal(&ticker["Bid"]);
    let ask = decimal(&ticker["Ask"]);
    println!("  {} {}", "BID:".yellow(), bid);
    println!("  {} {}", "ASK:".yellow(), ask);
    println!("  {} {}", "LAST:".yellow(), decimal(&ticker["Last"]));
    if bid > Decimal::ZERO {
        let spread_bps = (ask - bid) / bid * Decimal::from(10_000);
        println!("  {} {:.2} bps", "SPREAD:".green(), spread_bps);
    }
    println!();

    let summary = public.get_market_summary(&market).await?;
    if let Some(day) = summary.as_array().and_then(|entries| entries.first()) {
        println!("  {} {}", "24h High:".dimmed(), decimal(&day["High"]));
        println!("  {} {}", "24h Low:".dimmed(), decimal(&day["Low"]));
        println!("  {} {}", "24h Volume:".dimmed(), decimal(&day["Volume"]));
        println!();
    }

    let book = public.get_order_book(&market, OrderBookSide::Both).await?;
    println!("{}", "  Top of book".bold());
    print_levels("BUY ", &book["buy"], |s| s.green());
    print_levels("SELL", &book["sell"], |s| s.red());
    println!();

    let history = public.get_market_history(&market).await?;
    let trades = history.as_array().map(Vec::len).unwrap_or(0);
    println!("{} {} recent trades", "✓".green(), trades);

    match client.get_ticker("NOT-AMARKET").await {
        Ok(_) => println!("{} unexpected ticker for NOT-AMARKET", "✗".red()),
        Err(e) => println!("{} {}", "✓".green(), format!("rejected: {}", e).dimmed()),
    }

    Ok(())
}

/// Read a price or quantity using the digits the exchange sent
fn decimal(value: &Value) -> Decimal {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => return Decimal::ZERO,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or_default()
}

fn print_levels(label: &str, levels: &Value, paint: impl Fn(&str) -> ColoredString) {
    for level in levels.as_array().into_iter().flatten().take(5) {
        println!(
            "  {} {:>16} @ {}",
            paint(label),
            decimal(&level["Quantity"]),
            decimal(&level["Rate"])
        );
    }
}

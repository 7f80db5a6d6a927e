//! Demo 2: Account Snapshot
//!
//! Showcases: Signed private endpoints (read-only)
//!
//! Run: BITTREX_API_KEY=... BITTREX_API_SECRET=... cargo run --bin account_snapshot

use bittrex_rest::{BittrexClient, Credentials, DepositAddressStatus};
use colored::*;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT SNAPSHOT".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let (key, secret) = match (
        std::env::var("BITTREX_API_KEY"),
        std::env::var("BITTREX_API_SECRET"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            println!(
                "{} Set BITTREX_API_KEY and BITTREX_API_SECRET to run this demo",
                "✗".red()
            );
            return Ok(());
        }
    };

    let client = BittrexClient::with_credentials(Credentials::new(key, secret)?)?;
    println!("{} Client ready ({})", "✓".green(), client.base_url());
    println!();

    let balances = client.get_balances().await?;
    println!("{}", "  Balances".bold());
    for entry in balances.as_array().into_iter().flatten() {
        if entry["Balance"].as_f64().unwrap_or(0.0) > 0.0 {
            println!(
                "  {:<6} {:>18} {}",
                text(&entry["Currency"]).yellow(),
                entry["Balance"],
                format!("(available {})", entry["Available"]).dimmed()
            );
        }
    }
    println!();

    let open = client.get_open_orders(None).await?;
    println!("  {} {}", "Open orders:".yellow(), count(&open));

    let orders = client.get_order_history(None).await?;
    println!("  {} {}", "Order history:".yellow(), count(&orders));

    let deposits = client.get_deposit_history(None).await?;
    println!("  {} {}", "Deposits:".yellow(), count(&deposits));

    let withdrawals = client.get_withdrawal_history(None).await?;
    println!("  {} {}", "Withdrawals:".yellow(), count(&withdrawals));
    println!();

    match client.get_deposit_address_status("BTC").await? {
        DepositAddressStatus::Ready(address) => {
            println!("{} BTC deposit address {}", "✓".green(), text(&address["Address"]))
        }
        DepositAddressStatus::Generating => {
            println!("{} BTC deposit address is being generated", "…".yellow())
        }
    }

    Ok(())
}

fn count(value: &Value) -> usize {
    value.as_array().map(Vec::len).unwrap_or(0)
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or("-")
}

//! Demo 2: Account Summary
//!
//! Prints balances, open orders, and recent account activity. Requires
//! BITSTAMP_CLIENT_ID, BITSTAMP_API_KEY, and BITSTAMP_API_SECRET in the
//! environment.
//!
//! Run: cargo run --bin account_summary

use bitstamp_rest::{BitstampRestClient, Credentials, UserTransactionsQuery};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let creds = Credentials::from_env()?;
    let client = BitstampRestClient::with_credentials(creds);

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  BITSTAMP ACCOUNT SUMMARY".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let balance = client.balance().await?;
    println!("{}", "Balance".bold());
    println!(
        "  USD  {}  (available {}, reserved {})",
        balance.usd_balance, balance.usd_available, balance.usd_reserved
    );
    println!(
        "  BTC  {}  (available {}, reserved {})",
        balance.btc_balance, balance.btc_available, balance.btc_reserved
    );
    println!("  fee  {}%\n", balance.fee);

    let orders = client.open_orders().await?;
    println!("{} ({})", "Open orders".bold(), orders.len());
    for order in &orders {
        let side = if order.side == 0 {
            "buy ".green()
        } else {
            "sell".red()
        };
        println!(
            "  #{:<10} {} {} @ {}  ({})",
            order.id, side, order.amount, order.price, order.datetime
        );
    }
    println!();

    let query = UserTransactionsQuery::new().with_limit(10);
    let transactions = client.user_transactions(&query).await?;
    println!("{} (last {})", "Activity".bold(), transactions.len());
    for tx in &transactions {
        println!(
            "  #{:<10} usd {:>12}  btc {:>14}  fee {}  ({})",
            tx.id, tx.usd, tx.btc, tx.fee, tx.datetime
        );
    }

    Ok(())
}

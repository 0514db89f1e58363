//! Demo 1: Ticker Watch
//!
//! Polls the public ticker and order book and prints the market snapshot.
//!
//! Run: cargo run --bin ticker_watch

use bitstamp_rest::{BitstampRestClient, TransactionWindow};
use colored::*;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  BITSTAMP TICKER WATCH".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BitstampRestClient::new();

    let trades = client.transactions(TransactionWindow::Minute).await?;
    println!(
        "{} {} trades in the last minute\n",
        "✓".green(),
        trades.len()
    );

    let start = Instant::now();

    loop {
        let ticker = client.ticker().await?;
        let book = client.order_book(true).await?;

        print!("\r\x1B[K");
        print!(
            "  {} ${}  {} ${}  {} ${}  ",
            "LAST:".yellow(),
            ticker.last,
            "BID:".yellow(),
            ticker.bid,
            "ASK:".yellow(),
            ticker.ask
        );
        if let Some(spread) = book.spread() {
            print!("│ {} ${}  ", "SPREAD:".green(), spread);
        }
        print!("│ {} {}", "24h VOL:".dimmed(), ticker.volume);

        use std::io::Write;
        std::io::stdout().flush()?;

        if start.elapsed() > Duration::from_secs(30) {
            break;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    println!();
    Ok(())
}

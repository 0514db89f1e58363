//! REST API client for the Bitstamp cryptocurrency exchange
//!
//! This crate provides a client for Bitstamp's v1 HTTP API, covering public
//! market data and the authenticated account, trading, and funding
//! operations.
//!
//! # Features
//!
//! - **Market Data**: Ticker, order book, recent transactions
//! - **Account**: Balance, transaction history, open orders
//! - **Trading**: Place and cancel limit orders
//! - **Funding**: Bitcoin/Ripple withdrawals, deposit addresses, bitstamp codes
//!
//! # Authentication
//!
//! Private endpoints require a customer ID, API key, and API secret. Each
//! request is signed with HMAC-SHA256 over `nonce + client_id + api_key`,
//! base64 encoded, and sent as the `key`/`nonce`/`signature` form fields
//! alongside the endpoint parameters.
//!
//! # Example
//!
//! ```no_run
//! use bitstamp_rest::{BitstampRestClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitstampRestClient::new();
//!     let ticker = client.ticker().await?;
//!     println!("BTC/USD last: {}", ticker.last);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BitstampRestClient::with_credentials(creds);
//!     let balance = auth_client.balance().await?;
//!     println!("USD available: {}", balance.usd_available);
//!
//!     Ok(())
//! }
//! ```
//!
//! The client performs one HTTP exchange per call: no retries, no rate
//! limiting, no caching. Errors surface to the caller as [`RestError`].

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use auth::Credentials;
pub use client::{BitstampRestClient, ClientConfig};
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    OrderBook, Ticker, Transaction, TransactionWindow,
    // Account
    Balance, Order, SortDirection, UserTransaction, UserTransactionsQuery,
    // Trading
    OrderParams,
    // Funding
    BitcoinWithdrawal, CodeInfo, RippleAddress, RippleWithdrawal, UnconfirmedDeposit,
    WithdrawalRequest,
};

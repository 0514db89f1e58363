//! Types for Bitstamp REST API requests and responses
//!
//! Bitstamp serializes monetary values as decimal strings; the response
//! structs deserialize them into `rust_decimal::Decimal` directly.

use rust_decimal::Decimal;
use serde::Deserialize;

// ============================================================================
// Request Parameters
// ============================================================================

/// Time window for the public transaction export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionWindow {
    /// Last minute
    Minute,
    /// Last hour
    #[default]
    Hour,
    /// Last day
    Day,
}

impl TransactionWindow {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for TransactionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort order for paginated history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Oldest first
    Ascending,
    /// Newest first
    #[default]
    Descending,
}

impl SortDirection {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Query parameters for the user transaction history
#[derive(Debug, Clone)]
pub struct UserTransactionsQuery {
    /// Skip that many transactions before returning results
    pub offset: u32,
    /// Maximum number of transactions to return
    pub limit: u32,
    /// Sort order by date and time
    pub sort: SortDirection,
}

impl Default for UserTransactionsQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            sort: SortDirection::Descending,
        }
    }
}

impl UserTransactionsQuery {
    /// Create a query with the default pagination
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }
}

/// Parameters for a limit order
#[derive(Debug, Clone)]
pub struct OrderParams {
    /// Order amount in BTC
    pub amount: Decimal,
    /// Limit price in USD
    pub price: Decimal,
}

impl OrderParams {
    /// Create limit order parameters
    pub fn new(amount: Decimal, price: Decimal) -> Self {
        Self { amount, price }
    }
}

/// Parameters for a bitcoin withdrawal
#[derive(Debug, Clone)]
pub struct BitcoinWithdrawal {
    /// Bitcoin amount
    pub amount: Decimal,
    /// Destination bitcoin address
    pub address: String,
}

impl BitcoinWithdrawal {
    /// Create bitcoin withdrawal parameters
    pub fn new(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }
}

/// Parameters for a Ripple withdrawal
#[derive(Debug, Clone)]
pub struct RippleWithdrawal {
    /// Currency amount
    pub amount: Decimal,
    /// Destination Ripple address
    pub address: String,
    /// Currency to withdraw
    pub currency: String,
}

impl RippleWithdrawal {
    /// Create Ripple withdrawal parameters
    pub fn new(amount: Decimal, address: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            currency: currency.into(),
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Last BTC price
    #[serde(with = "rust_decimal::serde::str")]
    pub last: Decimal,
    /// Last 24 hours price high
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    /// Last 24 hours price low
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    /// Last 24 hours volume
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    /// Highest buy order
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    /// Lowest sell order
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
}

/// Order book snapshot
///
/// Each level is a `[price, amount]` pair of decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Snapshot timestamp (unix seconds, decimal string)
    pub timestamp: Option<String>,
    /// Open buy orders, best first
    pub bids: Vec<Vec<String>>,
    /// Open sell orders, best first
    pub asks: Vec<Vec<String>>,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level.first()?.parse().ok())
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level.first()?.parse().ok())
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Public trade from the transaction export
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Unix timestamp (decimal string)
    pub date: String,
    /// Transaction ID
    pub tid: u64,
    /// BTC price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// BTC amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

// ============================================================================
// Account Types
// ============================================================================

/// Account balance
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// USD balance
    #[serde(with = "rust_decimal::serde::str")]
    pub usd_balance: Decimal,
    /// BTC balance
    #[serde(with = "rust_decimal::serde::str")]
    pub btc_balance: Decimal,
    /// USD reserved in open orders
    #[serde(with = "rust_decimal::serde::str")]
    pub usd_reserved: Decimal,
    /// BTC reserved in open orders
    #[serde(with = "rust_decimal::serde::str")]
    pub btc_reserved: Decimal,
    /// USD available for trading
    #[serde(with = "rust_decimal::serde::str")]
    pub usd_available: Decimal,
    /// BTC available for trading
    #[serde(with = "rust_decimal::serde::str")]
    pub btc_available: Decimal,
    /// Customer trading fee (percent)
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
}

/// Entry in the user transaction history
#[derive(Debug, Clone, Deserialize)]
pub struct UserTransaction {
    /// Date and time
    pub datetime: String,
    /// Transaction ID
    pub id: u64,
    /// Transaction type (0 - deposit; 1 - withdrawal; 2 - market trade)
    #[serde(rename = "type")]
    pub kind: u8,
    /// USD amount (negative for debits)
    #[serde(with = "rust_decimal::serde::str")]
    pub usd: Decimal,
    /// BTC amount (negative for debits)
    #[serde(with = "rust_decimal::serde::str")]
    pub btc: Decimal,
    /// Transaction fee
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    /// Executed order ID (market trades only)
    pub order_id: Option<u64>,
}

/// Open or freshly placed limit order
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order ID
    pub id: u64,
    /// Date and time
    pub datetime: String,
    /// Order side (0 - buy; 1 - sell)
    #[serde(rename = "type")]
    pub side: u8,
    /// Limit price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Remaining amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

// ============================================================================
// Funding Types
// ============================================================================

/// Withdrawal request entry
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalRequest {
    /// Request ID
    pub id: u64,
    /// Date and time
    pub datetime: String,
    /// Request type (0 - SEPA; 1 - bitcoin; 2 - WIRE transfer;
    /// 3 and 4 - bitstamp code; 5 - Mt.Gox code)
    #[serde(rename = "type")]
    pub kind: u8,
    /// Amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Status (0 - open; 1 - in process; 2 - finished; 3 - canceled;
    /// 4 - failed)
    pub status: u8,
    /// Additional request data (bitstamp code, etc.)
    pub data: Option<serde_json::Value>,
}

/// Unconfirmed bitcoin deposit
#[derive(Debug, Clone, Deserialize)]
pub struct UnconfirmedDeposit {
    /// Bitcoin amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Deposit address used
    pub address: String,
    /// Number of confirmations so far
    pub confirmations: u32,
}

/// USD and BTC amounts carried by a bitstamp code
#[derive(Debug, Clone, Deserialize)]
pub struct CodeInfo {
    /// USD amount
    #[serde(with = "rust_decimal::serde::str")]
    pub usd: Decimal,
    /// BTC amount
    #[serde(with = "rust_decimal::serde::str")]
    pub btc: Decimal,
}

/// Ripple deposit address
#[derive(Debug, Clone, Deserialize)]
pub struct RippleAddress {
    /// Address
    pub address: String,
}

//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::BitstampRestClient;
use crate::error::RestResult;
use crate::types::{OrderBook, Ticker, Transaction, TransactionWindow};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BitstampRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BitstampRestClient) -> Self {
        Self { client }
    }

    /// Get the current ticker
    ///
    /// Returns the last price, the 24-hour high/low and volume, and the best
    /// bid and ask.
    #[instrument(skip(self))]
    pub async fn ticker(&self) -> RestResult<Ticker> {
        debug!("Fetching ticker");
        self.client.public_request("ticker", &[]).await
    }

    /// Get the order book
    ///
    /// # Arguments
    /// * `group` - group orders with the same price into one level
    #[instrument(skip(self))]
    pub async fn order_book(&self, group: bool) -> RestResult<OrderBook> {
        let group = if group { "1" } else { "0" };
        debug!("Fetching order book");
        self.client.public_request("order_book", &[("group", group)]).await
    }

    /// Get recent public transactions, newest first
    ///
    /// The API takes the export window under the `hour` query key for every
    /// window size, `transactions/?hour=minute` included.
    #[instrument(skip(self))]
    pub async fn transactions(&self, window: TransactionWindow) -> RestResult<Vec<Transaction>> {
        debug!("Fetching transactions for the last {}", window);
        self.client
            .public_request("transactions", &[("hour", window.as_str())])
            .await
    }
}

//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::client::BitstampRestClient;
use crate::error::RestResult;
use crate::types::{Order, OrderParams};
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a BitstampRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a BitstampRestClient) -> Self {
        Self { client }
    }

    /// Place a buy limit order
    #[instrument(skip(self, order), fields(amount = %order.amount, price = %order.price))]
    pub async fn buy(&self, order: &OrderParams) -> RestResult<Order> {
        debug!("Placing buy order for {} at {}", order.amount, order.price);
        self.submit("buy", order).await
    }

    /// Place a sell limit order
    #[instrument(skip(self, order), fields(amount = %order.amount, price = %order.price))]
    pub async fn sell(&self, order: &OrderParams) -> RestResult<Order> {
        debug!("Placing sell order for {} at {}", order.amount, order.price);
        self.submit("sell", order).await
    }

    /// Cancel an open order
    ///
    /// Returns `true` if the order has been found and canceled.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<bool> {
        let id = order_id.to_string();
        debug!("Cancelling order {}", order_id);
        self.client.private_request("cancel_order", &[("id", id.as_str())]).await
    }

    async fn submit(&self, endpoint: &str, order: &OrderParams) -> RestResult<Order> {
        let amount = order.amount.to_string();
        let price = order.price.to_string();
        let params = [("amount", amount.as_str()), ("price", price.as_str())];

        self.client.private_request(endpoint, &params).await
    }
}

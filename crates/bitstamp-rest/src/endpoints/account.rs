//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::BitstampRestClient;
use crate::error::RestResult;
use crate::types::{Balance, Order, UserTransaction, UserTransactionsQuery};
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BitstampRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BitstampRestClient) -> Self {
        Self { client }
    }

    /// Get account balance
    ///
    /// Returns USD/BTC balances, amounts reserved in open orders, amounts
    /// available for trading, and the customer trading fee.
    #[instrument(skip(self))]
    pub async fn balance(&self) -> RestResult<Balance> {
        self.client.private_request("balance", &[]).await
    }

    /// Get user transaction history, paginated
    #[instrument(skip(self, query), fields(offset = query.offset, limit = query.limit))]
    pub async fn user_transactions(
        &self,
        query: &UserTransactionsQuery,
    ) -> RestResult<Vec<UserTransaction>> {
        let offset = query.offset.to_string();
        let limit = query.limit.to_string();
        let params = [
            ("offset", offset.as_str()),
            ("limit", limit.as_str()),
            ("sort", query.sort.as_str()),
        ];

        self.client.private_request("user_transactions", &params).await
    }

    /// Get open orders
    #[instrument(skip(self))]
    pub async fn open_orders(&self) -> RestResult<Vec<Order>> {
        self.client.private_request("open_orders", &[]).await
    }
}

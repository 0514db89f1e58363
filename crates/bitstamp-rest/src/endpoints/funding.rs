//! Funding endpoints for deposits, withdrawals, and bitstamp codes
//!
//! These endpoints require authentication.

use crate::client::BitstampRestClient;
use crate::error::RestResult;
use crate::types::{
    BitcoinWithdrawal, CodeInfo, RippleAddress, RippleWithdrawal, UnconfirmedDeposit,
    WithdrawalRequest,
};
use tracing::{debug, instrument};

/// Funding endpoints for deposits and withdrawals
pub struct FundingEndpoints<'a> {
    client: &'a BitstampRestClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a BitstampRestClient) -> Self {
        Self { client }
    }

    /// Get open withdrawal requests
    #[instrument(skip(self))]
    pub async fn withdrawal_requests(&self) -> RestResult<Vec<WithdrawalRequest>> {
        self.client.private_request("withdrawal_requests", &[]).await
    }

    /// Request a bitcoin withdrawal
    ///
    /// Returns `true` if successful.
    #[instrument(skip(self, withdrawal), fields(amount = %withdrawal.amount))]
    pub async fn bitcoin_withdrawal(&self, withdrawal: &BitcoinWithdrawal) -> RestResult<bool> {
        let amount = withdrawal.amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("address", withdrawal.address.as_str()),
        ];

        debug!("Withdrawing {} BTC", withdrawal.amount);
        self.client.private_request("bitcoin_withdrawal", &params).await
    }

    /// Get the bitcoin deposit address for the account
    #[instrument(skip(self))]
    pub async fn bitcoin_deposit_address(&self) -> RestResult<String> {
        self.client.private_request("bitcoin_deposit_address", &[]).await
    }

    /// Get unconfirmed bitcoin deposits
    #[instrument(skip(self))]
    pub async fn unconfirmed_btc(&self) -> RestResult<Vec<UnconfirmedDeposit>> {
        self.client.private_request("unconfirmed_btc", &[]).await
    }

    /// Request a Ripple withdrawal
    ///
    /// Returns `true` if successful.
    #[instrument(skip(self, withdrawal), fields(amount = %withdrawal.amount, currency = %withdrawal.currency))]
    pub async fn ripple_withdrawal(&self, withdrawal: &RippleWithdrawal) -> RestResult<bool> {
        let amount = withdrawal.amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("address", withdrawal.address.as_str()),
            ("currency", withdrawal.currency.as_str()),
        ];

        debug!("Withdrawing {} {}", withdrawal.amount, withdrawal.currency);
        self.client.private_request("ripple_withdrawal", &params).await
    }

    /// Get the Ripple deposit address for the account
    #[instrument(skip(self))]
    pub async fn ripple_address(&self) -> RestResult<RippleAddress> {
        self.client.private_request("ripple_address", &[]).await
    }

    /// Check the USD and BTC amounts carried by a bitstamp code
    #[instrument(skip(self, code))]
    pub async fn check_code(&self, code: &str) -> RestResult<CodeInfo> {
        self.client.private_request("check_code", &[("code", code)]).await
    }

    /// Redeem a bitstamp code into the account
    #[instrument(skip(self, code))]
    pub async fn redeem_code(&self, code: &str) -> RestResult<CodeInfo> {
        self.client.private_request("redeem_code", &[("code", code)]).await
    }
}

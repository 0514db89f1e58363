//! Main REST client implementation

use crate::auth::{Credentials, RequestSigner};
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{
    Balance, BitcoinWithdrawal, CodeInfo, Order, OrderBook, OrderParams, RippleAddress,
    RippleWithdrawal, Ticker, Transaction, TransactionWindow, UnconfirmedDeposit,
    UserTransaction, UserTransactionsQuery, WithdrawalRequest,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Default Bitstamp API base URL (public endpoints append a trailing slash)
const DEFAULT_BASE_URL: &str = "https://www.bitstamp.net/api/";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Form fields owned by the authentication layer. Caller-supplied parameters
/// with these names are dropped before the merge.
const RESERVED_FIELDS: [&str; 3] = ["key", "nonce", "signature"];

/// Bitstamp REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use bitstamp_rest::{BitstampRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitstampRestClient::new();
///     let ticker = client.ticker().await?;
///     println!("last: {}", ticker.last);
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitstampRestClient::with_credentials(creds);
///     let balance = auth_client.balance().await?;
///     println!("USD available: {}", balance.usd_available);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitstampRestClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl BitstampRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("bitstamp-rest/0.1.0"));

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http_client = builder.build().expect("Failed to create HTTP client");

        info!("Created Bitstamp REST client");

        Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // ========================================================================
    // Request Primitives
    // ========================================================================

    /// Issue a GET request to a public endpoint
    ///
    /// `params` are percent-encoded into the query string; the endpoint path
    /// gets the trailing slash the API expects.
    pub async fn public_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> RestResult<T> {
        let url = self.public_url(endpoint, params)?;

        debug!("GET {}", endpoint);

        let response = self.http_client.get(url).send().await?;
        let body = response.text().await?;

        decode_body(&body)
    }

    /// Issue a signed POST request to a private endpoint
    ///
    /// The form body carries `key`, `nonce`, and `signature` merged with the
    /// caller's parameters; the reserved fields always win on collision.
    pub async fn private_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> RestResult<T> {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        let url = self.private_url(endpoint)?;

        let signer = RequestSigner::new(credentials);
        let signature = signer.sign();

        let mut form: Vec<(&str, &str)> = vec![
            ("key", signer.api_key()),
            ("nonce", signer.nonce()),
            ("signature", &signature),
        ];
        form.extend(
            params
                .iter()
                .filter(|(name, _)| !RESERVED_FIELDS.contains(name))
                .copied(),
        );

        let body = serde_urlencoded::to_string(&form)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        debug!("POST {}", endpoint);

        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        let body = response.text().await?;

        decode_body(&body)
    }

    fn public_url(&self, endpoint: &str, params: &[(&str, &str)]) -> RestResult<Url> {
        if endpoint.is_empty() {
            return Err(RestError::InvalidParameter("empty endpoint name".to_string()));
        }

        let mut raw = format!("{}{}/", self.base_url, endpoint);
        if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            raw.push('?');
            raw.push_str(&query);
        }

        Url::parse(&raw).map_err(|e| RestError::InvalidParameter(format!("{}: {}", raw, e)))
    }

    fn private_url(&self, endpoint: &str) -> RestResult<Url> {
        if endpoint.is_empty() {
            return Err(RestError::InvalidParameter("empty endpoint name".to_string()));
        }

        let raw = format!("{}{}", self.base_url, endpoint);
        Url::parse(&raw).map_err(|e| RestError::InvalidParameter(format!("{}: {}", raw, e)))
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get the current ticker
    pub async fn ticker(&self) -> RestResult<Ticker> {
        self.market().ticker().await
    }

    /// Get the order book
    ///
    /// # Arguments
    /// * `group` - group orders with the same price
    pub async fn order_book(&self, group: bool) -> RestResult<OrderBook> {
        self.market().order_book(group).await
    }

    /// Get recent public transactions
    pub async fn transactions(&self, window: TransactionWindow) -> RestResult<Vec<Transaction>> {
        self.market().transactions(window).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(self))
    }

    /// Get account balance
    pub async fn balance(&self) -> RestResult<Balance> {
        self.account()?.balance().await
    }

    /// Get user transaction history
    pub async fn user_transactions(
        &self,
        query: &UserTransactionsQuery,
    ) -> RestResult<Vec<UserTransaction>> {
        self.account()?.user_transactions(query).await
    }

    /// Get open orders
    pub async fn open_orders(&self) -> RestResult<Vec<Order>> {
        self.account()?.open_orders().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(self))
    }

    /// Place a buy limit order
    pub async fn buy(&self, order: &OrderParams) -> RestResult<Order> {
        self.trading()?.buy(order).await
    }

    /// Place a sell limit order
    pub async fn sell(&self, order: &OrderParams) -> RestResult<Order> {
        self.trading()?.sell(order).await
    }

    /// Cancel an open order
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<bool> {
        self.trading()?.cancel_order(order_id).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(FundingEndpoints::new(self))
    }

    /// Get open withdrawal requests
    pub async fn withdrawal_requests(&self) -> RestResult<Vec<WithdrawalRequest>> {
        self.funding()?.withdrawal_requests().await
    }

    /// Request a bitcoin withdrawal
    pub async fn bitcoin_withdrawal(&self, withdrawal: &BitcoinWithdrawal) -> RestResult<bool> {
        self.funding()?.bitcoin_withdrawal(withdrawal).await
    }

    /// Get the bitcoin deposit address
    pub async fn bitcoin_deposit_address(&self) -> RestResult<String> {
        self.funding()?.bitcoin_deposit_address().await
    }

    /// Get unconfirmed bitcoin deposits
    pub async fn unconfirmed_btc(&self) -> RestResult<Vec<UnconfirmedDeposit>> {
        self.funding()?.unconfirmed_btc().await
    }

    /// Request a Ripple withdrawal
    pub async fn ripple_withdrawal(&self, withdrawal: &RippleWithdrawal) -> RestResult<bool> {
        self.funding()?.ripple_withdrawal(withdrawal).await
    }

    /// Get the Ripple deposit address
    pub async fn ripple_address(&self) -> RestResult<RippleAddress> {
        self.funding()?.ripple_address().await
    }

    /// Check the value of a bitstamp code
    pub async fn check_code(&self, code: &str) -> RestResult<CodeInfo> {
        self.funding()?.check_code(code).await
    }

    /// Redeem a bitstamp code
    pub async fn redeem_code(&self, code: &str) -> RestResult<CodeInfo> {
        self.funding()?.redeem_code(code).await
    }
}

impl Default for BitstampRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitstampRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitstampRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Decode a response body
///
/// An empty or non-JSON body is a protocol violation; a JSON object carrying
/// an `error` field is surfaced as [`RestError::Api`].
fn decode_body<T: DeserializeOwned>(body: &str) -> RestResult<T> {
    if body.trim().is_empty() {
        return Err(RestError::Parse("server returned invalid data".to_string()));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|_| RestError::Parse("server returned invalid data".to_string()))?;

    if let Some(error) = value.get("error") {
        let message = match error {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(RestError::Api { message });
    }

    serde_json::from_value(value).map_err(|e| RestError::Parse(e.to_string()))
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API base URL, must end with a slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Skip TLS certificate verification. Leave this off outside of tests
    /// against local mock servers.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Disable TLS certificate verification
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = BitstampRestClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://example.test/api/")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "https://example.test/api/");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_auth_required_error() {
        let client = BitstampRestClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_public_url_encodes_query() {
        let client = BitstampRestClient::new();
        let url = client.public_url("transactions", &[("hour", "minute")]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bitstamp.net/api/transactions/?hour=minute"
        );

        let url = client.public_url("echo", &[("q", "a&b=c d")]).unwrap();
        assert_eq!(url.query(), Some("q=a%26b%3Dc+d"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let client = BitstampRestClient::new();
        assert!(matches!(
            client.public_url("", &[]),
            Err(RestError::InvalidParameter(_))
        ));
        assert!(matches!(
            client.private_url(""),
            Err(RestError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_decode_body_rejects_invalid_data() {
        let err = decode_body::<serde_json::Value>("").unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));

        let err = decode_body::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));
    }

    #[test]
    fn test_decode_body_surfaces_api_error() {
        let err = decode_body::<serde_json::Value>(r#"{"error":"API key not found"}"#).unwrap_err();
        match err {
            RestError::Api { message } => assert_eq!(message, "API key not found"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_passes_values_through() {
        let value: serde_json::Value = decode_body(r#"{"last":"100.0"}"#).unwrap();
        assert_eq!(value["last"], "100.0");

        let ok: bool = decode_body("true").unwrap();
        assert!(ok);
    }
}

//! Authentication credentials for the Bitstamp API
//!
//! Implements the HMAC-SHA256 signing scheme required by Bitstamp's private
//! endpoints. The signature is computed over the concatenation
//! `nonce + client_id + api_key` and keyed by the account's API secret; the
//! server validates it by independent recomputation, so the procedure must
//! match byte for byte.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RestError, RestResult};

type HmacSha256 = Hmac<Sha256>;

/// Atomic nonce counter to ensure unique nonces even with rapid requests
static NONCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// API credentials for authenticated requests
///
/// The customer ID, API key, and API secret are issued together in the
/// account settings. The secret never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// Customer ID (numeric account identifier)
    client_id: String,
    /// API key (public)
    api_key: String,
    /// API secret (keys the request signature)
    api_secret: String,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `client_id` - Your Bitstamp customer ID
    /// * `api_key` - Your API key
    /// * `api_secret` - Your API secret
    ///
    /// The values are stored verbatim; nothing is validated here. Bad
    /// credentials fail only when the server rejects a signed request.
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITSTAMP_CLIENT_ID`, `BITSTAMP_API_KEY`, and
    /// `BITSTAMP_API_SECRET` from the environment.
    pub fn from_env() -> RestResult<Self> {
        let client_id = std::env::var("BITSTAMP_CLIENT_ID")
            .map_err(|_| RestError::EnvVarNotSet("BITSTAMP_CLIENT_ID".to_string()))?;
        let api_key = std::env::var("BITSTAMP_API_KEY")
            .map_err(|_| RestError::EnvVarNotSet("BITSTAMP_API_KEY".to_string()))?;
        let api_secret = std::env::var("BITSTAMP_API_SECRET")
            .map_err(|_| RestError::EnvVarNotSet("BITSTAMP_API_SECRET".to_string()))?;

        Ok(Self::new(client_id, api_key, api_secret))
    }

    /// Get the customer ID
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Generate a unique nonce for this request
    ///
    /// Nonces must be strictly increasing. We use millisecond timestamp
    /// plus an atomic counter to handle rapid successive requests; the wire
    /// format is a decimal string.
    pub fn generate_nonce() -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64;

        // Combine timestamp with counter for uniqueness
        let counter = NONCE_COUNTER.fetch_add(1, Ordering::SeqCst);
        format!("{}{:06}", timestamp, counter % 1_000_000)
    }

    /// Sign a request for Bitstamp's API
    ///
    /// Signature algorithm:
    /// 1. message = nonce + client_id + api_key (byte concatenation, no separators)
    /// 2. HMAC-SHA256(api_secret, message)
    /// 3. Base64 encode the raw digest (standard alphabet, no newlines)
    ///
    /// # Arguments
    /// * `nonce` - Unique nonce for this request
    ///
    /// # Returns
    /// Base64-encoded signature
    pub fn sign(&self, nonce: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(nonce.as_bytes());
        mac.update(self.client_id.as_bytes());
        mac.update(self.api_key.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building authenticated requests
///
/// Fixes one nonce at construction so the signature and the form fields of a
/// single request always agree.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            nonce: Credentials::generate_nonce(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request
    pub fn sign(&self) -> String {
        self.credentials.sign(&self.nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_generation() {
        let nonce1 = Credentials::generate_nonce();
        let nonce2 = Credentials::generate_nonce();
        assert_ne!(nonce1, nonce2);
    }

    #[test]
    fn test_nonce_is_numeric() {
        let nonce = Credentials::generate_nonce();
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_signing_known_answer() {
        // Vectors generated with an independent HMAC-SHA256 implementation
        // (Python's hmac/hashlib over the same concatenated message).
        let creds = Credentials::new("1234", "apikey123", "topsecret");
        assert_eq!(
            creds.sign("1389178593000000"),
            "ZNdqNn6BXgVGNSoZr3GDyNEMHxoNSuAGRkTZNFqKbmk="
        );

        let creds = Credentials::new("9021", "BSKEYXYZ", "hunter2");
        assert_eq!(
            creds.sign("1700000000000000001"),
            "Ut70ydArcZoJu78L4PqID0KFYKhYXTih5iXsGRD0E24="
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = Credentials::new("42", "key", "secret");
        let first = creds.sign("1616492376594");
        let second = creds.sign("1616492376594");
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_is_clean_base64() {
        let creds = Credentials::new("42", "key", "secret");
        let signature = creds.sign("1616492376594");

        assert!(!signature.contains('\n'));
        // Standard alphabet, not URL-safe
        assert!(!signature.contains('-'));
        assert!(!signature.contains('_'));
        assert!(BASE64.decode(&signature).is_ok());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("1234", "apikey123456", "super_secret_value");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_signer_uses_one_nonce() {
        let creds = Credentials::new("1234", "apikey123", "topsecret");
        let signer = RequestSigner::new(&creds);

        let nonce = signer.nonce().to_string();
        assert_eq!(signer.sign(), creds.sign(&nonce));
        assert_eq!(signer.nonce(), nonce);
    }
}

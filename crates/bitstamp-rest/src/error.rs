//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// API returned an error payload
    #[error("API error: {message}")]
    Api {
        /// Error message from the API
        message: String,
    },

    /// Response body was empty, not valid JSON, or did not match the
    /// expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters or URL construction failure
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

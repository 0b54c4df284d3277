//! Error types for the Alpha Vantage client layer

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to Alpha Vantage or decoding what it returns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key was configured on the client
    #[error("Alpha Vantage API key not set")]
    MissingApiKey,

    /// Configuration could not be loaded from the environment
    #[error("configuration error: {0}")]
    Env(String),

    /// Non-200 response from the API
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// Value of the `X-Request-Id` header, when the server sent one
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// HTTP 200 carrying an Alpha Vantage error document (bad key, quota note, ...)
    #[error("Alpha Vantage returned a message instead of data: {0}")]
    ApiMessage(String),

    /// Response body was not valid JSON, or did not match the expected shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Response body was not valid CSV, or a row did not match the expected shape
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Query string could not be encoded
    #[error(transparent)]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Transport failure in the reqwest client
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Anything else
    #[error("{0}")]
    Custom(String),
}

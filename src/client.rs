//! Main Alpha Vantage API client
use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::Request;

/// Default Alpha Vantage endpoint root. Queries go to `{base_url}query?...`.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";

/// The main Alpha Vantage API client.
///
/// Generic over the HTTP transport so that callers (and tests) can supply any
/// [`Request`] implementation. The crate root exposes an `AlphaVantage` alias
/// bound to the transport selected by the `hyper` / `reqwest` features.
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl<Client: Request> AlphaVantage<Client> {
    /// Create a client with a fresh transport, no API key and the default base URL.
    ///
    /// Set the key with [`with_key`](Self::with_key) before making requests.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client from an already loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_key(config.api_key.clone())
            .with_base_url(config.base_url.clone())
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avgearn::AlphaVantage;
    ///
    /// let client = AlphaVantage::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another endpoint root (a proxy or a local stub).
    ///
    /// A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the endpoint root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Build the full query URL for the given parameters, appending the API key.
    pub(crate) fn query_url(&self, params: &[(&str, &str)]) -> Result<String> {
        let api_key = self.api_key().ok_or(Error::MissingApiKey)?;

        let mut pairs = params.to_vec();
        pairs.push(("apikey", api_key));
        let query = serde_urlencoded::to_string(&pairs)?;

        Ok(format!("{}query?{}", self.base_url, query))
    }
}

impl<Client: Request> Default for AlphaVantage<Client> {
    fn default() -> Self {
        Self::new()
    }
}

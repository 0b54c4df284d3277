//! Process configuration, built once at start-up and passed down explicitly

use crate::client::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use crate::handler::HandlerOptions;
use crate::pipeline::PipelineOptions;

/// Target currency used when a request does not name one.
pub const DEFAULT_TARGET_CURRENCY: &str = "USD";

/// Address the server binds to when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Everything the service needs from its environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Alpha Vantage API key
    pub api_key: String,
    /// Alpha Vantage endpoint root
    pub base_url: String,
    /// Currency used when `targetCur` is absent
    pub default_target_currency: String,
    /// Whether to keep only the companies reporting in the month closest to today
    pub month_proximity: bool,
    /// Listen address for the HTTP server
    pub bind_addr: String,
}

impl Config {
    /// Configuration with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_target_currency: DEFAULT_TARGET_CURRENCY.to_string(),
            month_proximity: true,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `ALPHAVANTAGE_API_KEY` | yes | |
    /// | `ALPHAVANTAGE_URL` | no | `https://www.alphavantage.co/` |
    /// | `DEFAULT_TARGET_CURRENCY` | no | `USD` |
    /// | `MONTH_PROXIMITY` | no | `true` |
    /// | `BIND_ADDR` | no | `0.0.0.0:8080` |
    ///
    /// # Errors
    ///
    /// [`Error::MissingApiKey`] when no key is set, [`Error::Env`] when
    /// `MONTH_PROXIMITY` is not a boolean.
    #[cfg(feature = "dotenvy")]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_key = dotenvy::var("ALPHAVANTAGE_API_KEY").map_err(|_| Error::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Ok(base_url) = dotenvy::var("ALPHAVANTAGE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Ok(currency) = dotenvy::var("DEFAULT_TARGET_CURRENCY") {
            config = config.with_default_target_currency(currency);
        }
        if let Ok(flag) = dotenvy::var("MONTH_PROXIMITY") {
            config = config.with_month_proximity(parse_flag("MONTH_PROXIMITY", &flag)?);
        }
        if let Ok(addr) = dotenvy::var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        Ok(config)
    }

    /// Override the endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the currency used when `targetCur` is absent.
    pub fn with_default_target_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_target_currency = currency.into();
        self
    }

    /// Toggle the month-proximity filter.
    pub fn with_month_proximity(mut self, enabled: bool) -> Self {
        self.month_proximity = enabled;
        self
    }

    /// Options for [`handler::handle`](crate::handler::handle) derived from this configuration.
    pub fn handler_options(&self) -> HandlerOptions {
        HandlerOptions {
            default_target_currency: self.default_target_currency.clone(),
            pipeline: PipelineOptions {
                month_proximity: self.month_proximity,
                ..PipelineOptions::default()
            },
        }
    }
}

#[cfg_attr(not(feature = "dotenvy"), allow(dead_code))]
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Env(format!("{name} must be a boolean, got '{other}'"))),
    }
}

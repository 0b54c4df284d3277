//! Average upcoming earnings estimates from Alpha Vantage, converted to a target currency.
//!
//! # Quick Start
//!
//! ```no_run
//! use avgearn::{AlphaVantage, Config, handler};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("your_api_key");
//!     let client = AlphaVantage::from_config(&config);
//!
//!     let params = json!({ "cur": ["EUR"], "targetCur": "USD" });
//!     let response = handler::handle(&client, &config.handler_options(), Some(&params)).await;
//!     println!("{} {}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! The two Alpha Vantage endpoints the pipeline relies on are also usable on their own.
//! Each returns a request builder; call `.get()` to execute:
//!
//! ```no_run
//! use avgearn::AlphaVantage;
//! use avgearn::request::common::Horizon;
//! use avgearn::rest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AlphaVantage::default().with_key("your_api_key");
//!
//! // Raw CSV
//! let csv = rest::fundamentals::earnings_calendar(&client).get().await?;
//!
//! // Typed rows
//! let rows = rest::decoded::earnings_calendar(&client, Horizon::ThreeMonths).get().await?;
//!
//! // Typed exchange rate document
//! let rate = rest::decoded::exchange_rate(&client, "EUR", "USD").get().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client.
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** (default) - Adds [`Config::from_env`], which reads `.env` and the
//!   process environment via [`dotenvy`](https://docs.rs/dotenvy).
//!
//! - **`server`** - Builds the `avgearn-server` binary (axum).

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod processor;

pub use config::Config;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// The Alpha Vantage API client with the default HTTP client.
///
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - When only `hyper` feature is enabled (default): uses `HyperClient`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type AlphaVantage = client::AlphaVantage<reqwest::Client>;

/// The Alpha Vantage API client with the default HTTP client.
///
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - When only `hyper` feature is enabled (default): uses `HyperClient`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type AlphaVantage = client::AlphaVantage<request::HyperClient>;

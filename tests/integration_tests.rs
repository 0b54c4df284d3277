//! Integration tests against the live Alpha Vantage API
//!
//! These tests make real API calls and should be run sparingly to avoid
//! exhausting API quota. Run with:
//!
//! ```sh
//! cargo test --test integration_tests -- --ignored --test-threads=1
//! ```
//!
//! Ensure ALPHAVANTAGE_API_KEY is set in your environment or .env file.
#![cfg(any(feature = "hyper", feature = "reqwest"))]

use avgearn::handler;
use avgearn::pipeline;
use avgearn::request::common::Horizon;
use avgearn::rest;
use avgearn::{AlphaVantage, Config, Result};
use serde_json::json;

/// Helper to initialize the configuration from environment
fn setup() -> Result<Config> {
    dotenvy::dotenv().ok();
    std::env::var("ALPHAVANTAGE_API_KEY")
        .map(Config::new)
        .map_err(|_| {
            avgearn::Error::Custom("ALPHAVANTAGE_API_KEY not found. Set it in .env or environment.".to_string())
        })
}

#[tokio::test]
#[ignore]
async fn test_earnings_calendar_raw() {
    let config = setup().expect("Failed to initialize client");
    let client = AlphaVantage::from_config(&config);

    let result = rest::fundamentals::earnings_calendar(&client)
        .horizon(Horizon::ThreeMonths)
        .get()
        .await;

    assert!(result.is_ok(), "Failed to fetch earnings calendar: {:?}", result.err());

    let csv = result.unwrap();
    assert!(
        csv.starts_with("symbol,name,reportDate,fiscalDateEnding,estimate,currency"),
        "Response should be the earnings calendar CSV, got:\n{}",
        &csv[..csv.len().min(300)]
    );
}

#[tokio::test]
#[ignore]
async fn test_earnings_calendar_records() {
    let config = setup().expect("Failed to initialize client");
    let client = AlphaVantage::from_config(&config);

    let records = rest::decoded::earnings_calendar(&client, Horizon::ThreeMonths)
        .get()
        .await
        .expect("Failed to fetch earnings calendar");

    assert!(!records.is_empty(), "Calendar should list upcoming reports");
    assert!(records.iter().all(|r| r.symbol.is_some()), "Every row should carry a symbol");
}

#[tokio::test]
#[ignore]
async fn test_exchange_rate() {
    let config = setup().expect("Failed to initialize client");
    let client = AlphaVantage::from_config(&config);

    let rate = pipeline::resolve_exchange_rate(&client, "EUR", "USD")
        .await
        .expect("Failed to resolve exchange rate");

    assert!(rate.rate > 0.0, "EUR/USD should be positive, got {}", rate.rate);
}

#[tokio::test]
#[ignore]
async fn test_average_earnings_handler() {
    let config = setup().expect("Failed to initialize client");
    let client = AlphaVantage::from_config(&config);

    let params = json!({ "cur": ["USD"], "targetCur": "EUR" });
    let response = handler::handle(&client, &config.handler_options(), Some(&params)).await;

    assert_eq!(response.status_code, 200, "Unexpected response: {}", response.body);
    assert!(response.body["averageEarnings"].is_number());
}

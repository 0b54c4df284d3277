//! Foreign exchange endpoints returning raw JSON strings

use crate::client::AlphaVantage;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::forex::CurrencyExchangeRate;

/// Get the realtime exchange rate between two currencies
///
/// Returns a request builder that will return results as raw JSON string.
pub fn exchange_rate<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    from_currency: impl Into<String>,
    to_currency: impl Into<String>,
) -> CurrencyExchangeRate<'a, Client, Raw> {
    CurrencyExchangeRate::new(client, from_currency, to_currency)
}

#[cfg(all(test, feature = "dotenvy", any(feature = "hyper", feature = "reqwest")))]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    #[ignore]
    async fn test_exchange_rate() {
        let config = Config::from_env().expect("Make sure ALPHAVANTAGE_API_KEY is set in .env file");
        let client = crate::AlphaVantage::from_config(&config);
        let result = exchange_rate(&client, "EUR", "USD").get().await;
        assert!(result.is_ok(), "Failed to fetch exchange rate: {result:?}");
    }
}

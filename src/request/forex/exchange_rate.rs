use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::model::RealtimeExchangeRate;
use crate::processor::{Decoder, Processor, Raw};
use crate::request::Request;

/// Realtime currency exchange rate request builder
pub struct CurrencyExchangeRate<'a, Client: Request, P: Processor = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Currency to convert from (e.g., EUR)
    pub from_currency: String,
    /// Currency to convert to (e.g., USD)
    pub to_currency: String,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> CurrencyExchangeRate<'a, C, Raw> {
    /// Create new exchange rate request (returns raw JSON by default)
    pub fn new(
        client: &'a AlphaVantage<C>,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
    ) -> Self {
        Self {
            client,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> CurrencyExchangeRate<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + Send + 'a {
        Execute::get(self)
    }

    /// Convert to typed output
    pub fn as_decoded(self) -> CurrencyExchangeRate<'a, C, Decoder<RealtimeExchangeRate>> {
        CurrencyExchangeRate {
            client: self.client,
            from_currency: self.from_currency,
            to_currency: self.to_currency,
            processor: Decoder::new(),
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for CurrencyExchangeRate<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.client.query_url(&[
            ("function", "CURRENCY_EXCHANGE_RATE"),
            ("from_currency", self.from_currency.as_str()),
            ("to_currency", self.to_currency.as_str()),
        ])?;
        tracing::debug!(from = %self.from_currency, to = %self.to_currency, "requesting exchange rate");

        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

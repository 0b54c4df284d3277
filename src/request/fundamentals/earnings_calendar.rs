use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::model::EarningsRecord;
use crate::processor::{Processor, Raw, Table};
use crate::request::Request;
use crate::request::common::Horizon;

/// Earnings calendar request builder
///
/// The endpoint answers with CSV: one row per company expected to report within
/// the horizon.
pub struct EarningsCalendar<'a, Client: Request, P: Processor = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Restrict the calendar to one symbol
    pub symbol: Option<String>,
    /// How far ahead to look
    pub horizon: Option<Horizon>,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> EarningsCalendar<'a, C, Raw> {
    /// Create new earnings calendar request (returns the raw CSV by default)
    pub fn new(client: &'a AlphaVantage<C>) -> Self {
        Self {
            client,
            symbol: None,
            horizon: None,
            processor: Raw,
        }
    }
}

// Processor conversion and builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> EarningsCalendar<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + Send + 'a {
        Execute::get(self)
    }

    /// Set horizon
    pub fn horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Only return the calendar entry for `symbol`
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Convert to typed output, one [`EarningsRecord`] per CSV row
    pub fn as_records(self) -> EarningsCalendar<'a, C, Table<EarningsRecord>> {
        EarningsCalendar {
            client: self.client,
            symbol: self.symbol,
            horizon: self.horizon,
            processor: Table::new(),
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for EarningsCalendar<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let horizon = self.horizon.map(|h| h.to_string());

        let mut params = vec![("function", "EARNINGS_CALENDAR")];
        if let Some(symbol) = self.symbol.as_deref() {
            params.push(("symbol", symbol));
        }
        if let Some(horizon) = horizon.as_deref() {
            params.push(("horizon", horizon));
        }

        let url = self.client.query_url(&params)?;
        tracing::debug!(horizon = ?self.horizon, symbol = ?self.symbol, "requesting earnings calendar");

        // Make request using Request trait
        let response = self.client.client().get(&url).await;

        // Process using associated Processor type
        self.processor.process(response)
    }
}

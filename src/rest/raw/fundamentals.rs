//! Fundamental data endpoints returning raw CSV strings

use crate::client::AlphaVantage;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::fundamentals::EarningsCalendar;

/// Get the calendar of upcoming earnings reports
///
/// Returns a request builder that will return the CSV body as-is.
///
/// # Example
/// ```no_run
/// # use avgearn::AlphaVantage;
/// # use avgearn::request::common::Horizon;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let csv = avgearn::rest::fundamentals::earnings_calendar(&client)
///     .horizon(Horizon::ThreeMonths)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn earnings_calendar<Client: Request>(client: &AlphaVantage<Client>) -> EarningsCalendar<'_, Client, Raw> {
    EarningsCalendar::new(client)
}

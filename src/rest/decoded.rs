//! Endpoint constructors returning typed values

use crate::client::AlphaVantage;
use crate::model::{EarningsRecord, RealtimeExchangeRate};
use crate::processor::{Decoder, Table};
use crate::request::Request;
use crate::request::common::Horizon;
use crate::request::forex::CurrencyExchangeRate;
use crate::request::fundamentals::EarningsCalendar;

/// Upcoming earnings within `horizon`, one [`EarningsRecord`] per company
pub fn earnings_calendar<Client: Request>(
    client: &AlphaVantage<Client>,
    horizon: Horizon,
) -> EarningsCalendar<'_, Client, Table<EarningsRecord>> {
    EarningsCalendar::new(client).horizon(horizon).as_records()
}

/// Realtime exchange rate between two currencies, decoded
pub fn exchange_rate<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    from_currency: impl Into<String>,
    to_currency: impl Into<String>,
) -> CurrencyExchangeRate<'a, Client, Decoder<RealtimeExchangeRate>> {
    CurrencyExchangeRate::new(client, from_currency, to_currency).as_decoded()
}

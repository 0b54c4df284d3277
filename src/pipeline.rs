//! Average earnings pipeline
//!
//! Fetch the earnings calendar, narrow it down, convert every estimate with one
//! live exchange rate and average the result:
//!
//! 1. `EARNINGS_CALENDAR` (CSV) ⇒ [`EarningsRecord`]s
//! 2. [`filter::nearest_month`] when [`PipelineOptions::month_proximity`] is set
//! 3. [`filter::by_currencies`]
//! 4. `CURRENCY_EXCHANGE_RATE` for the currency picked by [`SourceCurrencyPolicy`]
//! 5. [`aggregate::average_converted`]
//!
//! Nothing is cached between calls.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::client::AlphaVantage;
use crate::error::Error;
use crate::model::{EarningsRecord, ExchangeRate, parse_decimal};
use crate::request::Request;
use crate::request::common::Horizon;
use crate::rest::decoded;

pub mod aggregate;
pub mod filter;

/// Failures of the pipeline after input validation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Earnings calendar or exchange rate could not be fetched or decoded
    #[error("upstream request failed: {0}")]
    UpstreamFetch(#[from] Error),

    /// Filtering left no record to take a source currency from
    #[error("no earnings records left after filtering")]
    NoRecords,

    /// The record chosen for the source currency has none
    #[error("earnings record has no currency to convert from")]
    MissingSourceCurrency,

    /// The exchange rate is missing or not a finite number
    #[error("invalid exchange rate: {0:?}")]
    InvalidExchangeRate(Option<String>),

    /// No remaining record has a numeric estimate
    #[error("no valid estimate values found")]
    NoValidEstimates,

    /// The converted estimates overflowed
    #[error("average of converted estimates is not finite")]
    NonFiniteAverage,
}

/// Which currency the batch is converted from.
///
/// A single rate is fetched per invocation and applied to every record, so a
/// batch mixing currencies is converted as if it were all in the chosen one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceCurrencyPolicy {
    /// Currency of the first record left after filtering
    #[default]
    FirstRecord,
}

impl SourceCurrencyPolicy {
    /// Pick the source currency for `records`.
    pub fn source_currency<'r>(&self, records: &[&'r EarningsRecord]) -> Result<&'r str, PipelineError> {
        match self {
            SourceCurrencyPolicy::FirstRecord => {
                let first: &'r EarningsRecord = records.first().copied().ok_or(PipelineError::NoRecords)?;
                first.currency.as_deref().ok_or(PipelineError::MissingSourceCurrency)
            }
        }
    }
}

/// Pipeline settings that do not vary per request.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Keep only the companies reporting in the month closest to today
    pub month_proximity: bool,
    /// Earnings calendar horizon
    pub horizon: Horizon,
    /// How the source currency of the batch is chosen
    pub source_currency_policy: SourceCurrencyPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            month_proximity: true,
            horizon: Horizon::ThreeMonths,
            source_currency_policy: SourceCurrencyPolicy::FirstRecord,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageEarnings {
    /// Mean converted estimate
    pub average_earnings: f64,
}

/// Run the whole pipeline for one request.
///
/// `currencies` restricts the records to those currencies (`None` keeps all),
/// `today` anchors the month-proximity filter.
pub async fn average_earnings<C: Request>(
    client: &AlphaVantage<C>,
    currencies: Option<&[String]>,
    target_currency: &str,
    options: &PipelineOptions,
    today: NaiveDate,
) -> Result<AverageEarnings, PipelineError> {
    let records = decoded::earnings_calendar(client, options.horizon).get().await?;
    debug!(count = records.len(), "fetched earnings calendar");

    let fetched: Vec<&EarningsRecord> = records.iter().collect();
    let dated = if options.month_proximity {
        let kept = filter::nearest_month(&fetched, today);
        debug!(count = kept.len(), %today, "kept records nearest to the current month");
        kept
    } else {
        fetched
    };

    let selected = filter::by_currencies(&dated, currencies);
    debug!(count = selected.len(), ?currencies, "kept records in requested currencies");

    let source = options.source_currency_policy.source_currency(&selected)?;
    let rate = resolve_exchange_rate(client, source, target_currency).await?;

    let average_earnings = aggregate::average_converted(&selected, &rate)?;
    Ok(AverageEarnings { average_earnings })
}

/// Fetch the spot rate from `from` to `to`.
pub async fn resolve_exchange_rate<C: Request>(
    client: &AlphaVantage<C>,
    from: &str,
    to: &str,
) -> Result<ExchangeRate, PipelineError> {
    let document = decoded::exchange_rate(client, from, to).get().await?;

    let text = document.rate_text();
    let rate = text
        .and_then(parse_decimal)
        .ok_or_else(|| PipelineError::InvalidExchangeRate(text.map(str::to_owned)))?;

    if let Some(quote) = &document.quote {
        debug!(from, to, rate, refreshed = ?quote.last_refreshed, "resolved exchange rate");
    }

    Ok(ExchangeRate {
        from: from.to_owned(),
        to: to.to_owned(),
        rate,
    })
}

//! Records decoded from Alpha Vantage responses

use serde::{Deserialize, Serialize};

/// One row of the `EARNINGS_CALENDAR` CSV.
///
/// Every column is optional: rows are decoded by header name and the provider
/// leaves cells empty (most often `estimate`) for companies without coverage.
/// Records are never modified after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EarningsRecord {
    /// Ticker symbol
    pub symbol: Option<String>,
    /// Company name
    pub name: Option<String>,
    /// Expected report date, `YYYY-MM-DD`
    pub report_date: Option<String>,
    /// End of the fiscal period being reported, `YYYY-MM-DD`
    pub fiscal_date_ending: Option<String>,
    /// EPS estimate as sent by the provider
    pub estimate: Option<String>,
    /// Currency the estimate is denominated in
    pub currency: Option<String>,
}

impl EarningsRecord {
    /// The estimate as a finite number, or `None` when it is missing or malformed.
    pub fn estimate_value(&self) -> Option<f64> {
        self.estimate.as_deref().and_then(parse_decimal)
    }

    /// The report date, when present and well formed.
    pub fn report_date_value(&self) -> Option<chrono::NaiveDate> {
        let text = self.report_date.as_deref()?;
        chrono::NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
    }
}

/// `CURRENCY_EXCHANGE_RATE` response document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RealtimeExchangeRate {
    /// The quote; absent when the provider did not return one
    #[serde(rename = "Realtime Currency Exchange Rate")]
    pub quote: Option<ExchangeRateQuote>,
}

/// Body of a realtime exchange rate quote. Only the rate itself is required downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeRateQuote {
    /// Source currency code
    #[serde(rename = "1. From_Currency Code")]
    pub from_currency: Option<String>,
    /// Target currency code
    #[serde(rename = "3. To_Currency Code")]
    pub to_currency: Option<String>,
    /// Spot rate as text
    #[serde(rename = "5. Exchange Rate")]
    pub exchange_rate: Option<String>,
    /// Timestamp of the quote
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: Option<String>,
    /// Bid price as text
    #[serde(rename = "8. Bid Price")]
    pub bid_price: Option<String>,
    /// Ask price as text
    #[serde(rename = "9. Ask Price")]
    pub ask_price: Option<String>,
}

impl RealtimeExchangeRate {
    /// The textual rate, if the document carries one.
    pub fn rate_text(&self) -> Option<&str> {
        self.quote.as_ref()?.exchange_rate.as_deref()
    }
}

/// A spot rate resolved for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    /// Source currency code
    pub from: String,
    /// Target currency code
    pub to: String,
    /// Units of `to` per unit of `from`
    pub rate: f64,
}

/// Parse a provider decimal. Only finite values are accepted.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_rejects_non_finite_and_garbage() {
        assert_eq!(parse_decimal(" 1.10 "), Some(1.1));
        assert_eq!(parse_decimal("-0.25"), Some(-0.25));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("N/A"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn report_date_requires_iso_format() {
        let mut record = EarningsRecord {
            report_date: Some("2026-10-30".into()),
            ..Default::default()
        };
        assert_eq!(record.report_date_value(), chrono::NaiveDate::from_ymd_opt(2026, 10, 30));

        record.report_date = Some("30/10/2026".into());
        assert_eq!(record.report_date_value(), None);
    }

    #[test]
    fn decodes_realtime_exchange_rate_document() {
        let doc: RealtimeExchangeRate = serde_json::from_str(
            r#"{
                "Realtime Currency Exchange Rate": {
                    "1. From_Currency Code": "EUR",
                    "2. From_Currency Name": "Euro",
                    "3. To_Currency Code": "USD",
                    "4. To_Currency Name": "United States Dollar",
                    "5. Exchange Rate": "1.08420000",
                    "6. Last Refreshed": "2026-10-16 21:55:01",
                    "7. Time Zone": "UTC",
                    "8. Bid Price": "1.08410000",
                    "9. Ask Price": "1.08430000"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.rate_text(), Some("1.08420000"));
        assert_eq!(doc.quote.unwrap().from_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn missing_quote_has_no_rate() {
        let doc: RealtimeExchangeRate = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.rate_text(), None);
    }
}

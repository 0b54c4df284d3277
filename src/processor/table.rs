//! Table processor for the CSV endpoints
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::processor::{Processor, ensure_ok, provider_message};
use crate::response::Response;

/// Table processor that parses a CSV body into rows of `T`.
///
/// The first line is the header and columns are matched to fields by name, so
/// extra columns are ignored and missing ones leave `Option` fields empty.
pub struct Table<T> {
    row: PhantomData<fn() -> T>,
}

impl<T> Table<T> {
    /// Create a table processor for rows of `T`
    pub fn new() -> Self {
        Self { row: PhantomData }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Table<T> {
    type Output = Vec<T>;

    fn process<R: Response>(&self, response: Result<R>) -> Result<Vec<T>> {
        let resp = response?;
        ensure_ok(&resp)?;

        if let Some(message) = provider_message(resp.body()) {
            return Err(Error::ApiMessage(message));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(resp.body().as_bytes());

        let rows = reader.deserialize().collect::<std::result::Result<Vec<T>, csv::Error>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EarningsRecord;
    use crate::request::HttpResponse;

    fn parse(body: &str) -> Result<Vec<EarningsRecord>> {
        Table::<EarningsRecord>::new().process(Ok(HttpResponse::new(200, body)))
    }

    #[test]
    fn parses_rows_by_header() {
        let rows = parse(
            "symbol,name,reportDate,fiscalDateEnding,estimate,currency,timeOfTheDay\r\n\
             A,Agilent Technologies Inc,2024-11-25,2024-10-31,1.41,USD,post-market\r\n\
             AAPL,Apple Inc,2024-10-31,2024-09-30,,USD,post-market\r\n",
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol.as_deref(), Some("A"));
        assert_eq!(rows[0].report_date.as_deref(), Some("2024-11-25"));
        assert_eq!(rows[0].estimate.as_deref(), Some("1.41"));
        assert_eq!(rows[1].estimate, None);
    }

    #[test]
    fn tolerates_missing_columns_and_short_rows() {
        let rows = parse("currency,estimate\nEUR,2.5\nGBP\n\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol, None);
        assert_eq!(rows[0].currency.as_deref(), Some("EUR"));
        assert_eq!(rows[1].currency.as_deref(), Some("GBP"));
        assert_eq!(rows[1].estimate, None);
    }

    #[test]
    fn header_only_body_yields_no_rows() {
        assert!(parse("symbol,name,reportDate,fiscalDateEnding,estimate,currency\n").unwrap().is_empty());
    }

    #[test]
    fn error_document_is_not_parsed_as_csv() {
        let err = parse(r#"{"Information": "The **demo** API key is for demo purposes only."}"#).unwrap_err();
        assert!(matches!(err, Error::ApiMessage(_)));
    }
}

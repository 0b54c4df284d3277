//! Response processors
//!
//! A processor turns the raw HTTP response of an endpoint into the value the
//! request builder returns: the body as-is ([`Raw`]), CSV rows ([`Table`]) or a
//! typed JSON document ([`Decoder`]).

use crate::error::{Error, Result};
use crate::response::Response;

pub mod decoder;
pub mod table;

pub use decoder::Decoder;
pub use table::Table;

/// Keys Alpha Vantage uses for error and throttling documents.
const MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Converts a response into the output of a request.
pub trait Processor: Send + Sync {
    /// The value produced from a successful response
    type Output;

    /// Process the response (or the transport error) of a request
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Raw processor, returns the response body unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = response?;
        ensure_ok(&resp)?;
        Ok(resp.body().to_owned())
    }
}

/// Fail with [`Error::ApiError`] unless the response is `200 OK`.
fn ensure_ok<R: Response>(resp: &R) -> Result<()> {
    if resp.is_ok() {
        return Ok(());
    }
    Err(Error::ApiError {
        request_id: resp.request_id().map(str::to_owned),
        status: resp.status(),
        message: resp.body().to_owned(),
    })
}

/// Extract the message of an Alpha Vantage error document, if `body` is one.
///
/// The API answers invalid keys, bad parameters and rate limiting with `200 OK`
/// and a single-key JSON object instead of data.
pub(crate) fn provider_message(body: &str) -> Option<String> {
    let trimmed = body.trim_start();
    if !trimmed.starts_with('{') {
        return None;
    }
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(trimmed).ok()?;
    MESSAGE_KEYS
        .iter()
        .find_map(|key| document.get(*key))
        .map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpResponse;

    #[test]
    fn raw_returns_body_on_success() {
        let body = Raw.process(Ok(HttpResponse::new(200, "symbol,name\n"))).unwrap();
        assert_eq!(body, "symbol,name\n");
    }

    #[test]
    fn raw_reports_status_and_request_id() {
        let response = HttpResponse::new(503, "busy").with_request_id("abc");
        match Raw.process(Ok(response)) {
            Err(Error::ApiError {
                request_id,
                status,
                message,
            }) => {
                assert_eq!(request_id.as_deref(), Some("abc"));
                assert_eq!(status, 503);
                assert_eq!(message, "busy");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn provider_message_detects_error_documents() {
        assert_eq!(
            provider_message(r#"{"Error Message": "Invalid API call."}"#).as_deref(),
            Some("Invalid API call.")
        );
        assert!(provider_message(r#"{"Note": "Thank you for using Alpha Vantage!"}"#).is_some());
        assert!(provider_message("symbol,name,reportDate\n").is_none());
        assert!(provider_message(r#"{"Realtime Currency Exchange Rate": {}}"#).is_none());
    }
}

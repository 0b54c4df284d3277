//! Decoder processor for the JSON endpoints
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::processor::{Processor, ensure_ok, provider_message};
use crate::response::Response;

/// Decoder processor that deserializes a JSON body into `T`.
pub struct Decoder<T> {
    document: PhantomData<fn() -> T>,
}

impl<T> Decoder<T> {
    /// Create a decoder for documents of type `T`
    pub fn new() -> Self {
        Self { document: PhantomData }
    }
}

impl<T> Default for Decoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Decoder<T> {
    type Output = T;

    fn process<R: Response>(&self, response: Result<R>) -> Result<T> {
        let resp = response?;
        ensure_ok(&resp)?;

        if let Some(message) = provider_message(resp.body()) {
            return Err(Error::ApiMessage(message));
        }

        Ok(serde_json::from_str(resp.body())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RealtimeExchangeRate;
    use crate::request::HttpResponse;

    fn decode(status: u16, body: &str) -> Result<RealtimeExchangeRate> {
        Decoder::<RealtimeExchangeRate>::new().process(Ok(HttpResponse::new(status, body)))
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(matches!(decode(200, "<html>oops</html>"), Err(Error::Json(_))));
    }

    #[test]
    fn reports_error_document() {
        let err = decode(200, r#"{"Error Message": "Invalid API call."}"#).unwrap_err();
        assert!(matches!(err, Error::ApiMessage(m) if m == "Invalid API call."));
    }

    #[test]
    fn forwards_transport_errors() {
        let err = Decoder::<RealtimeExchangeRate>::new()
            .process::<HttpResponse>(Err(Error::Custom("connection reset".into())))
            .unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
    }
}

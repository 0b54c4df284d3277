//! Request handling: validate the query, run the pipeline, shape the response
//!
//! The handler is transport-agnostic. Query parameters arrive as a JSON object
//! (the `queryStringParameters` of an API-Gateway-style event, or one built from
//! a URL with [`params_from_query`]) and the result is a status code plus a JSON
//! body.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{error, info, warn};

use crate::client::AlphaVantage;
use crate::config::DEFAULT_TARGET_CURRENCY;
use crate::pipeline::{self, AverageEarnings, PipelineOptions};
use crate::request::Request;

/// Body message of every failure past validation.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Rejected query parameters. The `Display` text is the message returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `cur` is present but not an array of strings
    #[error("cur parameter must be an array")]
    CurNotArray,
    /// `targetCur` is present but not a string
    #[error("targetCur parameter must be a string")]
    TargetCurNotString,
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AverageQuery {
    /// Currencies to keep; `None` keeps every record
    pub currencies: Option<Vec<String>>,
    /// Currency to convert the estimates into
    pub target_currency: String,
}

/// Handler settings that do not vary per request.
#[derive(Debug, Clone)]
pub struct HandlerOptions {
    /// Currency used when `targetCur` is absent
    pub default_target_currency: String,
    /// Pipeline settings
    pub pipeline: PipelineOptions,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            default_target_currency: DEFAULT_TARGET_CURRENCY.to_string(),
            pipeline: PipelineOptions::default(),
        }
    }
}

/// Status code and JSON body to send back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerResponse {
    /// HTTP status code
    pub status_code: u16,
    /// JSON body
    pub body: Value,
}

impl HandlerResponse {
    fn ok(result: AverageEarnings) -> Self {
        Self {
            status_code: 200,
            body: json!({ "averageEarnings": result.average_earnings }),
        }
    }

    fn bad_request(err: &ValidationError) -> Self {
        Self {
            status_code: 400,
            body: json!({ "error": err.to_string() }),
        }
    }

    fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: json!({ "error": INTERNAL_SERVER_ERROR }),
        }
    }

    /// API-Gateway proxy result: `{"statusCode": .., "body": "<json text>"}`.
    pub fn into_gateway(self) -> Value {
        json!({
            "statusCode": self.status_code,
            "body": self.body.to_string(),
        })
    }
}

/// Check the shape of `cur` and `targetCur`.
///
/// A missing parameter object, or one that is not a JSON object, counts as
/// empty. JSON `null` counts as absent for both parameters. `cur` is checked
/// first. An absent `targetCur` falls back to `default_target_currency`.
pub fn validate(params: Option<&Value>, default_target_currency: &str) -> Result<AverageQuery, ValidationError> {
    let params = params.and_then(Value::as_object);
    let param = |name: &str| params.and_then(|p| p.get(name)).filter(|v| !v.is_null());

    let currencies = match param("cur") {
        None => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .ok_or(ValidationError::CurNotArray)?,
        ),
        Some(_) => return Err(ValidationError::CurNotArray),
    };

    let target_currency = match param("targetCur") {
        None => default_target_currency.to_owned(),
        Some(Value::String(code)) => code.clone(),
        Some(_) => return Err(ValidationError::TargetCurNotString),
    };

    Ok(AverageQuery {
        currencies,
        target_currency,
    })
}

/// Handle one request, with `today` taken from the system clock.
pub async fn handle<C: Request>(
    client: &AlphaVantage<C>,
    options: &HandlerOptions,
    params: Option<&Value>,
) -> HandlerResponse {
    handle_on(client, options, params, Utc::now().date_naive()).await
}

/// Handle one request as if it were `today`.
pub async fn handle_on<C: Request>(
    client: &AlphaVantage<C>,
    options: &HandlerOptions,
    params: Option<&Value>,
    today: chrono::NaiveDate,
) -> HandlerResponse {
    let query = match validate(params, &options.default_target_currency) {
        Ok(query) => query,
        Err(err) => {
            warn!(%err, "rejected request");
            return HandlerResponse::bad_request(&err);
        }
    };

    let result = pipeline::average_earnings(
        client,
        query.currencies.as_deref(),
        &query.target_currency,
        &options.pipeline,
        today,
    )
    .await;

    match result {
        Ok(result) => {
            info!(
                target_currency = %query.target_currency,
                average = result.average_earnings,
                "computed average earnings"
            );
            HandlerResponse::ok(result)
        }
        Err(err) => {
            error!(error = %err, "failed to compute average earnings");
            HandlerResponse::internal_error()
        }
    }
}

/// Handle an API-Gateway-style event, reading its `queryStringParameters`.
pub async fn handle_event<C: Request>(client: &AlphaVantage<C>, options: &HandlerOptions, event: &Value) -> HandlerResponse {
    handle(client, options, event.get("queryStringParameters")).await
}

/// Build the parameter object from a URL query string.
///
/// `cur[]=A&cur[]=B` and repeated `cur=A&cur=B` both produce an array; a single
/// `cur=A` stays a plain string. For any other key the last value wins.
pub fn params_from_query(query: &str) -> Result<Value, serde_urlencoded::de::Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

    let mut bracketed = false;
    let mut currencies = Vec::new();
    let mut params = Map::new();

    for (key, value) in pairs {
        match key.as_str() {
            "cur[]" => {
                bracketed = true;
                currencies.push(Value::String(value));
            }
            "cur" => currencies.push(Value::String(value)),
            _ => {
                params.insert(key, Value::String(value));
            }
        }
    }

    match currencies.len() {
        0 => {}
        1 if !bracketed => {
            params.insert("cur".to_string(), currencies.remove(0));
        }
        _ => {
            params.insert("cur".to_string(), Value::Array(currencies));
        }
    }

    Ok(Value::Object(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(params: Value) -> Result<AverageQuery, ValidationError> {
        validate(Some(&params), "USD")
    }

    #[test]
    fn accepts_array_and_string() {
        let query = check(json!({ "cur": ["EUR", "GBP"], "targetCur": "JPY" })).unwrap();
        assert_eq!(query.currencies, Some(vec!["EUR".to_string(), "GBP".to_string()]));
        assert_eq!(query.target_currency, "JPY");
    }

    #[test]
    fn absent_parameters_use_defaults() {
        let query = validate(None, "USD").unwrap();
        assert_eq!(query.currencies, None);
        assert_eq!(query.target_currency, "USD");

        let query = check(json!({ "cur": null, "targetCur": null })).unwrap();
        assert_eq!(query.currencies, None);
        assert_eq!(query.target_currency, "USD");

        let query = validate(Some(&json!({})), "CHF").unwrap();
        assert_eq!(query.target_currency, "CHF");
    }

    #[test]
    fn bare_string_cur_is_rejected_whatever_target() {
        assert_eq!(check(json!({ "cur": "EUR" })), Err(ValidationError::CurNotArray));
        assert_eq!(check(json!({ "cur": "EUR", "targetCur": 5 })), Err(ValidationError::CurNotArray));
        assert_eq!(check(json!({ "cur": ["EUR", 3] })), Err(ValidationError::CurNotArray));
        assert_eq!(check(json!({ "cur": { "0": "EUR" } })), Err(ValidationError::CurNotArray));
    }

    #[test]
    fn non_string_target_is_rejected() {
        assert_eq!(check(json!({ "targetCur": ["USD"] })), Err(ValidationError::TargetCurNotString));
        assert_eq!(check(json!({ "cur": [], "targetCur": 1 })), Err(ValidationError::TargetCurNotString));
    }

    #[test]
    fn validation_messages_match_the_public_contract() {
        assert_eq!(ValidationError::CurNotArray.to_string(), "cur parameter must be an array");
        assert_eq!(
            ValidationError::TargetCurNotString.to_string(),
            "targetCur parameter must be a string"
        );
    }

    #[test]
    fn gateway_body_is_json_text() {
        let response = HandlerResponse::bad_request(&ValidationError::CurNotArray).into_gateway();
        assert_eq!(response["statusCode"], 400);
        assert_eq!(response["body"], r#"{"error":"cur parameter must be an array"}"#);
    }

    #[test]
    fn query_string_arrays() {
        assert_eq!(
            params_from_query("cur[]=EUR&cur[]=GBP&targetCur=USD").unwrap(),
            json!({ "cur": ["EUR", "GBP"], "targetCur": "USD" })
        );
        assert_eq!(params_from_query("cur=EUR&cur=GBP").unwrap(), json!({ "cur": ["EUR", "GBP"] }));
        assert_eq!(params_from_query("cur%5B%5D=EUR").unwrap(), json!({ "cur": ["EUR"] }));
        assert_eq!(params_from_query("cur=EUR").unwrap(), json!({ "cur": "EUR" }));
        assert_eq!(params_from_query("").unwrap(), json!({}));
    }
}

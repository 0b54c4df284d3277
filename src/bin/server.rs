//! HTTP front end for the average earnings handler.
//!
//! - `GET /earnings/average?cur[]=EUR&targetCur=USD`
//! - `POST /event` with an API-Gateway-style event, answered with a proxy result
//! - `GET /health`

use std::sync::Arc;

use avgearn::handler::{self, HandlerOptions};
use avgearn::{AlphaVantage, Config};
use axum::extract::{Json, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    client: Arc<AlphaVantage>,
    options: Arc<HandlerOptions>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = AppState {
        client: Arc::new(AlphaVantage::from_config(&config)),
        options: Arc::new(config.handler_options()),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/earnings/average", get(average))
        .route("/event", post(event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, month_proximity = config.month_proximity, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn average(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let params = match handler::params_from_query(query.as_deref().unwrap_or_default()) {
        Ok(params) => params,
        Err(err) => {
            warn!(%err, "malformed query string");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "malformed query string" }))).into_response();
        }
    };

    let response = handler::handle(state.client.as_ref(), &state.options, Some(&params)).await;
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}

async fn event(State(state): State<AppState>, Json(event): Json<Value>) -> Json<Value> {
    let response = handler::handle_event(state.client.as_ref(), &state.options, &event).await;
    Json(response.into_gateway())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
    }
}

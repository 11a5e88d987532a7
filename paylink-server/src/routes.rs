//! Axum route handlers for the paylink API.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use paylink_core::OrderRequest;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::ServerError, state::SharedState};

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /create-order` — create a gateway order for `amount × 100` minor units.
///
/// The amount is not validated. Bodies not declared as `application/json`
/// are read as `{}`.
///
/// # Errors
/// Returns [`ServerError::InvalidRequest`] if a JSON body does not parse or
/// is not an object or array, and
/// [`ServerError::Gateway`] if the gateway call fails for any reason.
pub async fn create_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let request = if is_json(&headers) {
        OrderRequest::from_json_slice(&body).map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    } else {
        OrderRequest::default()
    };

    let options = state.options_for(&request);
    tracing::debug!(amount = %options.amount, receipt = %options.receipt, "relaying order");

    let order = state.gateway().create_order(&options).await?;
    Ok(Json(order.into_inner()))
}

/// `true` only for `application/json`, with or without parameters.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
}

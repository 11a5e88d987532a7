//! Error types for the server crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paylink_razorpay::GatewayError;
use serde_json::json;

/// Body returned for every gateway failure, whatever the cause.
pub const GATEWAY_FAILURE_BODY: &str = "Something went wrong!";

/// Errors that can occur during request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServerError {
    /// The payment gateway call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The request body is not valid JSON.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ServerError::Gateway(_) => {
                tracing::error!(error = %message, "order creation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GATEWAY_FAILURE_BODY).into_response()
            }
            ServerError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
            }
        }
    }
}

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment variable held a value that could not be used.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue { var: &'static str, value: String, reason: String },
}

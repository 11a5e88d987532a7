//! Error types for the gateway client crate.

use std::time::Duration;

/// Errors that can occur while asking the gateway to create an order.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The client could not be built from the given configuration.
    #[error("invalid gateway configuration: {0}")]
    InvalidConfig(String),

    /// Connecting to or talking with the gateway failed.
    #[error("gateway transport error: {0}")]
    Transport(String),

    /// The gateway did not answer within the configured timeout.
    #[error("gateway did not respond within {0:?}")]
    Timeout(Duration),

    /// The gateway answered with a non-success status.
    #[error("gateway rejected request with HTTP {status}: {message}")]
    Rejected {
        status: u16,
        /// Gateway error code, e.g. `BAD_REQUEST_ERROR`, when the body had one.
        code: Option<String>,
        message: String,
    },

    /// A payload could not be encoded or the response was not JSON.
    #[error("gateway payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

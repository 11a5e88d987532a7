//! Razorpay Orders API backend.
//!
//! Creates orders with `POST /v1/orders`, authenticated with HTTP Basic auth
//! using the key id and secret.
//!
//! # API Reference
//! <https://razorpay.com/docs/api/orders/create/>

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hyper::header::HeaderValue;
use hyper::{StatusCode, Uri};
use paylink_core::{Order, OrderOptions};
use serde::Deserialize;

use crate::https_client::ApiClient;
use crate::{GatewayError, PaymentGateway, RazorpayConfig};

/// Path of the order-creation endpoint, relative to the base URL.
pub const ORDERS_PATH: &str = "/v1/orders";

/// Razorpay payment gateway.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    client: ApiClient,
    orders_uri: Uri,
    authorization: HeaderValue,
    timeout: Option<Duration>,
}

impl RazorpayGateway {
    /// Build a gateway client from `config`.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidConfig`] if the base URL is not an
    /// absolute `http`/`https` URL or the credentials cannot form a header.
    pub fn new(config: &RazorpayConfig) -> Result<Self, GatewayError> {
        let orders_uri = orders_uri(&config.base_url)?;
        let authorization = basic_auth(&config.key_id, &config.key_secret)?;
        Ok(Self { client: ApiClient::new(), orders_uri, authorization, timeout: config.timeout })
    }

    /// The full URI orders are posted to.
    #[must_use]
    pub fn orders_uri(&self) -> &Uri {
        &self.orders_uri
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, options: &OrderOptions) -> Result<Order, GatewayError> {
        let body = serde_json::to_vec(options)?;

        tracing::info!(
            amount = %options.amount,
            currency = %options.currency,
            receipt = %options.receipt,
            "creating gateway order"
        );

        let send = self.client.post_json(&self.orders_uri, &self.authorization, body);
        let (status, bytes) = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| GatewayError::Timeout(limit))??,
            None => send.await?,
        };

        if !status.is_success() {
            let err = rejection(status, &bytes);
            tracing::warn!(status = status.as_u16(), error = %err, "gateway rejected order");
            return Err(err);
        }

        let order: Order = serde_json::from_slice(&bytes)?;
        tracing::info!(order_id = order.id().unwrap_or("<none>"), "gateway order created");
        Ok(order)
    }
}

/// Error envelope the API returns with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    description: Option<String>,
}

fn rejection(status: StatusCode, body: &[u8]) -> GatewayError {
    let raw = || String::from_utf8_lossy(body).into_owned();
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => GatewayError::Rejected {
            status: status.as_u16(),
            code: error.code,
            message: error.description.unwrap_or_else(raw),
        },
        Err(_) => GatewayError::Rejected { status: status.as_u16(), code: None, message: raw() },
    }
}

fn orders_uri(base_url: &str) -> Result<Uri, GatewayError> {
    let joined = format!("{}{ORDERS_PATH}", base_url.trim_end_matches('/'));
    let uri: Uri = joined
        .parse()
        .map_err(|e| GatewayError::InvalidConfig(format!("base URL '{base_url}': {e}")))?;
    match uri.scheme_str() {
        Some("http" | "https") if uri.authority().is_some() => Ok(uri),
        _ => Err(GatewayError::InvalidConfig(format!(
            "base URL '{base_url}' must be an absolute http or https URL"
        ))),
    }
}

fn basic_auth(key_id: &str, key_secret: &str) -> Result<HeaderValue, GatewayError> {
    let token = STANDARD.encode(format!("{key_id}:{key_secret}"));
    let mut value = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|e| GatewayError::InvalidConfig(format!("authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

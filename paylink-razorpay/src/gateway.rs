//! Payment gateway abstraction trait.
//!
//! Lets the HTTP service swap the hosted Razorpay client for an in-process
//! fake without touching the handler.

use async_trait::async_trait;
use paylink_core::{Order, OrderOptions};

use crate::GatewayError;

/// Order-creation capability of a payment gateway.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every request handler.
///
/// # Cancel Safety
/// Dropping the future abandons the call. The gateway may still have created
/// the order.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the gateway to create an order and return it unmodified.
    ///
    /// No retry and no idempotency: each call may create a new order.
    ///
    /// # Errors
    /// Returns [`GatewayError::Transport`] or [`GatewayError::Timeout`] when
    /// the gateway cannot be reached, [`GatewayError::Rejected`] when it
    /// refuses the order, and [`GatewayError::Json`] when its answer is not
    /// JSON.
    async fn create_order(&self, options: &OrderOptions) -> Result<Order, GatewayError>;
}

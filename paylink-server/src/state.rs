//! Shared, immutable application state.
//!
//! Built once at startup and handed to every request through axum state.
//! Nothing in it is mutated after construction.

use std::sync::Arc;

use paylink_core::{OrderOptions, OrderRequest, ReceiptPolicy};
use paylink_razorpay::PaymentGateway;

/// Gateway client and order defaults shared by all handlers.
pub struct AppState {
    gateway: Arc<dyn PaymentGateway>,
    receipts: ReceiptPolicy,
}

/// State type the router is built with.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create state around a configured gateway client.
    #[must_use]
    pub fn new(gateway: Arc<dyn PaymentGateway>, receipts: ReceiptPolicy) -> Self {
        Self { gateway, receipts }
    }

    /// The gateway all orders are created with.
    #[must_use]
    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.gateway.as_ref()
    }

    /// Derive gateway options for `request`, picking a receipt per the policy.
    #[must_use]
    pub fn options_for(&self, request: &OrderRequest) -> OrderOptions {
        OrderOptions::from_request(request, self.receipts.next_receipt())
    }
}

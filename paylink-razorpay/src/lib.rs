//! Payment gateway client for the paylink order relay.
//!
//! Defines the [`PaymentGateway`] seam the HTTP service depends on and the
//! Razorpay Orders API implementation behind it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod razorpay;

mod https_client;

pub use config::RazorpayConfig;
pub use error::GatewayError;
pub use gateway::PaymentGateway;
pub use razorpay::{RazorpayGateway, ORDERS_PATH};

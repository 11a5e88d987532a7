//! HTTP service relaying order creation to a payment gateway.
//!
//! Exposes `POST /create-order`, which scales the requested amount to minor
//! units and forwards it to the configured [`PaymentGateway`](paylink_razorpay::PaymentGateway).

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

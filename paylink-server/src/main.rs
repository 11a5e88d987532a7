//! Entry point for the `paylink-server` HTTP server.

use std::sync::Arc;

use paylink_razorpay::RazorpayGateway;
use paylink_server::{config::ServerConfig, routes::create_router, state::AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.razorpay.uses_placeholder_credentials() {
        warn!("RAZORPAY_KEY_ID/RAZORPAY_KEY_SECRET not set; the gateway will reject orders");
    }

    let gateway = match RazorpayGateway::new(&config.razorpay) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!(error = %e, "failed to build gateway client");
            std::process::exit(1);
        }
    };

    let orders_uri = gateway.orders_uri().to_string();
    let state = AppState::new(Arc::new(gateway), config.receipt_policy);
    let app = create_router(Arc::new(state));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        orders = %orders_uri,
        "paylink-server listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

//! Process configuration read from environment variables.
//!
//! | variable                | default                    |
//! |-------------------------|----------------------------|
//! | `PAYLINK_LISTEN_ADDR`   | `0.0.0.0:5000`             |
//! | `RAZORPAY_KEY_ID`       | `YOUR_KEY_ID`              |
//! | `RAZORPAY_KEY_SECRET`   | `YOUR_SECRET`              |
//! | `RAZORPAY_BASE_URL`     | `https://api.razorpay.com` |
//! | `RAZORPAY_TIMEOUT_SECS` | unset, no timeout (min 1)  |
//! | `PAYLINK_RECEIPT`       | `order_rcptid_11`          |
//! | `PAYLINK_RECEIPT_MODE`  | `fixed`                    |
//!
//! Empty values count as unset.

use std::net::SocketAddr;
use std::time::Duration;

use paylink_core::{Receipt, ReceiptPolicy};
use paylink_razorpay::config::{PLACEHOLDER_KEY_ID, PLACEHOLDER_KEY_SECRET};
use paylink_razorpay::RazorpayConfig;

use crate::error::ConfigError;

/// Listen address used when `PAYLINK_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Prefix for receipts generated in `per-request` mode.
pub const PER_REQUEST_RECEIPT_PREFIX: &str = "rcpt_";

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub razorpay: RazorpayConfig,
    pub receipt_policy: ReceiptPolicy,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for any variable that is set
    /// but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for any variable that is set
    /// but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let listen_raw = get("PAYLINK_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr: SocketAddr = listen_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                var: "PAYLINK_LISTEN_ADDR",
                value: listen_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let timeout = match get("RAZORPAY_TIMEOUT_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        var: "RAZORPAY_TIMEOUT_SECS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        var: "RAZORPAY_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1 second".to_owned(),
                    });
                }
                Some(Duration::from_secs(secs))
            }
        };

        let mut razorpay = RazorpayConfig::new(
            get("RAZORPAY_KEY_ID").unwrap_or_else(|| PLACEHOLDER_KEY_ID.to_owned()),
            get("RAZORPAY_KEY_SECRET").unwrap_or_else(|| PLACEHOLDER_KEY_SECRET.to_owned()),
        )
        .with_timeout(timeout);
        if let Some(base_url) = get("RAZORPAY_BASE_URL") {
            razorpay = razorpay.with_base_url(base_url);
        }

        let receipt_policy = receipt_policy(get("PAYLINK_RECEIPT_MODE"), get("PAYLINK_RECEIPT"))?;

        Ok(Self { listen_addr, razorpay, receipt_policy })
    }
}

fn receipt_policy(mode: Option<String>, receipt: Option<String>) -> Result<ReceiptPolicy, ConfigError> {
    match mode.as_deref().unwrap_or("fixed") {
        "fixed" => match receipt {
            None => Ok(ReceiptPolicy::default()),
            Some(value) => Receipt::new(value.clone()).map(ReceiptPolicy::Fixed).map_err(|e| {
                ConfigError::InvalidValue { var: "PAYLINK_RECEIPT", value, reason: e.to_string() }
            }),
        },
        "per-request" => ReceiptPolicy::per_request(PER_REQUEST_RECEIPT_PREFIX).map_err(|e| {
            ConfigError::InvalidValue {
                var: "PAYLINK_RECEIPT_MODE",
                value: "per-request".to_owned(),
                reason: e.to_string(),
            }
        }),
        other => Err(ConfigError::InvalidValue {
            var: "PAYLINK_RECEIPT_MODE",
            value: other.to_owned(),
            reason: "expected 'fixed' or 'per-request'".to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use paylink_core::DEFAULT_RECEIPT;
    use paylink_razorpay::config::DEFAULT_BASE_URL;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = match load(&[]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.port(), 5000);
        assert!(config.razorpay.uses_placeholder_credentials());
        assert_eq!(config.razorpay.base_url, DEFAULT_BASE_URL);
        assert!(config.razorpay.timeout.is_none());
        assert_eq!(config.receipt_policy.next_receipt().as_str(), DEFAULT_RECEIPT);
    }

    #[test]
    fn overrides_are_applied() {
        let config = match load(&[
            ("PAYLINK_LISTEN_ADDR", "127.0.0.1:8080"),
            ("RAZORPAY_KEY_ID", "rzp_live_x"),
            ("RAZORPAY_KEY_SECRET", "shh"),
            ("RAZORPAY_BASE_URL", "http://127.0.0.1:9999"),
            ("RAZORPAY_TIMEOUT_SECS", "15"),
            ("PAYLINK_RECEIPT", "shop_receipt"),
        ]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.razorpay.key_id, "rzp_live_x");
        assert_eq!(config.razorpay.key_secret, "shh");
        assert_eq!(config.razorpay.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.razorpay.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.receipt_policy.next_receipt().as_str(), "shop_receipt");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = match load(&[("PAYLINK_LISTEN_ADDR", ""), ("RAZORPAY_TIMEOUT_SECS", "")]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.port(), 5000);
        assert!(config.razorpay.timeout.is_none());
    }

    #[test]
    fn per_request_mode_generates_distinct_receipts() {
        let config = match load(&[("PAYLINK_RECEIPT_MODE", "per-request")]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let a = config.receipt_policy.next_receipt();
        let b = config.receipt_policy.next_receipt();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(PER_REQUEST_RECEIPT_PREFIX));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases: [(&str, &str); 5] = [
            ("PAYLINK_LISTEN_ADDR", "port-five-thousand"),
            ("RAZORPAY_TIMEOUT_SECS", "soon"),
            ("RAZORPAY_TIMEOUT_SECS", "0"),
            ("PAYLINK_RECEIPT_MODE", "random"),
            ("PAYLINK_RECEIPT", "this-receipt-is-far-too-long-for-the-gateway-limit"),
        ];
        for (var, value) in cases {
            match load(&[(var, value)]) {
                Err(ConfigError::InvalidValue { var: reported, .. }) => assert_eq!(reported, var),
                Ok(_) => panic!("{var}={value} should be rejected"),
            }
        }
    }
}

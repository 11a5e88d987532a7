//! Gateway credentials and endpoint configuration.

use std::fmt;
use std::time::Duration;

/// Origin of the hosted Razorpay API.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

/// Placeholder key id used when no credentials are configured.
pub const PLACEHOLDER_KEY_ID: &str = "YOUR_KEY_ID";

/// Placeholder key secret used when no credentials are configured.
pub const PLACEHOLDER_KEY_SECRET: &str = "YOUR_SECRET";

/// Configuration for a [`RazorpayGateway`](crate::RazorpayGateway).
#[derive(Clone)]
#[non_exhaustive]
pub struct RazorpayConfig {
    /// API key id, sent as the Basic auth username.
    pub key_id: String,

    /// API key secret, sent as the Basic auth password.
    pub key_secret: String,

    /// Scheme and authority of the API, without a trailing path.
    pub base_url: String,

    /// Upper bound on one order-creation call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl RazorpayConfig {
    /// Create a config for the hosted API with no timeout.
    #[must_use]
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Point the client at a different origin, e.g. a local mock.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound each call by `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns `true` while either credential is still the placeholder.
    #[must_use]
    pub fn uses_placeholder_credentials(&self) -> bool {
        self.key_id == PLACEHOLDER_KEY_ID || self.key_secret == PLACEHOLDER_KEY_SECRET
    }
}

impl Default for RazorpayConfig {
    fn default() -> Self {
        Self::new(PLACEHOLDER_KEY_ID, PLACEHOLDER_KEY_SECRET)
    }
}

impl fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_placeholders_and_hosted_api() {
        let config = RazorpayConfig::default();
        assert!(config.uses_placeholder_credentials());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none(), "no timeout unless configured");
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = RazorpayConfig::new("rzp_test_abc", "s3cr3t");
        let debug = format!("{config:?}");
        assert!(debug.contains("rzp_test_abc"));
        assert!(!debug.contains("s3cr3t"), "secret must not appear in Debug output");
    }

    #[test]
    fn builders_override_defaults() {
        let config = RazorpayConfig::new("id", "secret")
            .with_base_url("http://127.0.0.1:9000")
            .with_timeout(Some(Duration::from_secs(5)));
        assert!(!config.uses_placeholder_credentials());
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}

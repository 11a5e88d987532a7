use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

/// Receipt sent with every order unless a per-request policy is configured.
///
/// The same literal is reused for all orders, so it does not identify one.
pub const DEFAULT_RECEIPT: &str = "order_rcptid_11";

/// Longest receipt the gateway accepts, in characters.
pub const MAX_RECEIPT_LEN: usize = 40;

/// Merchant-side reference attached to a gateway order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Receipt(String);

impl Receipt {
    /// Creates a `Receipt` after checking it is non-empty and within
    /// [`MAX_RECEIPT_LEN`] characters.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidReceipt`] if either check fails.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::InvalidReceipt { value, reason: "must not be empty".to_owned() });
        }
        if value.chars().count() > MAX_RECEIPT_LEN {
            return Err(CoreError::InvalidReceipt {
                value,
                reason: format!("must be at most {MAX_RECEIPT_LEN} characters"),
            });
        }
        Ok(Self(value))
    }

    /// Returns the receipt text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self(DEFAULT_RECEIPT.to_owned())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a receipt is chosen for each outgoing order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReceiptPolicy {
    /// Every order carries the same receipt.
    Fixed(Receipt),
    /// Each order gets `prefix` followed by a fresh UUID, cut to
    /// [`MAX_RECEIPT_LEN`].
    PerRequest { prefix: String },
}

impl ReceiptPolicy {
    /// Builds a per-request policy.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidReceipt`] if `prefix` is not ASCII or
    /// leaves no room for the generated suffix.
    pub fn per_request(prefix: impl Into<String>) -> Result<Self, CoreError> {
        let prefix = prefix.into();
        if !prefix.is_ascii() {
            return Err(CoreError::InvalidReceipt {
                value: prefix,
                reason: "prefix must be ASCII".to_owned(),
            });
        }
        if prefix.len() >= MAX_RECEIPT_LEN {
            return Err(CoreError::InvalidReceipt {
                value: prefix,
                reason: format!("prefix must be shorter than {MAX_RECEIPT_LEN} characters"),
            });
        }
        Ok(Self::PerRequest { prefix })
    }

    /// Returns the receipt for the next order.
    #[must_use]
    pub fn next_receipt(&self) -> Receipt {
        match self {
            Self::Fixed(receipt) => receipt.clone(),
            Self::PerRequest { prefix } => {
                let mut value = format!("{prefix}{}", Uuid::new_v4().simple());
                value.truncate(MAX_RECEIPT_LEN);
                Receipt(value)
            }
        }
    }
}

impl Default for ReceiptPolicy {
    fn default() -> Self {
        Self::Fixed(Receipt::default())
    }
}

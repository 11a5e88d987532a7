//! Order request, gateway options and the opaque gateway order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amount::{coerce_major, MinorAmount};
use crate::error::CoreError;
use crate::receipt::Receipt;

/// Currency code sent with every order.
pub const CURRENCY: &str = "INR";

/// Body of a `create-order` call.
///
/// `amount` is kept as raw JSON: `None` when the field is absent,
/// `Some(Value::Null)` when it is an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRequest {
    pub amount: Option<Value>,
}

impl OrderRequest {
    /// Creates a request carrying the given raw amount.
    #[must_use]
    pub fn new(amount: Option<Value>) -> Self {
        Self { amount }
    }

    /// Parses a request body.
    ///
    /// An empty body is treated as `{}`. Only objects and arrays are accepted
    /// at the top level; an array has no `amount` field.
    ///
    /// # Errors
    /// Returns [`CoreError::NotObjectOrArray`] if the body starts with any
    /// other JSON value, and [`CoreError::MalformedBody`] if the bytes are not
    /// valid JSON. Numbers beyond `f64` range are rejected as malformed.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, CoreError> {
        match body.iter().find(|b| !b.is_ascii_whitespace()) {
            None => return Ok(Self::default()),
            Some(b'{' | b'[') => {}
            Some(_) => return Err(CoreError::NotObjectOrArray),
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from(value))
    }

    /// The amount coerced to major units. NaN when absent or non-numeric.
    #[must_use]
    pub fn major_amount(&self) -> f64 {
        coerce_major(self.amount.as_ref())
    }
}

impl From<Value> for OrderRequest {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self::new(map.remove("amount")),
            _ => Self::default(),
        }
    }
}

/// Parameters submitted to the gateway's order-creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderOptions {
    /// Amount in minor units (request amount × 100).
    pub amount: MinorAmount,
    /// Always [`CURRENCY`].
    pub currency: String,
    pub receipt: Receipt,
}

impl OrderOptions {
    /// Derives gateway options from a request.
    #[must_use]
    pub fn from_request(request: &OrderRequest, receipt: Receipt) -> Self {
        Self {
            amount: MinorAmount::from_major(request.major_amount()),
            currency: CURRENCY.to_owned(),
            receipt,
        }
    }
}

/// An order as returned by the gateway. Never interpreted, only forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(pub Value);

impl Order {
    /// The gateway's order id, if the payload carries one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Consumes the order, returning the raw payload.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

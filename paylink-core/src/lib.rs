//! Core types for the paylink order relay.
//!
//! Defines the request a client sends, the options derived from it for the
//! payment gateway, and the opaque order the gateway returns.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod amount;
pub mod error;
pub mod order;
pub mod receipt;

pub use amount::{coerce_major, MinorAmount, MINOR_UNITS_PER_MAJOR};
pub use error::CoreError;
pub use order::{Order, OrderOptions, OrderRequest, CURRENCY};
pub use receipt::{Receipt, ReceiptPolicy, DEFAULT_RECEIPT, MAX_RECEIPT_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options_json(body: &[u8]) -> serde_json::Value {
        let request = match OrderRequest::from_json_slice(body) {
            Ok(r) => r,
            Err(e) => panic!("unexpected parse error: {e}"),
        };
        let options = OrderOptions::from_request(&request, Receipt::default());
        match serde_json::to_value(&options) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        }
    }

    #[test]
    fn amount_500_becomes_50000_paise() {
        let options = options_json(br#"{"amount": 500}"#);
        assert_eq!(
            options,
            json!({"amount": 50000, "currency": "INR", "receipt": "order_rcptid_11"})
        );
    }

    #[test]
    fn missing_amount_is_sent_as_null() {
        let options = options_json(br#"{}"#);
        assert_eq!(options["amount"], serde_json::Value::Null);
        assert_eq!(options["currency"], "INR");
        assert_eq!(options["receipt"], "order_rcptid_11");
    }

    #[test]
    fn negative_amount_is_not_rejected() {
        let options = options_json(br#"{"amount": -5}"#);
        assert_eq!(options["amount"], -500);
    }

    #[test]
    fn string_amount_is_coerced() {
        let options = options_json(br#"{"amount": "25"}"#);
        assert_eq!(options["amount"], 2500);
    }

    #[test]
    fn explicit_null_amount_differs_from_missing() {
        let request = match OrderRequest::from_json_slice(br#"{"amount": null}"#) {
            Ok(r) => r,
            Err(e) => panic!("unexpected parse error: {e}"),
        };
        assert_eq!(request.amount, Some(serde_json::Value::Null));
        assert!(request.major_amount().abs() < f64::EPSILON, "null coerces to zero");
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let request = match OrderRequest::from_json_slice(b"  \n") {
            Ok(r) => r,
            Err(e) => panic!("unexpected parse error: {e}"),
        };
        assert_eq!(request, OrderRequest::default());
        assert!(request.major_amount().is_nan());
    }

    #[test]
    fn array_body_has_no_amount() {
        let request = match OrderRequest::from_json_slice(b" [500]") {
            Ok(r) => r,
            Err(e) => panic!("unexpected parse error: {e}"),
        };
        assert_eq!(request, OrderRequest::new(None));
    }

    #[test]
    fn scalar_bodies_are_rejected() {
        let bodies: [&[u8]; 5] = [b"5", b"\"x\"", b"true", b" null", b"-1"];
        for body in bodies {
            let err = OrderRequest::from_json_slice(body).err();
            assert!(
                matches!(err, Some(CoreError::NotObjectOrArray)),
                "expected NotObjectOrArray for {:?}, got {err:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn out_of_range_number_is_malformed() {
        let err = OrderRequest::from_json_slice(br#"{"amount": 1e400}"#).err();
        assert!(
            matches!(err, Some(CoreError::MalformedBody(_))),
            "expected MalformedBody, got {err:?}"
        );
    }

    #[test]
    fn object_body_carries_raw_amount() {
        let request = match OrderRequest::from_json_slice(br#"{"amount": [5]}"#) {
            Ok(r) => r,
            Err(e) => panic!("unexpected parse error: {e}"),
        };
        assert_eq!(request, OrderRequest::new(Some(json!([5]))));
        assert!((request.major_amount() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_json_is_malformed_body() {
        let err = OrderRequest::from_json_slice(b"{amount:").err();
        assert!(
            matches!(err, Some(CoreError::MalformedBody(_))),
            "expected MalformedBody, got {err:?}"
        );
    }

    #[test]
    fn order_id_reads_gateway_field() {
        let order = Order(json!({"id": "order_9A33XWu170gUtm", "status": "created"}));
        assert_eq!(order.id(), Some("order_9A33XWu170gUtm"));
        assert_eq!(Order(json!({})).id(), None);
    }

    #[test]
    fn order_serialises_transparently() {
        let payload = json!({"id": "order_1", "amount": 50000, "notes": []});
        let order = Order(payload.clone());
        let round = match serde_json::to_value(&order) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(round, payload);
        assert_eq!(order.into_inner(), payload);
    }
}

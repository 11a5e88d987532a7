//! Fuzz target: parsing a `create-order` body and deriving gateway options.
//!
//! Arbitrary bytes must never panic the parser, and any body that parses
//! must yield options that serialise to JSON.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paylink_core::{OrderOptions, OrderRequest, Receipt};

fuzz_target!(|data: &[u8]| {
    let Ok(request) = OrderRequest::from_json_slice(data) else {
        return;
    };
    let options = OrderOptions::from_request(&request, Receipt::default());
    let json = serde_json::to_vec(&options);
    assert!(json.is_ok(), "options must always serialise");
});

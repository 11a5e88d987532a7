//! Fuzz target: coercing arbitrary string amounts to minor units.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paylink_core::{coerce_major, MinorAmount};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data).into_owned();
    let major = coerce_major(Some(&Value::String(raw)));
    let minor = MinorAmount::from_major(major);
    if let Some(i) = minor.as_integer() {
        #[allow(clippy::cast_precision_loss)]
        let back = i as f64;
        assert!((back - minor.value()).abs() < f64::EPSILON);
    }
});

//! One method per remote operation, grouped by service area.

mod face;
mod image;
mod live;
mod ocr;
mod person;

pub use face::{DEFAULT_MIN_SIZE, DEFAULT_TOPN};
pub use ocr::{IdCardSide, LicenseKind};

use serde_json::Value;

use crate::client::Body;

fn put(body: &mut Body, key: &str, value: impl Into<Value>) {
    body.insert(key.to_string(), value.into());
}

fn put_strings(body: &mut Body, key: &str, values: &[String]) {
    body.insert(
        key.to_string(),
        Value::Array(values.iter().cloned().map(Value::String).collect()),
    );
}

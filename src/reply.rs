//! Reading the service status out of a response document.
//!
//! The client hands service-level failures back untouched; these helpers let
//! callers decide when a non-zero `errorcode` should become an [`Error`].

use serde_json::Value;

use crate::error::{Error, Result};

/// `errorcode` field, if present and numeric
pub fn error_code(reply: &Value) -> Option<i64> {
    reply.get("errorcode").and_then(Value::as_i64)
}

/// `errormsg` field, if present
pub fn error_message(reply: &Value) -> Option<&str> {
    reply.get("errormsg").and_then(Value::as_str)
}

pub fn is_ok(reply: &Value) -> bool {
    error_code(reply).unwrap_or(0) == 0
}

/// Turn a non-zero `errorcode` into [`Error::Service`]
pub fn ensure_ok(reply: Value) -> Result<Value> {
    match error_code(&reply) {
        Some(code) if code != 0 => Err(Error::Service {
            code,
            message: error_message(&reply).unwrap_or_default().to_string(),
        }),
        _ => Ok(reply),
    }
}

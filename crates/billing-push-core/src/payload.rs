//! Push payload decoding
//!
//! The sender posts `{ "message": string }` as UTF-8 JSON. Anything that is not
//! valid JSON is a `PayloadFormat` error. Valid JSON of another shape is
//! tolerated and coerced the same way the platform coerces the `body` option.

use crate::error::{PushError, PushResult};
use serde_json::Value;

/// Decoded push payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPayload {
    /// Notification body text
    pub message: String,
}

impl PushPayload {
    /// Parse raw push data
    ///
    /// Extra fields are ignored. A missing `message` gives an empty body.
    pub fn parse(data: &[u8]) -> PushResult<Self> {
        let value: Value = serde_json::from_slice(data)?;

        let message = match value {
            Value::Object(mut fields) => fields
                .remove("message")
                .map(coerce_to_text)
                .unwrap_or_default(),
            Value::Null => {
                return Err(PushError::PayloadFormat {
                    message: "payload is JSON null".to_string(),
                })
            }
            _ => String::new(),
        };

        Ok(Self { message })
    }
}

fn coerce_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        // null, numbers, bools, arrays and objects use their JSON text
        other => other.to_string(),
    }
}

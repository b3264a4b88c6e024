//! Raw payload input to normalization.
//!
//! A push message reaches the worker in whatever shape its sender chose:
//! nothing at all, a plain or JSON-encoded string, or an already-decoded
//! JSON tree. [`RawPayload`] models that input without imposing any schema;
//! schema interpretation happens entirely inside the shape chain.

use serde_json::Value;

/// Untyped input to [`normalize`](crate::normalize).
///
/// Sender-controlled and unvalidated. The normalizer accepts every variant
/// (and every `Value` inside `Json`) without erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// The transport delivered no payload body.
    Absent,
    /// A text payload. May or may not be JSON; the normalizer decides.
    Text(String),
    /// A decoded JSON tree of arbitrary shape.
    Json(Value),
}

impl RawPayload {
    /// True when the payload should take the no-input branch.
    ///
    /// Mirrors the truthiness gate of the original worker: absent payloads,
    /// empty strings, and the falsy JSON scalars (`null`, `false`, `0`) all
    /// count as "nothing arrived".
    pub fn is_falsy(&self) -> bool {
        match self {
            RawPayload::Absent => true,
            RawPayload::Text(text) => text.is_empty(),
            RawPayload::Json(value) => match value {
                Value::Null => true,
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64() == Some(0.0),
                Value::String(s) => s.is_empty(),
                Value::Array(_) | Value::Object(_) => false,
            },
        }
    }

    /// Short label for structured logging. Never exposes payload content.
    pub fn kind(&self) -> &'static str {
        match self {
            RawPayload::Absent => "absent",
            RawPayload::Text(_) => "text",
            RawPayload::Json(_) => "json",
        }
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        RawPayload::Json(value)
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        RawPayload::Text(text)
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        RawPayload::Text(text.to_string())
    }
}

impl From<Option<RawPayload>> for RawPayload {
    fn from(payload: Option<RawPayload>) -> Self {
        payload.unwrap_or(RawPayload::Absent)
    }
}

//! Wire payload decoding.

use normalizer::RawPayload;
use serde_json::Value;

/// Decodes a raw push payload into normalizer input. Never fails.
///
/// Structured decode is attempted first; what is left falls through to
/// plain text (the normalizer retries JSON on text itself, covering
/// JSON-encoded strings that arrive with stray framing). Payloads that are
/// neither JSON nor UTF-8 proceed as absent, so the no-input branch still
/// produces a notification.
pub fn decode_wire(payload: Option<&[u8]>) -> RawPayload {
    let bytes = match payload {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return RawPayload::Absent,
    };

    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        return RawPayload::Json(value);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => RawPayload::Text(text.to_string()),
        Err(_) => {
            tracing::debug!(
                len = bytes.len(),
                "push payload is neither JSON nor UTF-8, proceeding without payload"
            );
            RawPayload::Absent
        }
    }
}

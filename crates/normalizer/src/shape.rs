use serde_json::{Map, Value};

use crate::config::NormalizerConfig;
use crate::descriptor::NotificationDescriptor;
use crate::payload::RawPayload;

/// Main entry point. Takes an arbitrarily-shaped payload and returns a
/// canonical notification descriptor.
///
/// Total function: every input shape, including `null`, non-JSON strings,
/// numbers, arrays, and deeply malformed trees, produces a valid
/// descriptor. Internal parse failures degrade to a fallback branch, they
/// never propagate.
///
/// The chain runs first-match-wins, in fixed priority order:
///
/// 1. no input (falsy payload): fixed fallback copy from the config
/// 2. string: re-enter the chain if it parses as JSON, else literal body
/// 3. wrapped `notification` object (title/heading, body/message synonyms)
/// 4. flat top-level `title`/`body` fields
/// 5. `aps.alert` structure (object or bare string)
/// 6. anything else: serialized, truncated preview as the body
pub fn normalize(raw: RawPayload, cfg: &NormalizerConfig) -> NotificationDescriptor {
    if raw.is_falsy() {
        return absent_descriptor(cfg);
    }

    match raw {
        RawPayload::Absent => absent_descriptor(cfg),
        RawPayload::Text(text) => match serde_json::from_str::<Value>(&text) {
            // Parsed strings re-enter the shape chain as JSON input.
            Ok(value) => normalize(RawPayload::Json(value), cfg),
            // Not JSON: the whole string verbatim becomes the body. No raw
            // payload is preserved on this branch.
            Err(_) => NotificationDescriptor::new(
                cfg.default_title.clone(),
                text,
                cfg.fallback_url.clone(),
                None,
            ),
        },
        RawPayload::Json(value) => normalize_value(value, cfg),
    }
}

/// Shape chain for decoded JSON input, tried in fixed priority order.
fn normalize_value(value: Value, cfg: &NormalizerConfig) -> NotificationDescriptor {
    if let Some(descriptor) = wrapped_shape(&value, cfg) {
        return attach_raw(descriptor, value);
    }
    if let Some(descriptor) = flat_shape(&value, cfg) {
        return attach_raw(descriptor, value);
    }
    if let Some(descriptor) = aps_alert_shape(&value, cfg) {
        return attach_raw(descriptor, value);
    }
    attach_raw(unrecognized_shape(&value, cfg), value)
}

/// Shape 3: a nested object under a `notification` key.
///
/// Field synonyms: `title`/`heading`, `body`/`message`; the field's own
/// value wins over its synonym. The URL is checked on the nested object
/// first, then the top level. `icon`/`badge` are copied verbatim.
fn wrapped_shape(value: &Value, cfg: &NormalizerConfig) -> Option<NotificationDescriptor> {
    let nested = value.get("notification")?.as_object()?;

    let title = str_field(nested, "title")
        .or_else(|| str_field(nested, "heading"))
        .unwrap_or(&cfg.default_title);
    let body = str_field(nested, "body")
        .or_else(|| str_field(nested, "message"))
        .unwrap_or_default();
    let url = str_field(nested, "url")
        .or_else(|| top_url(value))
        .unwrap_or(&cfg.fallback_url);

    let mut descriptor = NotificationDescriptor::new(
        title.to_string(),
        body.to_string(),
        url.to_string(),
        None,
    );
    descriptor.options.icon = str_field(nested, "icon").map(str::to_string);
    descriptor.options.badge = str_field(nested, "badge").map(str::to_string);
    Some(descriptor)
}

/// Shape 4: top-level `title` or `body` fields.
///
/// Same extraction as the wrapped shape, reading the top level. The URL
/// falls back through top-level `url`, then nested `data.url`, then the
/// configured route.
fn flat_shape(value: &Value, cfg: &NormalizerConfig) -> Option<NotificationDescriptor> {
    let fields = value.as_object()?;
    if !fields.contains_key("title") && !fields.contains_key("body") {
        return None;
    }

    let title = str_field(fields, "title")
        .or_else(|| str_field(fields, "heading"))
        .unwrap_or(&cfg.default_title);
    let body = str_field(fields, "body")
        .or_else(|| str_field(fields, "message"))
        .unwrap_or_default();
    let url = str_field(fields, "url")
        .or_else(|| data_url(value))
        .unwrap_or(&cfg.fallback_url);

    let mut descriptor = NotificationDescriptor::new(
        title.to_string(),
        body.to_string(),
        url.to_string(),
        None,
    );
    descriptor.options.icon = str_field(fields, "icon").map(str::to_string);
    descriptor.options.badge = str_field(fields, "badge").map(str::to_string);
    Some(descriptor)
}

/// Shape 5: an `aps.alert` structure as relayed from the Apple convention.
///
/// The alert is either an object carrying `title`/`body` or a bare string
/// used as the body. The URL only ever lives at the top level here.
fn aps_alert_shape(value: &Value, cfg: &NormalizerConfig) -> Option<NotificationDescriptor> {
    let alert = value.get("aps")?.get("alert")?;

    let (title, body) = match alert {
        Value::String(text) => (cfg.default_title.as_str(), text.as_str()),
        Value::Object(fields) => (
            str_field(fields, "title").unwrap_or(&cfg.default_title),
            str_field(fields, "body").unwrap_or_default(),
        ),
        _ => return None,
    };
    let url = top_url(value).unwrap_or(&cfg.fallback_url);

    Some(NotificationDescriptor::new(
        title.to_string(),
        body.to_string(),
        url.to_string(),
        None,
    ))
}

/// Shape 6: nothing matched. Serialize the whole payload, truncate it, and
/// show that as the body so the notification is never silently empty.
fn unrecognized_shape(value: &Value, cfg: &NormalizerConfig) -> NotificationDescriptor {
    let serialized = value.to_string();
    let body = truncate_chars(&serialized, cfg.preview_limit);
    let url = top_url(value).unwrap_or(&cfg.fallback_url);

    NotificationDescriptor::new(
        cfg.default_title.clone(),
        body,
        url.to_string(),
        None,
    )
}

/// Shape 1: the transport delivered no payload. Fixed copy from the config
/// keeps the notification non-silent.
fn absent_descriptor(cfg: &NormalizerConfig) -> NotificationDescriptor {
    NotificationDescriptor::new(
        cfg.absent.title.clone(),
        cfg.absent.body.clone(),
        cfg.absent.url.clone(),
        None,
    )
}

/// All JSON branches preserve the original payload for downstream consumers.
fn attach_raw(mut descriptor: NotificationDescriptor, value: Value) -> NotificationDescriptor {
    descriptor.options.data.raw = Some(value);
    descriptor
}

/// Non-empty string field lookup. Empty strings count as absent, the same
/// truthiness the falsy gate applies to whole payloads, so synonyms and
/// defaults still apply.
fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Top-level `url` lookup, with the same empty-is-absent rule.
fn top_url(value: &Value) -> Option<&str> {
    value
        .get("url")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Nested `data.url` lookup for the flat-shape URL chain.
fn data_url(value: &Value) -> Option<&str> {
    value
        .get("data")?
        .get("url")?
        .as_str()
        .filter(|s| !s.is_empty())
}

/// Truncates to at most `limit` characters, on a character boundary.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((boundary, _)) => text[..boundary].to_string(),
        None => text.to_string(),
    }
}

//! Property-style coverage of the normalization contract: totality, branch
//! precedence, synonym resolution, URL fallback, truncation.

use pushwork::{normalize, NormalizerConfig, NotificationDescriptor, RawPayload};
use serde_json::{json, Value};

fn run(payload: RawPayload) -> NotificationDescriptor {
    normalize(payload, &NormalizerConfig::default())
}

#[test]
fn totality_over_hostile_inputs() {
    let inputs: Vec<RawPayload> = vec![
        RawPayload::Absent,
        RawPayload::Text(String::new()),
        RawPayload::Text("   ".into()),
        RawPayload::Text("{\"broken\": ".into()),
        RawPayload::Text("<html>not json</html>".into()),
        RawPayload::Json(Value::Null),
        RawPayload::Json(json!(true)),
        RawPayload::Json(json!(false)),
        RawPayload::Json(json!(0)),
        RawPayload::Json(json!(12345678901234567890u64)),
        RawPayload::Json(json!(-1.5e300)),
        RawPayload::Json(json!("")),
        RawPayload::Json(json!([])),
        RawPayload::Json(json!([1, [2, [3, [4]]]])),
        RawPayload::Json(json!({})),
        RawPayload::Json(json!({"title": 5, "body": {"nested": true}})),
        RawPayload::Json(json!({"notification": []})),
        RawPayload::Json(json!({"aps": {}})),
        RawPayload::Json(json!({"aps": {"alert": null}})),
        RawPayload::Json(json!({"title": ""})),
        RawPayload::Json(json!({"title": "", "url": ""})),
        RawPayload::Json(json!({"notification": {"title": "", "url": ""}})),
        RawPayload::Json(json!({"aps": {"alert": {"title": ""}}, "url": ""})),
    ];

    for input in inputs {
        let descriptor = run(input);
        assert!(
            !descriptor.title.is_empty(),
            "title must never be empty: {descriptor:?}"
        );
        assert!(
            !descriptor.url().is_empty(),
            "data.url must always be set: {descriptor:?}"
        );
    }
}

#[test]
fn deeply_nested_object_is_handled() {
    let mut value = json!("leaf");
    for _ in 0..64 {
        value = json!({ "level": value });
    }
    let descriptor = run(RawPayload::Json(value));
    assert_eq!(descriptor.title, "New notification");
    assert!(descriptor.options.body.chars().count() <= 200);
}

#[test]
fn branch_precedence_is_fixed() {
    // wrapped beats flat
    let wrapped_vs_flat = run(RawPayload::Json(json!({
        "notification": {"title": "wrapped"},
        "title": "flat"
    })));
    assert_eq!(wrapped_vs_flat.title, "wrapped");

    // flat beats aps
    let flat_vs_aps = run(RawPayload::Json(json!({
        "body": "flat body",
        "aps": {"alert": {"title": "aps"}}
    })));
    assert_eq!(flat_vs_aps.options.body, "flat body");

    // wrapped beats aps
    let wrapped_vs_aps = run(RawPayload::Json(json!({
        "notification": {"title": "wrapped"},
        "aps": {"alert": "aps body"}
    })));
    assert_eq!(wrapped_vs_aps.title, "wrapped");
}

#[test]
fn synonym_resolution() {
    let descriptor = run(RawPayload::Json(
        json!({"notification": {"heading": "H", "message": "M"}}),
    ));
    assert_eq!(descriptor.title, "H");
    assert_eq!(descriptor.options.body, "M");
}

#[test]
fn url_fallback_chain() {
    let no_url = run(RawPayload::Json(json!({"title": "T"})));
    assert_eq!(no_url.url(), "/admin/dashboard");

    let nested = run(RawPayload::Json(json!({"title": "T", "data": {"url": "/x"}})));
    assert_eq!(nested.url(), "/x");

    let explicit = run(RawPayload::Json(
        json!({"title": "T", "url": "/y", "data": {"url": "/x"}}),
    ));
    assert_eq!(explicit.url(), "/y");
}

#[test]
fn empty_field_values_count_as_absent() {
    // Empty strings get the same truthiness as missing fields: synonyms
    // and defaults apply instead of leaking "" into the descriptor.
    let empty_title = run(RawPayload::Json(json!({"title": "", "body": "B"})));
    assert_eq!(empty_title.title, "New notification");

    let empty_over_synonym = run(RawPayload::Json(json!({"body": "", "message": "M"})));
    assert_eq!(empty_over_synonym.options.body, "M");

    let empty_url = run(RawPayload::Json(json!({"title": "T", "url": ""})));
    assert_eq!(empty_url.url(), "/admin/dashboard");

    let wrapped = run(RawPayload::Json(
        json!({"notification": {"title": "", "url": ""}}),
    ));
    assert_eq!(wrapped.title, "New notification");
    assert_eq!(wrapped.url(), "/admin/dashboard");
}

#[test]
fn absent_payload_fixed_triple() {
    let descriptor = run(RawPayload::Absent);
    assert_eq!(descriptor.title, "New Wi-Fi order");
    assert_eq!(descriptor.options.body, "You have a new verified order");
    assert_eq!(descriptor.url(), "/admin/dashboard");
    assert_eq!(descriptor.options.data.raw, None);
}

#[test]
fn unparseable_string_becomes_body() {
    let descriptor = run(RawPayload::Text("plain text".into()));
    assert_eq!(descriptor.title, "New notification");
    assert_eq!(descriptor.options.body, "plain text");
    assert_eq!(descriptor.url(), "/admin/dashboard");
    assert_eq!(descriptor.options.data.raw, None);
}

#[test]
fn unrecognized_shape_body_is_truncated() {
    let descriptor = run(RawPayload::Json(json!({"weird": "x".repeat(500)})));
    assert!(descriptor.options.body.chars().count() <= 200);
}

#[test]
fn renormalization_of_raw_is_equivalent() {
    // A descriptor's preserved raw payload, fed back in, lands on the same
    // branch and reproduces the same descriptor.
    let payload = json!({"title": "T", "body": "B", "url": "/y"});
    let first = run(RawPayload::Json(payload.clone()));
    let raw = first
        .options
        .data
        .raw
        .clone()
        .expect("flat branch preserves raw");
    assert_eq!(raw, payload);

    let second = run(RawPayload::Json(raw));
    assert_eq!(second, first);
}

#[test]
fn normalization_is_deterministic() {
    let payload = json!({"notification": {"title": "T", "body": "B"}, "url": "/u"});
    let a = run(RawPayload::Json(payload.clone()));
    let b = run(RawPayload::Json(payload));
    assert_eq!(a, b);
}

use serde_json::json;
use valuekit::{universal, Value};

#[test]
fn number_threshold_examples() {
    let threshold = Value::from(15.0);
    assert!(universal::is_null(&Value::from(14.0), "number", Some(&threshold)));
    assert!(!universal::is_null(&Value::from(16.0), "number", Some(&threshold)));
}

#[test]
fn text_equality_examples() {
    assert!(universal::equal(
        &Value::from(" Foo "),
        &Value::from("foo"),
        "text",
        true
    ));
    assert!(!universal::equal(
        &Value::from("Foo"),
        &Value::from("foo"),
        "text",
        false
    ));
}

#[test]
fn tag_spellings_reach_the_same_rules() {
    let value = Value::from(json!({}));
    for tag in ["json", "Object", "JSON-Object", " json "] {
        assert!(universal::is_null(&value, tag, None), "tag {tag:?}");
    }

    for tag in ["boolean", "flag", "Switch"] {
        assert!(!universal::is_null(&Value::Bool(false), tag, None), "tag {tag:?}");
    }
}

#[test]
fn unrecognized_tags_use_any_kind_rules() {
    // empty string is null text but a present any-value
    assert!(universal::is_null(&Value::from(""), "text", None));
    assert!(!universal::is_null(&Value::from(""), "gibberish", None));

    // any-kind equality is structural
    assert!(universal::equal(
        &Value::from(json!([1, 2])),
        &Value::from(json!([1, 2])),
        "gibberish",
        true
    ));
}

#[test]
fn nulls_never_compare_equal_outside_text() {
    for kind in ["any", "array", "boolean", "date", "json", "number"] {
        assert!(
            !universal::equal(&Value::Null, &Value::Null, kind, true),
            "kind {kind:?}"
        );
    }
    assert!(universal::equal(&Value::Null, &Value::Null, "text", true));
}

#[test]
fn fallback_degrades_to_zero_equivalents() {
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "text"),
        Value::Text(String::new())
    );
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "number"),
        Value::Number(0.0)
    );
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "boolean"),
        Value::Bool(false)
    );
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "array"),
        Value::Array(Vec::new())
    );
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "json"),
        Value::Null
    );
    assert_eq!(
        universal::fallback(&Value::Null, &Value::Unset, "date"),
        Value::Null
    );
}

#[test]
fn fallback_keeps_valid_values_of_every_kind() {
    let cases = [
        (Value::from("text"), "text"),
        (Value::from(1.5), "number"),
        (Value::Bool(true), "boolean"),
        (Value::from(json!([0])), "array"),
        (Value::from(json!({"k": 0})), "json"),
        (Value::from(0.0), "any"),
    ];

    for (value, kind) in cases {
        assert_eq!(
            universal::fallback(&value, &Value::Null, kind),
            value,
            "kind {kind:?}"
        );
    }
}

//! Kind-tag dispatch: one entry point per operation, routing to the
//! matching kind module after canonicalizing the tag. Unrecognized tags
//! get the any-kind behavior.

use crate::{any, array, boolean, date, json, number, text, Kind, Value};

/// Whether `value` is null under the rules of the declared kind.
///
/// `min_or_null` is the kind-specific extra parameter: a numeric threshold
/// for the number kind, a sentinel string for the text kind. Every other
/// kind ignores it.
///
/// # Examples
///
/// ```
/// use valuekit::{universal, Value};
///
/// assert!(universal::is_null(&Value::from(14.0), "number", Some(&Value::from(15.0))));
/// assert!(!universal::is_null(&Value::from(16.0), "number", Some(&Value::from(15.0))));
/// assert!(universal::is_null(&Value::from("N/A"), "text", Some(&Value::from("N/A"))));
/// assert!(!universal::is_null(&Value::from(0.0), "no such kind", None));
/// ```
pub fn is_null(value: &Value, kind: &str, min_or_null: Option<&Value>) -> bool {
    match Kind::parse(kind) {
        Kind::Array => array::is_null(value),
        Kind::Boolean => boolean::is_null(value),
        Kind::Date => date::check::is_null(value),
        Kind::Json => json::check::is_null(value),
        Kind::Number => number::is_null(value, min_or_null.and_then(|v| v.as_f64())),
        Kind::Text => text::check::is_null(value, min_or_null.and_then(|v| v.as_text())),
        Kind::Any => any::is_null(value),
    }
}

/// Whether `a` and `b` are equal under the rules of the declared kind.
/// Only the text kind consults `normalize`.
pub fn equal(a: &Value, b: &Value, kind: &str, normalize: bool) -> bool {
    match Kind::parse(kind) {
        Kind::Array => array::equal(a, b),
        Kind::Boolean => boolean::equal(a, b),
        Kind::Date => date::compare::equal(a, b),
        Kind::Json => json::compare::deep_equal(a, b),
        Kind::Number => number::equal(a, b),
        Kind::Text => text::compare::equal(a, b, normalize),
        Kind::Any => any::equal(a, b),
    }
}

/// `value` unless null under the declared kind; otherwise `fallback_value`,
/// degraded to the kind's zero-equivalent when the fallback is also null.
pub fn fallback(value: &Value, fallback_value: &Value, kind: &str) -> Value {
    match Kind::parse(kind) {
        Kind::Array => array::fallback_value(value, fallback_value),
        Kind::Boolean => boolean::fallback_value(value, fallback_value),
        Kind::Date => date::configure::fallback_value(value, fallback_value),
        Kind::Json => json::configure::fallback_value(value, fallback_value),
        Kind::Number => number::fallback_value(value, fallback_value),
        Kind::Text => text::configure::fallback_value(value, fallback_value),
        Kind::Any => any::fallback_value(value, fallback_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_null_dispatch() {
        assert!(is_null(&Value::from(""), "text", None));
        assert!(!is_null(&Value::from(""), "any", None));
        assert!(is_null(&Value::from(json!([])), "array", None));
        assert!(is_null(&Value::from(json!({})), "json-object", None));
        assert!(!is_null(&Value::from(json!({"a": 1})), "Object", None));
        assert!(is_null(&Value::from(0.0), "boolean", None));
        assert!(!is_null(&Value::Bool(false), "switch", None));
    }

    #[test]
    fn test_is_null_threshold_only_applies_to_numbers() {
        let threshold = Value::from(15.0);
        assert!(is_null(&Value::from(14.0), "digit", Some(&threshold)));
        assert!(!is_null(&Value::from(16.0), "digit", Some(&threshold)));
        // the extra parameter is ignored for other kinds
        assert!(!is_null(&Value::Bool(true), "boolean", Some(&threshold)));
        // and a non-numeric threshold is ignored for numbers
        assert!(!is_null(
            &Value::from(14.0),
            "number",
            Some(&Value::from("15"))
        ));
    }

    #[test]
    fn test_equal_dispatch() {
        assert!(equal(&Value::from(" A "), &Value::from("a"), "string", true));
        assert!(!equal(&Value::from(" A "), &Value::from("a"), "string", false));
        assert!(equal(
            &Value::from(json!({"a": 1})),
            &Value::from(json!({"a": 1})),
            "json",
            true
        ));
        assert!(equal(&Value::from(2.0), &Value::from(2.0), "number", true));
        // unknown kinds compare under any-kind rules
        assert!(equal(&Value::from(2.0), &Value::from(2.0), "mystery", true));
        assert!(!equal(&Value::Null, &Value::Null, "mystery", true));
    }

    #[test]
    fn test_fallback_dispatch() {
        assert_eq!(
            fallback(&Value::Null, &Value::from("fb"), "text"),
            Value::from("fb")
        );
        assert_eq!(
            fallback(&Value::from("keep"), &Value::from("fb"), "text"),
            Value::from("keep")
        );
        assert_eq!(
            fallback(&Value::Null, &Value::Null, "number"),
            Value::Number(0.0)
        );
        assert_eq!(
            fallback(&Value::Null, &Value::Null, "boolean"),
            Value::Bool(false)
        );
        assert_eq!(
            fallback(&Value::Null, &Value::Null, "array"),
            Value::Array(Vec::new())
        );
        assert_eq!(fallback(&Value::Null, &Value::Null, "json"), Value::Null);
        assert_eq!(
            fallback(&Value::Unset, &Value::Unset, "anything"),
            Value::Null
        );
    }
}

//! The `any` kind: the base-case rule set applied when no more specific
//! kind is declared (or recognized).

use crate::Value;

/// Whether `value` is one of the two absence markers.
///
/// This is the loosest of the nullness predicates: any carried payload,
/// including an empty string or an empty array, counts as present.
pub fn is_null(value: &Value) -> bool {
    value.is_absent()
}

/// Structural equality, guarded on both operands being present.
///
/// Two absent values are *not* equal to each other here; absence never
/// equals anything under this kind.
pub fn equal(a: &Value, b: &Value) -> bool {
    if is_null(a) || is_null(b) {
        return false;
    }
    a == b
}

/// `value` unless absent; otherwise `fallback_value`, degraded to
/// [`Value::Null`] when the fallback is itself absent.
pub fn fallback_value(value: &Value, fallback_value: &Value) -> Value {
    let fallback = if is_null(fallback_value) {
        Value::Null
    } else {
        fallback_value.clone()
    };

    if is_null(value) {
        fallback
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_markers_are_null() {
        assert!(is_null(&Value::Unset));
        assert!(is_null(&Value::Null));
        assert!(!is_null(&Value::Bool(false)));
        assert!(!is_null(&Value::Number(0.0)));
        assert!(!is_null(&Value::Text(String::new())));
        assert!(!is_null(&Value::Array(Vec::new())));
    }

    #[test]
    fn test_equal_rejects_absent_operands() {
        assert!(!equal(&Value::Null, &Value::Null));
        assert!(!equal(&Value::Unset, &Value::Unset));
        assert!(!equal(&Value::Null, &Value::Number(1.0)));
        assert!(equal(&Value::Number(1.0), &Value::Number(1.0)));
        assert!(!equal(&Value::Number(1.0), &Value::Text("1".into())));
    }

    #[test]
    fn test_fallback_value() {
        let value = Value::from("kept");
        let fallback = Value::from("used");

        assert_eq!(fallback_value(&value, &fallback), value);
        assert_eq!(fallback_value(&Value::Null, &fallback), fallback);
        assert_eq!(fallback_value(&Value::Unset, &Value::Null), Value::Null);
        assert_eq!(fallback_value(&Value::Unset, &Value::Unset), Value::Null);
    }
}

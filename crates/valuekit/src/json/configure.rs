use crate::json::check;
use crate::Value;

/// `value` unless null under object rules; otherwise `fallback_value`,
/// degraded to [`Value::Null`] when the fallback is itself null.
pub fn fallback_value(value: &Value, fallback_value: &Value) -> Value {
    let fallback = if check::is_null(fallback_value) {
        Value::Null
    } else {
        fallback_value.clone()
    };

    if check::is_null(value) {
        fallback
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_value() {
        let value = Value::from(json!({"a": 1}));
        let fb = Value::from(json!({"fb": true}));

        assert_eq!(fallback_value(&value, &fb), value);
        assert_eq!(fallback_value(&Value::Null, &fb), fb);
        assert_eq!(fallback_value(&Value::from(json!({})), &fb), fb);
        assert_eq!(fallback_value(&Value::Null, &Value::from(json!({}))), Value::Null);
        assert_eq!(fallback_value(&Value::Null, &Value::Unset), Value::Null);
    }
}

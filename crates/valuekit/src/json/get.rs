use chrono::{DateTime, Utc};

use crate::json::check;
use crate::Value;

/// Extract a field from an object, typed per `kind`.
///
/// Returns `default` when `obj` is null under object rules, when the own
/// key `field_name` is missing, or when the field's value is null under the
/// declared kind's rules; otherwise the field's value.
///
/// # Examples
///
/// ```
/// use valuekit::{json, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"x": 5}));
/// let miss = Value::from(json!({}));
///
/// assert_eq!(json::get::field_value(&obj, "x", "number", Value::from(-1.0)), Value::from(5.0));
/// assert_eq!(json::get::field_value(&miss, "x", "number", Value::from(-1.0)), Value::from(-1.0));
/// ```
pub fn field_value(obj: &Value, field_name: &str, kind: &str, default: Value) -> Value {
    match obj {
        Value::Object(map) if check::has_non_null_field(obj, field_name, kind) => {
            map.get(field_name).cloned().unwrap_or(default)
        }
        _ => default,
    }
}

/// [`field_value`] under any-kind rules; absent fields yield [`Value::Null`].
pub fn field_any(obj: &Value, field_name: &str) -> Value {
    field_value(obj, field_name, "any", Value::Null)
}

/// A sequence field's elements; empty when missing or null.
pub fn field_array(obj: &Value, field_name: &str) -> Vec<Value> {
    match field_value(obj, field_name, "array", Value::Array(Vec::new())) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// A boolean field's flag; `false` when missing or null.
pub fn field_bool(obj: &Value, field_name: &str) -> bool {
    match field_value(obj, field_name, "boolean", Value::Bool(false)) {
        Value::Bool(flag) => flag,
        _ => false,
    }
}

/// A date field's timestamp; `None` when missing or null.
pub fn field_date(obj: &Value, field_name: &str) -> Option<DateTime<Utc>> {
    match field_value(obj, field_name, "date", Value::Null) {
        Value::Date(d) => Some(d),
        _ => None,
    }
}

/// A nested object field; [`Value::Null`] when missing or null.
pub fn field_object(obj: &Value, field_name: &str) -> Value {
    field_value(obj, field_name, "json", Value::Null)
}

/// A numeric field's value; `None` when missing or null.
pub fn field_number(obj: &Value, field_name: &str) -> Option<f64> {
    match field_value(obj, field_name, "number", Value::Null) {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// A text field's content; empty when missing or null.
pub fn field_text(obj: &Value, field_name: &str) -> String {
    match field_value(obj, field_name, "text", Value::Text(String::new())) {
        Value::Text(s) => s,
        _ => String::new(),
    }
}

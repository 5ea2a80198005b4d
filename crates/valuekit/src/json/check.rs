use tracing::debug;

use crate::error::ValueError;
use crate::{any, array, boolean, date, number, text, Kind, Map, Value};

/// Whether `value` is a plain keyed object, either directly or as JSON
/// text that parses to one.
///
/// Sequences, calendar values, and pattern matchers are not objects, and
/// JSON text encoding anything but an object does not count.
///
/// # Examples
///
/// ```
/// use valuekit::{json, Value};
///
/// assert!(json::check::is_valid(&Value::from(serde_json::json!({"a": 1}))));
/// assert!(json::check::is_valid(&Value::from("{\"a\": 1}")));
/// assert!(!json::check::is_valid(&Value::from("[1, 2]")));
/// assert!(!json::check::is_valid(&Value::Null));
/// ```
pub fn is_valid(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Text(s) => parse_object(s).is_ok(),
        _ => false,
    }
}

/// Whether `value` is null under object rules: not a valid object, or a
/// valid object with zero keys.
///
/// The zero-key case is the one place where validity and nullness diverge:
/// `{}` is a perfectly valid object and null all the same, while
/// `{"a": null}` is non-null regardless of what its key holds.
pub fn is_null(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Text(s) => match parse_object(s) {
            Ok(map) => map.is_empty(),
            Err(err) => {
                debug!(%err, "text value is not a JSON object");
                true
            }
        },
        _ => true,
    }
}

/// Whether `obj` is a non-null object carrying the own key `field_name`.
///
/// JSON-encoded text has no own keys, so field presence is only ever true
/// for direct objects.
pub fn has_field(obj: &Value, field_name: &str) -> bool {
    match obj {
        Value::Object(map) => !map.is_empty() && map.contains_key(field_name),
        _ => false,
    }
}

/// Whether `obj` carries `field_name` *and* the field's value is non-null
/// under the rules of the declared kind.
pub fn has_non_null_field(obj: &Value, field_name: &str, kind: &str) -> bool {
    let field = match obj {
        Value::Object(map) if has_field(obj, field_name) => match map.get(field_name) {
            Some(field) => field,
            None => return false,
        },
        _ => return false,
    };

    match Kind::parse(kind) {
        Kind::Array => !array::is_null(field),
        Kind::Boolean => !boolean::is_null(field),
        Kind::Date => !date::check::is_null(field),
        Kind::Json => !is_null(field),
        Kind::Number => !number::is_null(field, None),
        Kind::Text => !text::check::is_null(field, None),
        Kind::Any => !any::is_null(field),
    }
}

pub(crate) fn parse_object(s: &str) -> Result<Map, ValueError> {
    let parsed: serde_json::Value = serde_json::from_str(s)?;
    match Value::from(parsed) {
        Value::Object(map) => Ok(map),
        other => Err(ValueError::NotAnObject(other.type_name())),
    }
}

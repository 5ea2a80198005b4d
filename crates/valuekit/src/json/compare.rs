use crate::json::{check, get};
use crate::{any, array, boolean, date, number, text, Kind, Value};

/// Deep equality over keyed objects.
///
/// Two non-null objects are equal iff they have the same key count, every
/// key of the first exists in the second, and the corresponding values are
/// recursively equal. Anything else, including a null operand on either
/// side, compares structurally, so the relation stays reflexive and
/// symmetric for finite trees.
///
/// # Examples
///
/// ```
/// use valuekit::{json, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"x": {"y": [1, 2]}}));
/// let b = Value::from(json!({"x": {"y": [1, 2]}}));
/// let c = Value::from(json!({"x": {"y": [1, 3]}}));
///
/// assert!(json::compare::deep_equal(&a, &b));
/// assert!(!json::compare::deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a_map), Value::Object(b_map))
            if !a_map.is_empty() && !b_map.is_empty() =>
        {
            if a_map.len() != b_map.len() {
                return false;
            }
            for (key, a_val) in a_map {
                match b_map.get(key) {
                    Some(b_val) => {
                        if !deep_equal(a_val, b_val) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }
        _ => a == b,
    }
}

/// Extract `field_name` from `obj` (typed per `kind`) and compare it
/// against `against` with the kind's comparator. Text comparison works on
/// the string coercions of both sides and honors `normalize`.
pub fn field_equals(
    obj: &Value,
    field_name: &str,
    against: &Value,
    kind: &str,
    normalize: bool,
) -> bool {
    let field = get::field_value(obj, field_name, kind, Value::Null);

    match Kind::parse(kind) {
        Kind::Array => array::equal(&field, against),
        Kind::Boolean => boolean::equal(&field, against),
        Kind::Date => date::compare::equal(&field, against),
        Kind::Json => deep_equal(&field, against),
        Kind::Number => number::equal(&field, against),
        Kind::Text => {
            text::compare::equal_str(&field.to_string(), &against.to_string(), normalize)
        }
        Kind::Any => any::equal(&field, against),
    }
}

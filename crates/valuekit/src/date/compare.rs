use crate::date::check;
use crate::Value;

/// Timestamp equality at millisecond precision, guarded on both operands
/// being calendar values.
pub fn equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Date(a), Value::Date(b)) => a.timestamp_millis() == b.timestamp_millis(),
        _ => false,
    }
}

/// Whether `value` is null under date rules, or equal to a valid sentinel
/// date.
pub fn is_null_or(value: &Value, sentinel: &Value) -> bool {
    if check::is_null(sentinel) {
        check::is_null(value)
    } else {
        check::is_null(value) || equal(value, sentinel)
    }
}

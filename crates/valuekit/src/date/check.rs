use crate::Value;

/// Whether `value` carries a calendar timestamp.
pub fn is_valid(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Whether `value` is null under date rules: absent, or anything that is
/// not a calendar timestamp.
pub fn is_null(value: &Value) -> bool {
    !is_valid(value)
}

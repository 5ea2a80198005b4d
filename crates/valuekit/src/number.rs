//! The `number` kind (tags: `number`, `digit`).

use crate::value::number_to_string;
use crate::{any, Value};

/// Whether `value` carries a finite number.
pub fn is_valid(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// Whether `value` is null under numeric rules: absent, not a finite
/// number, or (when a threshold is supplied) at or below that threshold.
///
/// # Examples
///
/// ```
/// use valuekit::{number, Value};
///
/// assert!(number::is_null(&Value::from(14.0), Some(15.0)));
/// assert!(!number::is_null(&Value::from(16.0), Some(15.0)));
/// assert!(number::is_null(&Value::from(f64::NAN), None));
/// ```
pub fn is_null(value: &Value, min: Option<f64>) -> bool {
    let mut null = any::is_null(value) || !is_valid(value);

    if let (Some(min), Value::Number(n)) = (min, value) {
        null = null || *n <= min;
    }

    null
}

/// Numeric equality, guarded on both operands being finite numbers.
pub fn equal(a: &Value, b: &Value) -> bool {
    if is_null(a, None) || is_null(b, None) {
        return false;
    }
    a == b
}

/// The carried number, or `fallback_value` when `value` is null under
/// numeric rules.
pub fn fallback(value: &Value, fallback_value: f64) -> f64 {
    match value {
        Value::Number(n) if n.is_finite() => *n,
        _ => fallback_value,
    }
}

/// Value-level fallback: a null fallback degrades to `0`.
pub fn fallback_value(value: &Value, fallback_value: &Value) -> Value {
    Value::Number(fallback(value, fallback(fallback_value, 0.0)))
}

/// Render `value` left-padded to `digit_length` characters.
///
/// Values that are null against a threshold of `-1` (including NaN and
/// anything at or below `-1`) render unpadded.
///
/// # Examples
///
/// ```
/// use valuekit::number;
///
/// assert_eq!(number::pad_left(7.0, 3, '0'), "007");
/// assert_eq!(number::pad_left(1234.0, 2, '0'), "1234");
/// assert_eq!(number::pad_left(-5.0, 4, '0'), "-5");
/// ```
pub fn pad_left(value: f64, digit_length: usize, pad: char) -> String {
    if is_null(&Value::Number(value), Some(-1.0)) {
        return number_to_string(value);
    }

    let rendered = number_to_string(value);
    let width = rendered.chars().count();
    if width >= digit_length {
        return rendered;
    }

    let mut padded = pad.to_string().repeat(digit_length - width);
    padded.push_str(&rendered);
    padded
}

use std::cmp::Ordering;

use crate::{any, boolean, json, number, text, Kind, Value};

/// Options for [`sort_by_field`].
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Reverse the numeric orderings. Text ordering is always ascending.
    pub descending: bool,
    /// Move records matching [`SortOptions::pin_values`] to the front.
    pub pin_to_top: bool,
    /// Field values to pin, in priority order: the first entry ends up
    /// first in the output.
    pub pin_values: Vec<Value>,
    /// Normalize text before keying, matching, and pin lookup.
    pub normalize: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            descending: false,
            pin_to_top: false,
            pin_values: vec![Value::from("Select All")],
            normalize: true,
        }
    }
}

/// Sort records by the value of `field_name`, interpreted per `kind`.
///
/// Every record gets a derived, string-coerced sort key: booleans default
/// null to `false`, dates become millisecond timestamps (null → epoch 0),
/// numbers default null to `0`, text defaults null to the empty string and
/// is optionally normalized, and any other kind passes the value through
/// (null → null). The text kind orders keys as strings, ascending always;
/// every other kind orders them numerically, reversed by
/// [`SortOptions::descending`]. The sort is stable, so records tied on
/// their key keep their input order.
///
/// With [`SortOptions::pin_to_top`], records whose key matches a pin value
/// are pulled out of the main sequence and re-attached at the front, one
/// record per pin value, in pin priority order. Pin values that coerce to
/// their kind's zero-equivalent are skipped, and a pin value matching no
/// record contributes nothing.
///
/// The scratch key never appears in the returned records.
///
/// # Examples
///
/// ```
/// use valuekit::json::array::{sort_by_field, SortOptions};
/// use valuekit::Value;
/// use serde_json::json;
///
/// let items = vec![
///     Value::from(json!({"n": "B"})),
///     Value::from(json!({"n": "A"})),
///     Value::from(json!({"n": "C"})),
/// ];
///
/// let sorted = sort_by_field(&items, "n", "text", &SortOptions::default());
/// assert_eq!(sorted[0], Value::from(json!({"n": "A"})));
/// assert_eq!(sorted[1], Value::from(json!({"n": "B"})));
/// assert_eq!(sorted[2], Value::from(json!({"n": "C"})));
/// ```
pub fn sort_by_field(
    records: &[Value],
    field_name: &str,
    kind: &str,
    options: &SortOptions,
) -> Vec<Value> {
    let parsed_kind = Kind::parse(kind);

    let pins: Vec<Value> = options
        .pin_values
        .iter()
        .map(|pin| coerce_key(pin, parsed_kind, options.normalize))
        .collect();
    let pin_keys: Vec<String> = pins.iter().map(Value::to_string).collect();

    let mut keyed: Vec<(String, Value)> = records
        .iter()
        .map(|record| {
            let field = json::get::field_value(record, field_name, kind, Value::Null);
            let key = coerce_key(&field, parsed_kind, options.normalize).to_string();
            (key, record.clone())
        })
        .collect();

    match parsed_kind {
        Kind::Text => keyed.sort_by(|(a, _), (b, _)| a.cmp(b)),
        _ => keyed.sort_by(|(a, _), (b, _)| {
            let ordering = numeric_key(a)
                .partial_cmp(&numeric_key(b))
                .unwrap_or(Ordering::Equal);
            if options.descending {
                ordering.reverse()
            } else {
                ordering
            }
        }),
    }

    let mut set_aside: Vec<(String, Value)> = Vec::new();
    let mut sorted: Vec<Value> = Vec::new();
    for (key, record) in keyed {
        if options.pin_to_top && pin_keys.contains(&key) {
            set_aside.push((key, record));
        } else {
            sorted.push(record);
        }
    }

    // Resolve pins back to front so the first pin value ends up first after
    // the final reversal; each pin consumes at most one record.
    let mut top: Vec<Value> = Vec::new();
    for pin in pins.iter().rev() {
        if !pin_usable(pin) {
            continue;
        }
        let pin_key = pin.to_string();
        let found = set_aside
            .iter()
            .position(|(key, _)| text::compare::equal_str(key, &pin_key, options.normalize));
        if let Some(index) = found {
            let (_, record) = set_aside.remove(index);
            top.push(record);
        }
    }
    top.reverse();

    top.extend(sorted);
    top
}

/// The kind-coerced sort key for a field value.
fn coerce_key(value: &Value, kind: Kind, normalize: bool) -> Value {
    match kind {
        Kind::Boolean => Value::Bool(boolean::fallback(value, false)),
        Kind::Date => match value {
            Value::Date(d) => Value::Number(d.timestamp_millis() as f64),
            _ => Value::Number(0.0),
        },
        Kind::Number => Value::Number(number::fallback(value, 0.0)),
        Kind::Text => {
            let content = text::configure::fallback(value, "");
            Value::Text(if normalize {
                text::configure::for_search(&content, false)
            } else {
                content
            })
        }
        _ => {
            if any::is_null(value) {
                Value::Null
            } else {
                value.clone()
            }
        }
    }
}

fn numeric_key(key: &str) -> f64 {
    key.parse().unwrap_or(0.0)
}

/// Pins whose coerced value is a zero-equivalent never resolve.
fn pin_usable(pin: &Value) -> bool {
    match pin {
        Value::Unset | Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::Text(s) => !s.is_empty(),
        _ => true,
    }
}

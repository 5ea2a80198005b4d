use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;

use crate::error::ValueError;

/// Insertion-ordered map backing [`Value::Object`].
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed value.
///
/// This is the payload every helper in this crate operates on. The caller
/// declares how a value should be interpreted through a kind tag
/// ([`crate::Kind`]); the value itself carries no such interpretation.
///
/// Two variants represent absence and are interchangeable everywhere:
/// [`Value::Unset`] ("no value") and [`Value::Null`] ("unset"). Each kind
/// module defines its own, wider notion of nullness on top of these.
///
/// # Examples
///
/// ```
/// use valuekit::Value;
///
/// let v = Value::from(serde_json::json!({"name": "Ada", "age": 36}));
/// assert!(matches!(v, Value::Object(_)));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The "no value" absence marker.
    Unset,
    /// The "unset" absence marker; interchangeable with [`Value::Unset`].
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A numeric value. NaN and the infinities are representable but are
    /// never valid numbers.
    Number(f64),
    /// A text value.
    Text(String),
    /// A calendar timestamp (UTC).
    Date(DateTime<Utc>),
    /// A compiled pattern matcher.
    Pattern(Regex),
    /// A sequence of values.
    Array(Vec<Value>),
    /// A keyed object with insertion-ordered keys.
    Object(Map),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unset, Value::Unset) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // NaN != NaN, by f64 semantics
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Whether this is one of the two absence markers.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Unset | Value::Null)
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number. No finiteness check is
    /// applied here; see [`crate::number::is_valid`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The timestamp payload, if this is a date.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The underlying map, if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// A short name for the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unset => "unset",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Pattern(_) => "pattern",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Parse JSON text into a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use valuekit::Value;
    ///
    /// let v = Value::from_json_text("{\"a\": 1}").unwrap();
    /// assert!(matches!(v, Value::Object(_)));
    /// assert!(Value::from_json_text("not json").is_err());
    /// ```
    pub fn from_json_text(text: &str) -> Result<Value, ValueError> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(parsed))
    }

    /// Convert to a `serde_json::Value`, if the tree is pure JSON.
    ///
    /// Returns `None` when the tree contains an `Unset`, a date, or a
    /// pattern anywhere, since those have no JSON form.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Unset | Value::Date(_) | Value::Pattern(_) => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(flag) => Some(serde_json::Value::Bool(*flag)),
            Value::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
            Value::Text(s) => Some(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| value.to_json().map(|v| (key.clone(), v)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
        }
    }

    /// Convert to a `serde_json::Value`, substituting renderable stand-ins
    /// for the non-JSON variants: `Unset` becomes null, dates their RFC 3339
    /// form, patterns their source text, non-finite numbers null.
    pub fn to_json_lossy(&self) -> serde_json::Value {
        match self {
            Value::Unset | Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Pattern(re) => serde_json::Value::String(re.as_str().to_string()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json_lossy).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json_lossy()))
                    .collect(),
            ),
        }
    }
}

/// Render a number the way the coercion rules expect: integral values carry
/// no fraction part, NaN and the infinities keep their spelled-out names.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Largest range where every integral f64 maps to a distinct i64.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return format!("{}", n as i64);
    }
    format!("{n}")
}

/// The string coercion used for sort keys, duplicate keys, and record
/// lookup. Absence markers render as `"unset"` / `"null"`; containers render
/// as their JSON form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unset => f.write_str("unset"),
            Value::Null => f.write_str("null"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Pattern(re) => f.write_str(re.as_str()),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", self.to_json_lossy()),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::Pattern(re)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

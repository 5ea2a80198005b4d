//! Helpers over arrays of records (keyed objects): lookup, de-duplication,
//! filtering, and the field-sort with pin-to-top support.

pub mod filter;
pub mod find;
pub mod sort;

pub use sort::{sort_by_field, SortOptions};

use crate::Value;

/// A record's raw field, with a borrowed absence marker standing in for a
/// missing key or a non-object record.
pub(crate) fn record_field<'a>(record: &'a Value, field_name: &str) -> &'a Value {
    static UNSET: Value = Value::Unset;
    match record {
        Value::Object(map) => map.get(field_name).unwrap_or(&UNSET),
        _ => &UNSET,
    }
}

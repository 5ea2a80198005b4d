use crate::json::array::record_field;
use crate::{text, Value};

/// First record whose `field_name` text-compares equal to `search`.
///
/// Non-text field values are treated as null text, so they only match an
/// empty (null) search value.
pub fn find_record<'a>(
    records: &'a [Value],
    field_name: &str,
    search: &str,
    normalize: bool,
) -> Option<&'a Value> {
    let needle = Value::from(search);
    records
        .iter()
        .find(|record| text::compare::equal(record_field(record, field_name), &needle, normalize))
}

/// Index of the first record matching `search`, if any.
pub fn find_index(records: &[Value], field_name: &str, search: &str, normalize: bool) -> Option<usize> {
    let needle = Value::from(search);
    records
        .iter()
        .position(|record| text::compare::equal(record_field(record, field_name), &needle, normalize))
}

/// Whether any record matches `search`.
pub fn contains(records: &[Value], field_name: &str, search: &str, normalize: bool) -> bool {
    find_index(records, field_name, search, normalize).is_some()
}

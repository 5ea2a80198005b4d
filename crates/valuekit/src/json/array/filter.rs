use indexmap::IndexMap;

use crate::json::array::record_field;
use crate::{text, Value};

/// Drop records whose `field_name` repeats an earlier record's value; the
/// first record wins. Values are compared by string coercion; output keeps
/// first-appearance order.
pub fn remove_duplicates(records: &[Value], field_name: &str) -> Vec<Value> {
    let mut seen: IndexMap<String, Value> = IndexMap::new();

    for record in records {
        let key = record_field(record, field_name).to_string();
        seen.entry(key).or_insert_with(|| record.clone());
    }

    seen.into_values().collect()
}

/// Keep (or, with `keep_matches` unset, drop) every record whose
/// `field_name` text-compares equal to `filter_value`.
pub fn filter(
    records: &[Value],
    field_name: &str,
    filter_value: &str,
    keep_matches: bool,
    normalize: bool,
) -> Vec<Value> {
    let needle = Value::from(filter_value);

    records
        .iter()
        .filter(|record| {
            let matched =
                text::compare::equal(record_field(record, field_name), &needle, normalize);
            if keep_matches {
                matched
            } else {
                !matched
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_duplicates_first_wins() {
        let records = vec![
            Value::from(json!({"id": "a", "n": 1})),
            Value::from(json!({"id": "b", "n": 2})),
            Value::from(json!({"id": "a", "n": 3})),
        ];

        let unique = remove_duplicates(&records, "id");
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0], records[0]);
        assert_eq!(unique[1], records[1]);
    }

    #[test]
    fn test_remove_duplicates_missing_field_collapses() {
        let records = vec![
            Value::from(json!({"other": 1})),
            Value::from(json!({"other": 2})),
        ];
        // both records coerce to the same absent key
        assert_eq!(remove_duplicates(&records, "id").len(), 1);
    }

    #[test]
    fn test_filter_keep_and_drop() {
        let records = vec![
            Value::from(json!({"status": "Open"})),
            Value::from(json!({"status": "closed"})),
            Value::from(json!({"status": "OPEN"})),
        ];

        let kept = filter(&records, "status", "open", true, true);
        assert_eq!(kept.len(), 2);

        let dropped = filter(&records, "status", "open", false, true);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0], records[1]);

        let exact = filter(&records, "status", "Open", true, false);
        assert_eq!(exact.len(), 1);
    }
}

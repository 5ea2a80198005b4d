use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

use crate::error::ValueError;
use crate::text;
use crate::Value;

/// Normalize text for comparison and lookup: trim, case-fold (lowercase by
/// default, uppercase on request), and strip every remaining whitespace
/// character.
///
/// # Examples
///
/// ```
/// use valuekit::text::configure::for_search;
///
/// assert_eq!(for_search("  Foo Bar\t", false), "foobar");
/// assert_eq!(for_search("Foo Bar", true), "FOOBAR");
/// ```
pub fn for_search(value: &str, make_upper_case: bool) -> String {
    let trimmed = value.trim();
    let cased = if make_upper_case {
        trimmed.to_uppercase()
    } else {
        trimmed.to_lowercase()
    };
    cased.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The carried text, or `fallback_value` when `value` is null under text
/// rules.
pub fn fallback(value: &Value, fallback_value: &str) -> String {
    match value {
        Value::Text(s) if !s.is_empty() => s.clone(),
        _ => fallback_value.to_string(),
    }
}

/// Value-level fallback: a null fallback degrades to the empty string.
pub fn fallback_value(value: &Value, fallback_value: &Value) -> Value {
    Value::Text(fallback(value, &fallback(fallback_value, "")))
}

/// `value` repeated `times` times; zero repetitions yield the empty string.
pub fn repeat(value: &str, times: usize) -> String {
    value.repeat(times)
}

/// Replace a literal `pattern` inside `original`.
///
/// The pattern is matched verbatim (no meta-characters), first occurrence
/// only unless `all` is set, optionally case-insensitively. Null inputs and
/// pattern build failures return `original` unchanged.
///
/// # Examples
///
/// ```
/// use valuekit::text::configure::replace;
///
/// assert_eq!(replace("a.b.c", ".", "-", true, false), "a-b-c");
/// assert_eq!(replace("a.b.c", ".", "-", false, false), "a-b.c");
/// assert_eq!(replace("Hello hello", "HELLO", "bye", true, true), "bye bye");
/// ```
pub fn replace(
    original: &str,
    pattern: &str,
    replacement: &str,
    all: bool,
    ignore_case: bool,
) -> String {
    if text::check::is_null(&Value::from(original), None)
        || text::check::is_null(&Value::from(pattern), None)
    {
        return original.to_string();
    }

    match build_literal_pattern(pattern, ignore_case) {
        Ok(re) => {
            if all {
                re.replace_all(original, NoExpand(replacement)).into_owned()
            } else {
                re.replace(original, NoExpand(replacement)).into_owned()
            }
        }
        Err(err) => {
            debug!(%err, "replace pattern rejected, returning input unchanged");
            original.to_string()
        }
    }
}

fn build_literal_pattern(pattern: &str, ignore_case: bool) -> Result<Regex, ValueError> {
    let re = RegexBuilder::new(&regex::escape(pattern))
        .case_insensitive(ignore_case)
        .build()?;
    Ok(re)
}

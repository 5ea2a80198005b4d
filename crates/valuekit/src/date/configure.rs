use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::debug;

use crate::date::{check, get};
use crate::{number, text, Value};

/// Return a copy of `date` with the time of day replaced.
///
/// Out-of-range components leave the input unchanged.
pub fn set_time(date: DateTime<Utc>, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    let adjusted = date
        .with_hour(hour)
        .and_then(|d| d.with_minute(minute))
        .and_then(|d| d.with_second(second))
        .and_then(|d| d.with_nanosecond(0));

    match adjusted {
        Some(d) => d,
        None => {
            debug!(hour, minute, second, "time of day out of range, keeping input");
            date
        }
    }
}

/// Clamp the time of day to the start (00:00:00) or the end (23:59:59) of
/// the calendar day.
pub fn at_time_of_day(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    if evening {
        set_time(date, 23, 59, 59)
    } else {
        set_time(date, 0, 0, 0)
    }
}

/// The carried date, or `fallback_value` when `value` is null under date
/// rules; either way the time of day is clamped per `evening`.
pub fn fallback(value: &Value, fallback_value: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    let date = match value {
        Value::Date(d) => *d,
        _ => fallback_value,
    };
    at_time_of_day(date, evening)
}

/// Value-level fallback: a null fallback degrades to [`Value::Null`]. No
/// time-of-day clamp is applied at this level.
pub fn fallback_value(value: &Value, fallback_value: &Value) -> Value {
    let fallback = if check::is_null(fallback_value) {
        Value::Null
    } else {
        fallback_value.clone()
    };

    if check::is_null(value) {
        fallback
    } else {
        value.clone()
    }
}

/// Render the wire-format timestamp expected by the backing store:
/// `YYYY-MM-DDTHH:MM:SS.000Z` for the morning flank, `.999Z` for the
/// evening one.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use valuekit::date::configure::backend_timestamp;
///
/// let d = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
/// assert_eq!(backend_timestamp(d, false), "2024-05-17T08:30:00.000Z");
/// assert_eq!(backend_timestamp(d, true), "2024-05-17T08:30:00.999Z");
/// ```
pub fn backend_timestamp(date: DateTime<Utc>, evening: bool) -> String {
    format!(
        "{}{}",
        date.format("%Y-%m-%dT%H:%M:%S"),
        if evening { ".999Z" } else { ".000Z" }
    )
}

/// The first or last day of `date`'s month, time clamped per `evening`.
pub fn month_period(date: DateTime<Utc>, beginning: bool, evening: bool) -> DateTime<Utc> {
    if beginning {
        get::start_of_month(date, evening)
    } else {
        get::end_of_month(date, evening)
    }
}

/// Render `date` in one of a closed set of display formats.
///
/// The format tag is matched case- and whitespace-insensitively against
/// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `DD MMM YYYY HH:MM:SS`,
/// `DD MMM YYYY`, and `DD MMMM YYYY`; anything else renders as
/// `DD MMMM YYYY HH:MM:SS`. Months render as (possibly abbreviated) names
/// in every format.
pub fn format(date: DateTime<Utc>, format_tag: &str) -> String {
    let tag = text::configure::for_search(format_tag, false);

    let month = date.month0() as usize;
    let short_month = get::month_name(month, 3);
    let long_month = get::month_name(month, 0);
    let year = date.year();
    let day = number::pad_left(date.day() as f64, 2, '0');
    let time = format!(
        "{}:{}:{}",
        number::pad_left(date.hour() as f64, 2, '0'),
        number::pad_left(date.minute() as f64, 2, '0'),
        number::pad_left(date.second() as f64, 2, '0'),
    );

    match tag.as_str() {
        "yyyy-mm-dd" => format!("{year}-{short_month}-{day}"),
        "yyyy-mm-ddhh:mm:ss" => format!("{year}-{short_month}-{day} {time}"),
        "ddmmmyyyyhh:mm:ss" => format!("{day} {short_month} {year} {time}"),
        "ddmmmyyyy" => format!("{day} {short_month} {year}"),
        "ddmmmmyyyy" => format!("{day} {long_month} {year}"),
        _ => format!("{day} {long_month} {year} {time}"),
    }
}

use chrono::{DateTime, Datelike, Days, Months, TimeDelta, Utc, Weekday};
use tracing::debug;

use crate::date::configure;
use crate::number;

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of the 0-based `month`, truncated to `length` characters when
/// `length` is non-zero and shorter than the full name.
pub fn month_name(month: usize, length: usize) -> String {
    let name = MONTH_NAMES[month % 12];
    if length > 0 && length < name.len() {
        name[..length].to_string()
    } else {
        name.to_string()
    }
}

/// January 1st of `date`'s year, time clamped per `evening`.
pub fn start_of_year(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    match date.with_day(1).and_then(|d| d.with_month(1)) {
        Some(d) => configure::at_time_of_day(d, evening),
        None => {
            debug!("start-of-year adjustment failed, keeping input");
            date
        }
    }
}

/// December 31st of `date`'s year, time clamped per `evening`.
pub fn end_of_year(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    let adjusted = date
        .with_day(1)
        .and_then(|d| d.with_month(12))
        .and_then(|d| d.with_day(31));

    match adjusted {
        Some(d) => configure::at_time_of_day(d, evening),
        None => {
            debug!("end-of-year adjustment failed, keeping input");
            date
        }
    }
}

/// The first day of `date`'s month, time clamped per `evening`.
pub fn start_of_month(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    match date.with_day(1) {
        Some(d) => configure::at_time_of_day(d, evening),
        None => {
            debug!("start-of-month adjustment failed, keeping input");
            date
        }
    }
}

/// The last day of `date`'s month, time clamped per `evening`.
pub fn end_of_month(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    let adjusted = date
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .and_then(|d| d.checked_sub_days(Days::new(1)));

    match adjusted {
        Some(d) => configure::at_time_of_day(d, evening),
        None => {
            debug!("end-of-month adjustment failed, keeping input");
            date
        }
    }
}

/// Days back to the most recent Monday (0 when `date` already is one),
/// negated on request.
pub fn days_to_previous_monday(date: DateTime<Utc>, make_negative: bool) -> i64 {
    let days = match date.weekday() {
        Weekday::Sun => 6,
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
    };
    if make_negative {
        -days
    } else {
        days
    }
}

/// Days forward to the Monday after next weekend (a full week when `date`
/// is already a Monday), negated on request.
pub fn days_to_next_monday(date: DateTime<Utc>, make_negative: bool) -> i64 {
    let days = match date.weekday() {
        Weekday::Sun => 8,
        Weekday::Mon => 7,
        Weekday::Tue => 6,
        Weekday::Wed => 5,
        Weekday::Thu => 4,
        Weekday::Fri => 3,
        Weekday::Sat => 2,
    };
    if make_negative {
        -days
    } else {
        days
    }
}

/// The inclusive list of years from `oldest` through `latest`; empty when
/// the bounds are inverted.
pub fn years(oldest: i32, latest: i32) -> Vec<i32> {
    if latest < oldest {
        return Vec::new();
    }
    (oldest..=latest).collect()
}

/// The twelve months, either as names (truncated to `length` when
/// non-zero) or as 1-based numbers left-padded to `length` digits.
///
/// # Examples
///
/// ```
/// use valuekit::date::get::months;
///
/// assert_eq!(months(true, 3)[0], "Jan");
/// assert_eq!(months(false, 2)[0], "01");
/// assert_eq!(months(false, 0)[11], "12");
/// ```
pub fn months(as_names: bool, length: usize) -> Vec<String> {
    if as_names {
        (0..12).map(|m| month_name(m, length)).collect()
    } else {
        (1..=12)
            .map(|m| {
                if length > 0 {
                    number::pad_left(f64::from(m), length, '0')
                } else {
                    m.to_string()
                }
            })
            .collect()
    }
}

/// `date` moved by `days` (either direction), time clamped per `evening`.
pub fn offset_days(date: DateTime<Utc>, days: i64, evening: bool) -> DateTime<Utc> {
    let adjusted = TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta));

    match adjusted {
        Some(d) => configure::at_time_of_day(d, evening),
        None => {
            debug!(days, "day offset out of range, keeping input");
            configure::at_time_of_day(date, evening)
        }
    }
}

/// The day before `date`, time clamped per `evening`.
pub fn previous_day(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    offset_days(date, -1, evening)
}

/// The day after `date`, time clamped per `evening`.
pub fn next_day(date: DateTime<Utc>, evening: bool) -> DateTime<Utc> {
    offset_days(date, 1, evening)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_year_boundaries() {
        let input = date(2024, 5, 17);
        assert_eq!(
            start_of_year(input, false),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            end_of_year(input, true),
            Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_month_boundaries() {
        let input = date(2024, 2, 14);
        assert_eq!(
            start_of_month(input, false),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
        );
        // leap February
        assert_eq!(
            end_of_month(input, false),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
        assert_eq!(
            end_of_month(date(2023, 2, 14), false),
            Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_end_of_month_from_a_31st() {
        assert_eq!(
            end_of_month(date(2024, 1, 31), false),
            Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_monday_distances() {
        // 2024-05-17 is a Friday
        let friday = date(2024, 5, 17);
        assert_eq!(days_to_previous_monday(friday, false), 4);
        assert_eq!(days_to_previous_monday(friday, true), -4);
        assert_eq!(days_to_next_monday(friday, false), 3);

        // 2024-05-13 is a Monday
        let monday = date(2024, 5, 13);
        assert_eq!(days_to_previous_monday(monday, false), 0);
        assert_eq!(days_to_next_monday(monday, false), 7);

        // 2024-05-19 is a Sunday
        let sunday = date(2024, 5, 19);
        assert_eq!(days_to_previous_monday(sunday, false), 6);
        assert_eq!(days_to_next_monday(sunday, false), 8);
    }

    #[test]
    fn test_years() {
        assert_eq!(years(2018, 2021), vec![2018, 2019, 2020, 2021]);
        assert_eq!(years(2021, 2021), vec![2021]);
        assert!(years(2022, 2021).is_empty());
    }

    #[test]
    fn test_months() {
        let names = months(true, 0);
        assert_eq!(names[0], "January");
        assert_eq!(names[11], "December");

        let short = months(true, 3);
        assert_eq!(short[8], "Sep");
        assert_eq!(short[4], "May");

        let numbers = months(false, 2);
        assert_eq!(numbers[0], "01");
        assert_eq!(numbers[11], "12");
    }

    #[test]
    fn test_day_stepping() {
        let input = date(2024, 3, 1);
        assert_eq!(
            previous_day(input, false),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
        assert_eq!(
            next_day(input, true),
            Utc.with_ymd_and_hms(2024, 3, 2, 23, 59, 59).unwrap()
        );
        assert_eq!(
            offset_days(input, 14, false),
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
    }
}

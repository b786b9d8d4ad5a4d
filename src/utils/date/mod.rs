// Date utility functions
// Calendar-date parsing and week/month boundary helpers shared by the timeline

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};

/// Formats accepted for timestamps that carry a time-of-day but no offset.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a textual date into a calendar date, dropping any time-of-day.
///
/// Accepts plain `YYYY-MM-DD`, naive timestamps (`2024-01-02T08:30:00`) and
/// RFC 3339 timestamps. Offset timestamps keep the calendar date as written,
/// so `2024-01-02T23:00:00-05:00` is still January 2nd.
///
/// Returns `None` for empty or unparseable input.
///
/// # Examples
/// ```
/// use work_order_board::utils::date::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 2);
/// assert_eq!(parse_calendar_date("2024-01-02"), expected);
/// assert_eq!(parse_calendar_date("2024-01-02T17:45:00"), expected);
/// assert_eq!(parse_calendar_date(""), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The Monday on or before `date`. Sundays belong to the preceding Monday.
///
/// `None` only when that Monday falls before the earliest representable date.
pub fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
}

/// First day of the month `offset` months away from the month containing `date`.
///
/// Works on the month index rather than subtracting days, so a 31st never
/// skips or repeats a month and year boundaries roll over cleanly.
pub fn first_of_month_offset(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let month_index = date.year() as i64 * 12 + date.month0() as i64 + offset as i64;
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = month_index.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Calendar-day helpers: today, date windows, weekday labels
///
/// Days are `chrono::NaiveDate` values on the host's local calendar. They are
/// written as `YYYY-MM-DD` wherever they leave the process.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::domain::DomainError;

/// Format used for persisted and user-supplied day keys
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Weekday labels indexed by days-from-Sunday
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The current day on the host's local calendar
///
/// Callers compute this once per render and pass it down, so one request never
/// straddles midnight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` day key
pub fn parse_day(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text.trim(), DAY_FORMAT)
        .map_err(|_| DomainError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", text)))
}

/// Render a day as its `YYYY-MM-DD` key
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// `days` consecutive days ending at `reference`, oldest first
pub fn date_window(days: u32, reference: NaiveDate) -> Vec<NaiveDate> {
    (0..u64::from(days))
        .rev()
        .filter_map(|offset| reference.checked_sub_days(Days::new(offset)))
        .collect()
}

pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Short weekday label for a day (e.g. "Sun")
pub fn day_of_week(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[weekday_index(date)]
}

/// True for the first and last day of the Sunday-based week
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// Human-facing label: `month/day (weekday)`
pub fn format_for_display(date: NaiveDate) -> String {
    format!("{}/{} ({})", date.month(), date.day(), day_of_week(date))
}

//! Lenient date helpers for the booking form.
//!
//! Everything here maps bad input to a sentinel value (`0`, `""`, `false`,
//! `"Invalid Date"`) instead of failing. Strict checking lives in
//! [`crate::core::booking`].

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const INVALID_DATE: &str = "Invalid Date";

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%-d %B %Y";

/// A single date shape. Returns `None` to hand the string to the next one.
type DateMatcher = fn(&str) -> Option<NaiveDate>;

const MATCHERS: &[DateMatcher] = &[
    iso_with_time,
    dash_separated,
    slash_separated,
    generic,
];

/// The whole string must parse; only then is the time dropped.
fn iso_with_time(s: &str) -> Option<NaiveDate> {
    if !s.contains('T') {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.date())
}

fn dash_separated(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, INPUT_FORMAT).ok()
}

fn slash_separated(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

fn generic(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    ["%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Parse any supported date string into a calendar date.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    MATCHERS.iter().find_map(|matcher| matcher(trimmed))
}

/// Values the display formatter accepts.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(&'a str),
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(date_time: NaiveDateTime) -> Self {
        DateInput::DateTime(date_time)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl DateInput<'_> {
    fn to_calendar_date(self) -> Option<NaiveDate> {
        match self {
            DateInput::Date(date) => Some(date),
            DateInput::DateTime(date_time) => Some(date_time.date()),
            DateInput::Text(text) => parse_calendar_date(text),
        }
    }
}

/// Long display form, e.g. `15 March 2025`.
pub fn format_date(value: Option<DateInput<'_>>) -> String {
    let Some(value) = value else {
        return NOT_SPECIFIED.to_string();
    };

    match value.to_calendar_date() {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!("Cannot display unparseable date {:?}", value);
            INVALID_DATE.to_string()
        }
    }
}

/// `YYYY-MM-DD` for date-picker fields, empty when there is no date.
pub fn format_date_for_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Whole days from `start` to `end`, or 0 if either does not parse.
pub fn calculate_days_between(start: &str, end: &str) -> i64 {
    match (parse_calendar_date(start), parse_calendar_date(end)) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    }
}

/// Saturday or Sunday. Unparseable input is simply not a weekend.
pub fn is_weekend(date: &str) -> bool {
    parse_calendar_date(date)
        .map(|d| matches!(d.weekday().num_days_from_sunday(), 0 | 6))
        .unwrap_or(false)
}

/// `date` shifted by `days`, or `None` past the representable range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

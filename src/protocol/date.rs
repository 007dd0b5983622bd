//! The `YYYY-MM-DD` date format.
//!
//! Dates travel as fixed-width text: four-digit year, two-digit month and day.
//! Parsing is strict; `2020-1-5` or `20201130` are rejected even though they
//! identify a real day.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

/// Parse a `YYYY-MM-DD` literal.
///
/// Returns `None` when the text does not match the fixed pattern or does not
/// name a calendar day.
///
/// # Examples
///
/// ```
/// use kenall::protocol::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2020-11-30"), NaiveDate::from_ymd_opt(2020, 11, 30));
/// assert_eq!(parse_date("20201130"), None);
/// assert_eq!(parse_date("2021-02-30"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Format a date as `YYYY-MM-DD`.
///
/// Years outside `0..=9999` cannot be written in the fixed width and are
/// rejected with `None`.
pub fn format_date(date: NaiveDate) -> Option<String> {
    if !(0..=9999).contains(&date.year()) {
        return None;
    }
    Some(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

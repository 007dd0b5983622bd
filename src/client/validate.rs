//! Argument checks run before a request is built.
//!
//! Each check returns [`KenallError::InvalidArgument`] so that a malformed
//! argument fails the same way whether it is caught here or by the service.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{KenallError, Result};
use crate::protocol::format_date;

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7}$").expect("valid postal code pattern"));
static PREFECTURE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}$").expect("valid prefecture code pattern"));
static CORPORATE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("valid corporate number pattern"));

/// The "unset" date, `0001-01-01`. Anything at or before it is rejected.
pub(crate) fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Seven ASCII digits, no hyphen.
pub fn postal_code(code: &str) -> Result<&str> {
    check(&POSTAL_CODE, code, "postal code must be 7 digits")
}

/// Two ASCII digits.
///
/// Whether the code names an existing prefecture is left to the service,
/// which answers 404 for unknown codes.
pub fn prefecture_code(code: &str) -> Result<&str> {
    check(&PREFECTURE_CODE, code, "prefecture code must be 2 digits")
}

/// Thirteen ASCII digits.
pub fn corporate_number(number: &str) -> Result<&str> {
    check(&CORPORATE_NUMBER, number, "corporate number must be 13 digits")
}

/// Non-blank free text.
pub fn address_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(KenallError::invalid_argument("address text must not be empty"));
    }
    Ok(text)
}

/// A set, writable date, formatted for the wire.
pub fn business_date(date: NaiveDate) -> Result<String> {
    if date <= zero_date() {
        return Err(KenallError::invalid_argument("date must be set"));
    }
    format_date(date)
        .ok_or_else(|| KenallError::invalid_argument(format!("date out of range: {date}")))
}

/// A date usable as a holiday period bound.
pub fn period_bound(date: NaiveDate) -> Result<String> {
    format_date(date)
        .ok_or_else(|| KenallError::invalid_argument(format!("date out of range: {date}")))
}

fn check<'a>(pattern: &Regex, value: &'a str, message: &str) -> Result<&'a str> {
    if pattern.is_match(value) {
        Ok(value)
    } else {
        tracing::debug!(value, "{message}");
        Err(KenallError::invalid_argument(message))
    }
}

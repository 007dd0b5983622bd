//! Calendar envelopes: public holidays and business day checks.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{date_format, Version};

/// Response of a holiday lookup.
///
/// An empty `holidays` list is a normal answer for a range without holidays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// Holidays in date order.
    #[serde(rename = "data", default)]
    pub holidays: Vec<Holiday>,
}

/// A Japanese public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday name, e.g. `元日`.
    pub title: String,
    /// The date in question.
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    /// `0` for Sunday through `6` for Saturday.
    #[serde(default)]
    pub day_of_week: u8,
    /// English weekday name, e.g. `saturday`.
    #[serde(default)]
    pub day_of_week_text: String,
}

/// Which holidays to ask for.
///
/// `All` and a missing filter are the same request: no query string at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HolidayFilter {
    /// Every holiday the service knows.
    #[default]
    All,
    /// Holidays of one calendar year.
    Year(i32),
    /// Holidays between two dates, both inclusive.
    Period {
        /// First day, inclusive.
        from: NaiveDate,
        /// Last day, inclusive.
        to: NaiveDate,
    },
}

impl HolidayFilter {
    /// Filter covering one calendar year.
    pub fn year(year: i32) -> Self {
        HolidayFilter::Year(year)
    }

    /// Filter covering `from..=to`.
    pub fn period(from: NaiveDate, to: NaiveDate) -> Self {
        HolidayFilter::Period { from, to }
    }

    /// Whether `date` falls inside this filter.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            HolidayFilter::All => true,
            HolidayFilter::Year(year) => date.year() == year,
            HolidayFilter::Period { from, to } => from <= date && date <= to,
        }
    }
}

impl From<Option<HolidayFilter>> for HolidayFilter {
    fn from(filter: Option<HolidayFilter>) -> Self {
        filter.unwrap_or_default()
    }
}

/// Response of a business day check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDayResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// Classification of the requested date.
    #[serde(rename = "result")]
    pub business_day: BusinessDay,
}

/// Classification of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDay {
    /// The date in question.
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    /// `true` when the date is a public holiday.
    pub legal_holiday: bool,
}

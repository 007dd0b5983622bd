//! Scalar codecs used inside response envelopes.
//!
//! - [`Version`] - the dataset publication date carried by every envelope.
//!   Decodes from `"YYYY-MM-DD"` or `null`.
//! - [`NullableString`] - a text column that the service may report as `null`.
//! - [`date_format`] - serde adapter for required `YYYY-MM-DD` dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::protocol::{format_date, parse_date};

/// Date-only publication stamp of the dataset that answered a request.
///
/// The zero value (`Version::default()`) stands for "no date": it is what a
/// JSON `null` decodes to and what envelopes get when the field is absent.
///
/// # Examples
///
/// ```
/// use kenall::Version;
///
/// let version: Version = serde_json::from_str(r#""2020-11-30""#).unwrap();
/// assert!(!version.is_zero());
/// assert_eq!(
///     version.timestamp().unwrap().to_rfc3339(),
///     "2020-11-30T00:00:00+00:00"
/// );
///
/// let version: Version = serde_json::from_str("null").unwrap();
/// assert!(version.is_zero());
///
/// assert!(serde_json::from_str::<Version>(r#""20201130""#).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(Option<NaiveDate>);

impl Version {
    /// Version for a given day.
    pub fn new(date: NaiveDate) -> Self {
        Version(Some(date))
    }

    /// Parse a `YYYY-MM-DD` literal.
    pub fn parse(text: &str) -> Option<Self> {
        parse_date(text).map(Version::new)
    }

    /// The day, unless this is the zero value.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// UTC midnight of the day, unless this is the zero value.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.0
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl From<NaiveDate> for Version {
    fn from(date: NaiveDate) -> Self {
        Version::new(date)
    }
}

impl FromStr for Version {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s).ok_or_else(|| InvalidDate(s.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.and_then(format_date) {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

/// A literal that is not a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {0:?} as YYYY-MM-DD")]
pub struct InvalidDate(pub String);

struct VersionVisitor;

impl<'de> Visitor<'de> for VersionVisitor {
    type Value = Version;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a YYYY-MM-DD date string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
        Version::parse(v).ok_or_else(|| E::custom(InvalidDate(v.to_string())))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Version, E> {
        Ok(Version::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Version, E> {
        Ok(Version::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Version, D::Error> {
        deserializer.deserialize_str(VersionVisitor)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(VersionVisitor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.and_then(format_date) {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

/// A string column that may hold a database `null`.
///
/// Absent fields decode as `null` too, so envelopes stay decodable when the
/// service drops an empty column.
///
/// # Examples
///
/// ```
/// use kenall::NullableString;
///
/// let building: NullableString = serde_json::from_str(r#""Roppongi Hills""#).unwrap();
/// assert!(building.is_valid());
/// assert_eq!(building.as_str(), "Roppongi Hills");
///
/// let county: NullableString = serde_json::from_str("null").unwrap();
/// assert!(!county.is_valid());
/// assert_eq!(county.as_str(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NullableString(Option<String>);

impl NullableString {
    /// A non-null value.
    pub fn new(value: impl Into<String>) -> Self {
        NullableString(Some(value.into()))
    }

    /// The null value.
    pub fn null() -> Self {
        NullableString(None)
    }

    /// The text, or `""` when null.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    /// `false` when the column was null.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Borrowed view as an `Option`.
    pub fn as_option(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Consume into an `Option`.
    pub fn into_option(self) -> Option<String> {
        self.0
    }
}

impl From<Option<String>> for NullableString {
    fn from(value: Option<String>) -> Self {
        NullableString(value)
    }
}

impl From<&str> for NullableString {
    fn from(value: &str) -> Self {
        NullableString::new(value)
    }
}

impl fmt::Display for NullableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter for required `YYYY-MM-DD` fields.
///
/// ```
/// use chrono::NaiveDate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(with = "kenall::types::date_format")]
///     date: NaiveDate,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"date":"2022-01-01"}"#).unwrap();
/// assert_eq!(row.date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
/// ```
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::InvalidDate;
    use crate::protocol::{format_date, parse_date};

    /// Write a date as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        let text = format_date(*date).ok_or_else(|| {
            <S::Error as serde::ser::Error>::custom(format!("year out of range: {date}"))
        })?;
        serializer.serialize_str(&text)
    }

    /// Read a `YYYY-MM-DD` date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).ok_or_else(|| de::Error::custom(InvalidDate(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_decodes_midnight_utc() {
        let version: Version = serde_json::from_str(r#""2020-11-30""#).unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 11, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(version.timestamp(), Some(expected));
    }

    #[test]
    fn test_version_null_is_zero() {
        let version: Version = serde_json::from_str("null").unwrap();
        assert!(version.is_zero());
        assert_eq!(version, Version::default());
        assert_eq!(version.timestamp(), None);
    }

    #[test]
    fn test_version_rejects_wrong_pattern() {
        let err = serde_json::from_str::<Version>(r#""20201130""#).unwrap_err();
        assert!(err.to_string().contains("20201130"), "{err}");
    }

    #[test]
    fn test_version_rejects_wrong_type() {
        let err = serde_json::from_str::<Version>("20201130").unwrap_err();
        assert!(err.to_string().contains("20201130"), "{err}");
        assert!(serde_json::from_str::<Version>("true").is_err());
        assert!(serde_json::from_str::<Version>(r#"{"date":"2020-11-30"}"#).is_err());
    }

    #[test]
    fn test_version_rejects_impossible_day() {
        assert!(serde_json::from_str::<Version>(r#""2020-02-31""#).is_err());
    }

    #[test]
    fn test_version_serializes_back() {
        let version = Version::parse("2022-06-30").unwrap();
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""2022-06-30""#);
        assert_eq!(serde_json::to_string(&Version::default()).unwrap(), "null");
        assert_eq!(version.to_string(), "2022-06-30");
    }

    #[test]
    fn test_version_from_str() {
        assert!("2022-06-30".parse::<Version>().is_ok());
        let err = "2022/06/30".parse::<Version>().unwrap_err();
        assert_eq!(err, InvalidDate("2022/06/30".to_string()));
    }

    #[test]
    fn test_version_missing_field_is_zero() {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            version: Version,
        }

        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.version.is_zero());
    }

    #[test]
    fn test_nullable_string() {
        let value: NullableString = serde_json::from_str(r#""6-10-1""#).unwrap();
        assert!(value.is_valid());
        assert_eq!(value.as_option(), Some("6-10-1"));

        let value: NullableString = serde_json::from_str("null").unwrap();
        assert!(!value.is_valid());
        assert_eq!(value.to_string(), "");
        assert_eq!(value.into_option(), None);
    }

    #[test]
    fn test_nullable_string_rejects_numbers() {
        assert!(serde_json::from_str::<NullableString>("12").is_err());
    }

    #[test]
    fn test_date_format_round_trip_in_struct() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "date_format")]
            date: NaiveDate,
        }

        let row: Row = serde_json::from_str(r#"{"date":"2023-01-01"}"#).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"date":"2023-01-01"}"#);
        assert!(serde_json::from_str::<Row>(r#"{"date":"2023-1-1"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"date":null}"#).is_err());
    }
}

//! Corporate registry (houjin bangou) envelope.

use serde::{Deserialize, Serialize};

use super::{NullableString, Version};

/// Response of a corporate number lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorporationResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// The registry record.
    #[serde(rename = "data")]
    pub corporation: Corporation,
}

/// A record of the National Tax Agency corporate number registry.
///
/// Field semantics follow the registry's published download format; the
/// numeric codes (`process`, `correct`, `kind`) are passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corporation {
    /// Date the registry published this record.
    pub published_date: Version,
    /// Position of the record within its publication.
    pub sequence_number: u64,
    /// The 13 digit corporate number.
    pub corporate_number: String,
    /// Kind of registry update (new, name change, closure, ...).
    pub process: u16,
    /// `1` when the record corrects an earlier one.
    pub correct: u8,
    /// Date the record was last updated.
    pub update_date: Version,
    /// Date the change took effect.
    pub change_date: Version,
    /// Name as registered.
    pub name: String,
    /// Image id for names that cannot be written in JIS text.
    pub name_image_id: NullableString,
    /// Legal form code (kabushiki kaisha, godo kaisha, ...).
    pub kind: u16,
    /// Prefecture of the head office.
    pub prefecture_name: String,
    /// City of the head office.
    pub city_name: String,
    /// Street address after the city, as registered.
    pub street_number: String,
    /// Town name.
    pub town: String,
    /// Kyoto street designation, when the address uses one.
    pub kyoto_street: NullableString,
    /// Block and lot number in `2-2-1` form.
    pub block_lot_num: String,
    /// Building name.
    pub building: NullableString,
    /// Floor and room.
    pub floor_room: NullableString,
    /// Image id for addresses that cannot be written in JIS text.
    pub address_image_id: NullableString,
    /// Local government code (JIS X 0402).
    pub jisx0402: String,
    /// Postal code of the head office.
    pub post_code: String,
    /// Address outside Japan, for foreign corporations.
    pub address_outside: String,
    /// Image id for the foreign address.
    pub address_outside_image_id: NullableString,
    /// Closure date, null while the corporation exists.
    pub close_date: NullableString,
    /// Reason code for the closure.
    pub close_cause: NullableString,
    /// Corporate number of the successor after a merger.
    pub successor_corporate_number: NullableString,
    /// Free-text reason for the change.
    pub change_cause: NullableString,
    /// Date the corporate number was assigned.
    pub assignment_date: Version,
    /// Registered English name.
    pub en_name: NullableString,
    /// Prefecture in English.
    pub en_prefecture_name: NullableString,
    /// Address after the prefecture in English.
    pub en_address_line: NullableString,
    /// Foreign address in English.
    pub en_address_outside: NullableString,
    /// Reading of the name.
    pub furigana: String,
    /// Non-disclosure flag.
    pub hihyoji: NullableString,
}

impl Corporation {
    /// Whether the registry lists a closure date.
    pub fn is_closed(&self) -> bool {
        self.close_date.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corporation_dates_and_nulls() {
        let json = r#"{
            "version": "2022-06-30",
            "data": {
                "published_date": "2022-06-30",
                "sequence_number": 1,
                "corporate_number": "2021001052596",
                "process": 12,
                "correct": 0,
                "update_date": "2018-04-02",
                "change_date": "2015-10-05",
                "name": "株式会社オープンコレクター",
                "name_image_id": null,
                "kind": 301,
                "prefecture_name": "東京都",
                "city_name": "千代田区",
                "jisx0402": "13101",
                "close_date": null,
                "assignment_date": "2015-10-05",
                "en_name": "OpenCollector, Inc."
            }
        }"#;

        let response: CorporationResponse = serde_json::from_str(json).unwrap();
        let corp = &response.corporation;
        assert_eq!(corp.jisx0402, "13101");
        assert_eq!(corp.update_date.to_string(), "2018-04-02");
        assert!(!corp.name_image_id.is_valid());
        assert!(!corp.is_closed());
        assert_eq!(corp.en_name.as_str(), "OpenCollector, Inc.");
        assert!(corp.hihyoji.as_option().is_none());
    }

    #[test]
    fn test_corporation_bad_date_fails() {
        let json = r#"{"data":{"published_date":"2022/06/30"}}"#;
        assert!(serde_json::from_str::<CorporationResponse>(json).is_err());
    }
}

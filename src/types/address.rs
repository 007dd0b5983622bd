//! Address-shaped envelopes: postal code lookup, city lists and address
//! normalization.

use serde::{Deserialize, Serialize};

use super::{NullableString, Version};

/// Response of a postal code lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressResponse {
    /// Publication date of the postal dataset.
    #[serde(default)]
    pub version: Version,
    /// Every address registered under the postal code.
    #[serde(rename = "data", default)]
    pub addresses: Vec<Address>,
}

/// One address registered under a postal code.
///
/// `*_raw` fields keep the town name as published by Japan Post, before the
/// service splits parenthesised annotations into `koaza` and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Local government code (JIS X 0402).
    pub jisx0402: String,
    /// Pre-1998 three or five digit postal code.
    pub old_code: String,
    /// Seven digit postal code.
    pub postal_code: String,
    /// Prefecture name, e.g. `東京都`.
    pub prefecture: String,
    /// Prefecture name in katakana.
    pub prefecture_kana: String,
    /// City, ward, town or village name.
    pub city: String,
    /// City name in katakana.
    pub city_kana: String,
    /// Town name.
    pub town: String,
    /// Town name in katakana.
    pub town_kana: String,
    /// Town name as published, annotations included.
    pub town_raw: String,
    /// Katakana town name as published, annotations included.
    pub town_kana_raw: String,
    /// Sub-area (koaza) split out of the town name.
    pub koaza: String,
    /// Kyoto street designation (`通り名`), when the address uses one.
    pub kyoto_street: String,
    /// Building name.
    pub building: String,
    /// Floor within the building.
    pub floor: String,
    /// The town is split over several postal codes.
    pub town_partial: bool,
    /// Block numbers are assigned per koaza.
    pub town_addressed_koaza: bool,
    /// The town has chome subdivisions.
    pub town_chome: bool,
    /// The postal code covers several towns.
    pub town_multi: bool,
    /// Set when the postal code is a dedicated business code.
    pub corporation: Option<PostalCorporation>,
}

/// Business holding a dedicated postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalCorporation {
    /// Name as registered.
    pub name: String,
    /// Name in katakana.
    pub name_kana: String,
    /// Block and lot as published, in full-width text.
    pub block_lot: String,
    /// Block and lot number in `2-2-1` form.
    pub block_lot_num: String,
    /// Post office handling the code.
    pub post_office: String,
    /// `0` for a business code, `1` for a PO box.
    pub code_type: u8,
}

/// Response of a city list lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// Every city of the prefecture.
    #[serde(rename = "data", default)]
    pub cities: Vec<City>,
}

/// A municipality within a prefecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    /// Local government code (JIS X 0402).
    pub jisx0402: String,
    /// Two digit prefecture code.
    pub prefecture_code: String,
    /// Three digit city code within the prefecture.
    pub city_code: String,
    /// Prefecture name in katakana.
    pub prefecture_kana: String,
    /// City name in katakana.
    pub city_kana: String,
    /// Prefecture name, e.g. `東京都`.
    pub prefecture: String,
    /// City, ward, town or village name.
    pub city: String,
}

/// Response of an address normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizeAddressResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// What the service recognised in the text.
    pub query: NormalizedQuery,
}

/// Components the service recognised in a free-text address.
///
/// `q` echoes the text the service matched against and `t` the text as sent.
/// Components the service could not find are null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedQuery {
    /// Text the service matched against.
    pub q: String,
    /// Text as sent.
    pub t: String,
    /// Prefecture name, e.g. `東京都`.
    pub prefecture: NullableString,
    /// County (gun), when the address has one.
    pub county: NullableString,
    /// City, ward, town or village name.
    pub city: NullableString,
    /// Local government code of the recognised city.
    pub city_jisx0402: NullableString,
    /// Town name.
    pub town: NullableString,
    /// Kyoto street designation, when the address uses one.
    pub kyoto_street: NullableString,
    /// Block and lot number in `6-10-1` form.
    pub block_lot_num: NullableString,
    /// Building name.
    pub building: NullableString,
    /// Floor and room.
    pub floor_room: NullableString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_with_corporation() {
        let json = r#"{
            "version": "2020-11-30",
            "data": [{
                "jisx0402": "13101",
                "postal_code": "1008105",
                "prefecture": "東京都",
                "city": "千代田区",
                "town": "大手町",
                "town_partial": false,
                "corporation": {
                    "name": "チッソ　株式会社",
                    "block_lot": "２丁目２－１（新大手町ビル）",
                    "post_office": "銀座",
                    "code_type": 0
                }
            }]
        }"#;

        let response: AddressResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.version.to_string(), "2020-11-30");
        let address = &response.addresses[0];
        assert_eq!(address.jisx0402, "13101");
        assert_eq!(address.koaza, "");
        let corporation = address.corporation.as_ref().unwrap();
        assert_eq!(corporation.post_office, "銀座");
        assert_eq!(corporation.code_type, 0);
    }

    #[test]
    fn test_address_null_corporation() {
        let json = r#"{"version":"2020-11-30","data":[{"jisx0402":"13104","corporation":null}]}"#;
        let response: AddressResponse = serde_json::from_str(json).unwrap();
        assert!(response.addresses[0].corporation.is_none());
    }

    #[test]
    fn test_normalized_query_nulls() {
        let json = r#"{
            "version": "2023-02-28",
            "query": {
                "q": "東京都港区六本木六丁目10番1号",
                "t": "東京都港区六本木六丁目10番1号",
                "prefecture": "東京都",
                "county": null,
                "city": "港区",
                "block_lot_num": "6-10-1"
            }
        }"#;

        let response: NormalizeAddressResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.query.block_lot_num.as_str(), "6-10-1");
        assert!(!response.query.county.is_valid());
        assert!(!response.query.floor_room.is_valid());
    }

    #[test]
    fn test_normalize_requires_query_object() {
        assert!(serde_json::from_str::<NormalizeAddressResponse>(r#"{"version":null}"#).is_err());
    }
}

//! Protocol constants for the kenall API.

/// Base URL used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.kenall.jp/v1";

/// Scheme placed before the token in the `Authorization` header.
pub const AUTH_SCHEME: &str = "Token";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "KENALL_AUTHORIZATION_TOKEN";

/// Environment variable overriding the base endpoint.
pub const ENDPOINT_ENV: &str = "KENALL_ENDPOINT";

/// Resource paths, relative to the endpoint.
pub mod paths {
    /// Address lookup by postal code; the code is appended.
    pub const POSTAL_CODE: &str = "/postalcode/";
    /// City list by prefecture code; the code is appended.
    pub const CITIES: &str = "/cities/";
    /// Corporation lookup by corporate number; the number is appended.
    pub const HOUJIN_BANGOU: &str = "/houjinbangou/";
    /// Caller address as seen by the service.
    pub const WHOAMI: &str = "/whoami";
    /// Public holidays.
    pub const HOLIDAYS: &str = "/holidays";
    /// Business day classification.
    pub const BUSINESS_DAYS_CHECK: &str = "/businessdays/check";
}

/// Query parameter names.
pub mod params {
    /// Free-text address for normalization.
    pub const TEXT: &str = "t";
    /// Calendar year filter for holidays.
    pub const YEAR: &str = "year";
    /// Inclusive lower bound of a holiday period.
    pub const FROM: &str = "from";
    /// Inclusive upper bound of a holiday period.
    pub const TO: &str = "to";
    /// Date to classify as business day or holiday.
    pub const DATE: &str = "date";
}

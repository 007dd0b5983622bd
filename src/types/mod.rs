//! Response envelopes and the scalar types they are built from.
//!
//! Every operation decodes into one envelope that pairs the dataset
//! [`Version`] with the operation's payload:
//!
//! | Operation | Envelope | Payload key |
//! |-----------|----------|-------------|
//! | postal code lookup | [`AddressResponse`] | `data` |
//! | city list | [`CityResponse`] | `data` |
//! | corporate number lookup | [`CorporationResponse`] | `data` |
//! | whoami | [`WhoamiResponse`] | `remote_addr` |
//! | holidays | [`HolidaysResponse`] | `data` |
//! | business day check | [`BusinessDayResponse`] | `result` |
//! | address normalization | [`NormalizeAddressResponse`] | `query` |
//!
//! Envelopes are built fresh per call and never shared between calls.

mod address;
mod calendar;
mod corporation;
mod scalar;
mod whoami;

pub use address::{
    Address, AddressResponse, City, CityResponse, NormalizeAddressResponse, NormalizedQuery,
    PostalCorporation,
};
pub use calendar::{BusinessDay, BusinessDayResponse, Holiday, HolidayFilter, HolidaysResponse};
pub use corporation::{Corporation, CorporationResponse};
pub use scalar::{date_format, InvalidDate, NullableString, Version};
pub use whoami::{AddressFamily, RemoteAddress, WhoamiResponse};

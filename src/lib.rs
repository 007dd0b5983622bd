#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # kenall: postal codes, corporations and calendars for Japan
//!
//! Async client for the [kenall](https://kenall.jp) API.
//!
//! ## Overview
//!
//! | Operation | Method |
//! |-----------|--------|
//! | Postal code → addresses | [`KenallClient::get_address`] |
//! | Prefecture code → cities | [`KenallClient::get_city`] |
//! | Corporate number → registry record | [`KenallClient::get_corporation`] |
//! | Caller IP | [`KenallClient::get_whoami`] |
//! | Holidays (all / year / period) | [`KenallClient::get_holidays`], [`KenallClient::get_holidays_by_year`], [`KenallClient::get_holidays_by_period`] |
//! | Free text → address components | [`KenallClient::normalize_address`] |
//! | Date → business day or holiday | [`KenallClient::check_business_day`] |
//!
//! Every operation takes a [`RequestContext`] bounding how long the call may
//! take, sends exactly one request, and returns either a typed envelope or a
//! [`KenallError`].
//!
//! ## Module Structure
//!
//! - **[client]** - `KenallClient`, its configuration and the request pipeline
//! - **[context]** - Per-call cancellation and deadlines
//! - **[error]** - Error taxonomy and result alias
//! - **[types]** - Response envelopes, `Version` and `NullableString`
//! - **[protocol]** - Endpoint constants, status classification, date format

pub mod client;
pub mod context;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::{ClientConfig, KenallClient};
pub use context::RequestContext;
pub use error::{KenallError, Result, TimeoutCause};
pub use types::{HolidayFilter, NullableString, Version};

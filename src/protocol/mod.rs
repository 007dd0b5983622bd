//! Wire-level protocol pieces shared by the client.
//!
//! - **[constants]** - Default endpoint, auth scheme, paths and query names
//! - **[status]** - HTTP status to [`KenallError`](crate::KenallError) mapping
//! - **[date]** - The `YYYY-MM-DD` date format used on the wire

pub mod constants;
pub mod date;
pub mod status;

pub use constants::{AUTH_SCHEME, DEFAULT_ENDPOINT};
pub use date::{format_date, parse_date};
pub use status::classify_status;

/// Format the `Authorization` header value for a token.
///
/// # Examples
///
/// ```
/// use kenall::protocol::format_authorization;
///
/// assert_eq!(format_authorization("opencollector"), "Token opencollector");
/// ```
pub fn format_authorization(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}

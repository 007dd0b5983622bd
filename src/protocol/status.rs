//! HTTP status classification.
//!
//! Maps every status code the service can return onto the crate's error
//! taxonomy. The mapping is total: `200` is the only success, a fixed set of
//! codes get a dedicated [`KenallError`] variant, and everything else becomes
//! [`KenallError::Unknown`] carrying the raw code.
//!
//! | Status | Result |
//! |--------|--------|
//! | 200 | `Ok(())` |
//! | 400 | `InvalidArgument` |
//! | 401 | `Unauthorized` |
//! | 402 | `PaymentRequired` |
//! | 403 | `Forbidden` |
//! | 404 | `NotFound` |
//! | 405 | `MethodNotAllowed` |
//! | 500 | `InternalServerError` |
//! | 502 | `BadGateway` |
//! | other | `Unknown(status)` |
//!
//! Note that other 2xx codes (201, 204, ...) are *not* success: the service
//! only answers lookups with 200 and anything else has no envelope to decode.
//!
//! # Examples
//!
//! ```
//! use kenall::protocol::classify_status;
//! use kenall::KenallError;
//!
//! assert!(classify_status(200).is_ok());
//! assert!(matches!(classify_status(402), Err(KenallError::PaymentRequired)));
//! assert!(matches!(classify_status(503), Err(KenallError::Unknown(503))));
//! ```

use crate::error::{KenallError, Result};

/// Classify an HTTP status code.
pub fn classify_status(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        400 => Err(KenallError::invalid_argument("rejected by service")),
        401 => Err(KenallError::Unauthorized),
        402 => Err(KenallError::PaymentRequired),
        403 => Err(KenallError::Forbidden),
        404 => Err(KenallError::NotFound),
        405 => Err(KenallError::MethodNotAllowed),
        500 => Err(KenallError::InternalServerError),
        502 => Err(KenallError::BadGateway),
        other => Err(KenallError::Unknown(other)),
    }
}

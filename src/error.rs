//! Error types and result handling.
//!
//! Every failure surfaced by the client is a [`KenallError`]. The variants fall
//! into four groups:
//!
//! | Group | Variants | Origin |
//! |-------|----------|--------|
//! | Classified | `InvalidArgument` .. `BadGateway`, `Unknown` | HTTP status of the response (see [`crate::protocol::status`]) |
//! | Local validation | `InvalidArgument` | Argument checks run before any request |
//! | Cancellation | `Timeout` | The caller's [`RequestContext`](crate::RequestContext) expired or was cancelled |
//! | Unclassified | `InvalidEndpoint`, `Transport`, `Decode` | The request never reached the service, or its 200 body was unreadable |
//!
//! `InvalidArgument` is the only kind produced both locally and by the service
//! (HTTP 400).
//!
//! # Examples
//!
//! ```
//! use kenall::{KenallError, TimeoutCause};
//!
//! let err = KenallError::Timeout(TimeoutCause::DeadlineExceeded);
//! assert!(err.is_timeout());
//! assert_eq!(err.status_code(), None);
//!
//! assert_eq!(KenallError::NotFound.status_code(), Some(404));
//! assert_eq!(KenallError::Unknown(503).status_code(), Some(503));
//! ```

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KenallError>;

/// Why a call was aborted before the service answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutCause {
    /// The context deadline passed.
    DeadlineExceeded,
    /// The context's cancellation token was triggered.
    Cancelled,
}

impl fmt::Display for TimeoutCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutCause::DeadlineExceeded => write!(f, "context deadline exceeded"),
            TimeoutCause::Cancelled => write!(f, "context canceled"),
        }
    }
}

impl std::error::Error for TimeoutCause {}

/// Errors returned by [`KenallClient`](crate::KenallClient) operations.
#[derive(Debug, Error)]
pub enum KenallError {
    /// An argument failed local validation, or the service answered 400.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The service answered 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The service answered 402.
    #[error("payment required")]
    PaymentRequired,

    /// The service answered 403.
    #[error("forbidden")]
    Forbidden,

    /// The service answered 404.
    #[error("not found")]
    NotFound,

    /// The service answered 405.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The service answered 500.
    #[error("internal server error")]
    InternalServerError,

    /// The service answered 502.
    #[error("bad gateway")]
    BadGateway,

    /// The request context expired or was cancelled.
    #[error("timeout: {0}")]
    Timeout(#[source] TimeoutCause),

    /// The service answered with a non-200 status that has no dedicated kind.
    #[error("unknown status code: {0}")]
    Unknown(u16),

    /// The configured endpoint and path do not form a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The HTTP transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 200 response body could not be decoded into the expected envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl KenallError {
    /// Shorthand for an [`KenallError::InvalidArgument`] with a message.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        KenallError::InvalidArgument(message.into())
    }

    /// Whether the call was aborted by its request context.
    pub fn is_timeout(&self) -> bool {
        matches!(self, KenallError::Timeout(_))
    }

    /// Whether the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KenallError::Transport(_) | KenallError::InvalidEndpoint(_)
        )
    }

    /// The HTTP status this error was classified from.
    ///
    /// `InvalidArgument` reports 400 even when raised by local validation,
    /// since both share the same kind.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KenallError::InvalidArgument(_) => Some(400),
            KenallError::Unauthorized => Some(401),
            KenallError::PaymentRequired => Some(402),
            KenallError::Forbidden => Some(403),
            KenallError::NotFound => Some(404),
            KenallError::MethodNotAllowed => Some(405),
            KenallError::InternalServerError => Some(500),
            KenallError::BadGateway => Some(502),
            KenallError::Unknown(status) => Some(*status),
            KenallError::Timeout(_)
            | KenallError::InvalidEndpoint(_)
            | KenallError::Transport(_)
            | KenallError::Decode(_) => None,
        }
    }
}

//! Per-call cancellation and deadline control.
//!
//! Every client operation takes a [`RequestContext`]. The context bounds how
//! long the caller is willing to wait: when its deadline passes or its
//! cancellation token fires, the in-flight request future is dropped and the
//! call fails with [`KenallError::Timeout`] carrying the [`TimeoutCause`].
//! A context that is already done fails the call before any network attempt.
//!
//! Contexts are cheap to clone. Clones share one cancellation token, so
//! cancelling any clone aborts every call using it; [`RequestContext::child`]
//! derives a context that is cancelled with its parent but can also be
//! cancelled on its own.
//!
//! # Examples
//!
//! ```
//! use kenall::RequestContext;
//! use std::time::Duration;
//!
//! // No deadline, never cancelled unless asked to.
//! let ctx = RequestContext::background();
//! assert!(ctx.cause().is_none());
//!
//! // Give up after five seconds.
//! let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//! assert!(ctx.deadline().is_some());
//!
//! // Cancel explicitly.
//! let ctx = RequestContext::background();
//! ctx.cancel();
//! assert!(ctx.cause().is_some());
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::{KenallError, Result, TimeoutCause};

/// Cancellation token plus optional deadline for one or more calls.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context without deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().timeout(timeout)
    }

    /// A context with an absolute deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().deadline_at(deadline)
    }

    /// A context driven by an existing cancellation token.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        RequestContext {
            cancel: token,
            deadline: None,
        }
    }

    /// Tighten the deadline to at most `timeout` from now.
    pub fn timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.deadline_at(deadline)
    }

    /// Tighten the deadline to at most `deadline`.
    ///
    /// An earlier deadline already set on the context wins.
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// A context cancelled together with this one.
    pub fn child(&self) -> Self {
        RequestContext {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The token observed by calls using this context.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel every call using this context or one of its children.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Why this context is done, or `None` while it is still live.
    ///
    /// Cancellation is reported ahead of an expired deadline.
    pub fn cause(&self) -> Option<TimeoutCause> {
        if self.cancel.is_cancelled() {
            return Some(TimeoutCause::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(TimeoutCause::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `fut` to completion unless this context finishes first.
    ///
    /// # Errors
    ///
    /// Returns [`KenallError::Timeout`] when the context is already done or
    /// finishes while `fut` is pending; otherwise whatever `fut` returns.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if let Some(cause) = self.cause() {
            return Err(KenallError::Timeout(cause));
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(KenallError::Timeout(TimeoutCause::Cancelled)),
            _ = expiry(self.deadline) => Err(KenallError::Timeout(TimeoutCause::DeadlineExceeded)),
            res = fut => res,
        }
    }
}

async fn expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

//! Client configuration.
//!
//! [`ClientConfig`] carries everything a [`KenallClient`](super::KenallClient)
//! needs besides its token. Fields can be set directly with struct update
//! syntax, or through the `with_*` mutators, which ignore empty values and
//! keep what was there before.
//!
//! # Examples
//!
//! ```
//! use kenall::client::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig {
//!     request_timeout: Some(Duration::from_secs(10)),
//!     ..Default::default()
//! }
//! .with_endpoint("http://127.0.0.1:8080")
//! .with_endpoint(""); // no-op
//!
//! assert_eq!(config.endpoint, "http://127.0.0.1:8080");
//! ```

use std::time::Duration;

use crate::protocol::constants::{DEFAULT_ENDPOINT, ENDPOINT_ENV};

/// Configuration for [`KenallClient`](super::KenallClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    pub endpoint: String,
    /// Transport to send requests with. `None` builds a default client.
    ///
    /// `reqwest::Client` is a shared handle, so passing a clone keeps using
    /// the caller's connection pool.
    pub http_client: Option<reqwest::Client>,
    /// Transport-level timeout for the default client.
    ///
    /// Ignored when `http_client` is set. Per-call limits belong on the
    /// [`RequestContext`](crate::RequestContext).
    pub request_timeout: Option<Duration>,
    /// `User-Agent` for the default client.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: None,
            request_timeout: None,
            user_agent: concat!("kenall-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the endpoint taken from `KENALL_ENDPOINT` when set.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_default();
        Self::default().with_endpoint(endpoint)
    }

    /// Use a custom base endpoint. Empty strings are ignored.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        if !endpoint.is_empty() {
            self.endpoint = endpoint;
        }
        self
    }

    /// Use a caller-provided transport. `None` is ignored.
    pub fn with_http_client(mut self, client: impl Into<Option<reqwest::Client>>) -> Self {
        if let Some(client) = client.into() {
            self.http_client = Some(client);
        }
        self
    }

    /// Set the transport-level timeout of the default client.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` of the default client. Empty strings are ignored.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    /// The configured transport, or a fresh default one.
    pub(crate) fn build_http_client(&self) -> reqwest::Client {
        if let Some(client) = &self.http_client {
            return client.clone();
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .pool_idle_timeout(Duration::from_secs(90));
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            reqwest::Client::new()
        })
    }
}

//! The kenall client and the request pipeline shared by every operation.
//!
//! Every public operation funnels into [`KenallClient::execute`]:
//!
//! 1. join the endpoint and resource path, append the query in key order
//! 2. attach `Authorization: Token <token>`
//! 3. send the request under the caller's [`RequestContext`]
//! 4. classify the status ([`classify_status`]); anything but 200 stops here
//! 5. decode the body into the operation's envelope
//!
//! There is exactly one attempt per call. Nothing is retried or cached.
//!
//! # Examples
//!
//! ```ignore
//! use kenall::{KenallClient, RequestContext};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KenallClient::new(std::env::var("KENALL_AUTHORIZATION_TOKEN")?)?;
//!     let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//!
//!     let res = client.get_address(&ctx, "1000001").await?;
//!     let addr = &res.addresses[0];
//!     println!("{} {} {}", addr.prefecture, addr.city, addr.town);
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{instrument, Span};
use url::Url;

use crate::client::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{KenallError, Result};
use crate::protocol::constants::TOKEN_ENV;
use crate::protocol::{classify_status, format_authorization};

/// Query parameters of one request, kept sorted by key.
pub(crate) type Query = BTreeMap<&'static str, String>;

/// Async client for the kenall API.
///
/// Holds only immutable configuration and a shared `reqwest::Client`, so it is
/// cheap to clone and safe to use from many tasks at once.
#[derive(Clone)]
pub struct KenallClient {
    token: String,
    endpoint: String,
    http: reqwest::Client,
}

impl KenallClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KenallError::InvalidArgument`] when `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KenallError::InvalidArgument`] when `token` is empty.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(KenallError::invalid_argument("token must not be empty"));
        }

        let http = config.build_http_client();
        Ok(KenallClient {
            token,
            endpoint: config.endpoint,
            http,
        })
    }

    /// Create a client from `KENALL_AUTHORIZATION_TOKEN` and, when set,
    /// `KENALL_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns [`KenallError::InvalidArgument`] when the token variable is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).unwrap_or_default();
        Self::with_config(token, ClientConfig::from_env())
    }

    /// The base endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The transport requests are sent with.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build the full URL for `path` and `query`.
    pub(crate) fn build_url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.endpoint.trim_end_matches('/'), path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Run one request through the pipeline and decode its body as `T`.
    #[instrument(
        name = "kenall_request",
        skip(self, ctx, query),
        fields(
            http.method = %Method::GET,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute<T>(
        &self,
        ctx: &RequestContext,
        path: &str,
        query: Query,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, &query)?;
        Span::current().record("http.url", url.as_str());

        let request = self
            .http
            .request(Method::GET, url)
            .header(AUTHORIZATION, format_authorization(&self.token));

        let body = ctx.run(self.send(request)).await.inspect_err(|err| {
            if err.is_timeout() {
                tracing::debug!(error = %err, "request aborted by context");
            }
        })?;

        decode(&body)
    }

    /// Send a request and read its body if the status is 200.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Bytes> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        if let Err(err) = classify_status(status) {
            tracing::warn!(status, error = %err, "request rejected");
            return Err(err);
        }

        Ok(response.bytes().await?)
    }
}

/// Decode a 200 response body.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, len = body.len(), "undecodable response body");
        KenallError::Decode(e)
    })
}

impl fmt::Debug for KenallClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KenallClient")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

//! Shared helpers for the stub-service tests.

#![allow(dead_code)]

use kenall::{ClientConfig, KenallClient};
use mockito::{Mock, ServerGuard};

pub const TOKEN: &str = "opencollector";
pub const BAD_TOKEN: &str = "bad_token";

pub const ADDRESSES: &str = include_str!("../fixtures/addresses.json");
pub const CITIES: &str = include_str!("../fixtures/cities.json");
pub const CORPORATION: &str = include_str!("../fixtures/corporation.json");
pub const WHOAMI: &str = include_str!("../fixtures/whoami.json");
pub const HOLIDAYS: &str = include_str!("../fixtures/holidays.json");
pub const NORMALIZE_ADDRESS: &str = include_str!("../fixtures/normalize_address.json");
pub const BUSINESS_DAY: &str = include_str!("../fixtures/business_day.json");

/// Statuses with a dedicated error kind, plus one without.
pub const ERROR_STATUSES: [usize; 9] = [400, 401, 402, 403, 404, 405, 500, 502, 503];

/// Client pointed at the stub server.
pub fn client(server: &ServerGuard, token: &str) -> KenallClient {
    KenallClient::with_config(token, ClientConfig::default().with_endpoint(server.url()))
        .expect("valid token")
}

/// Route `path_and_query` to a JSON body for the good token.
pub async fn stub_json(server: &mut ServerGuard, path_and_query: &str, body: &str) -> Mock {
    server
        .mock("GET", path_and_query)
        .match_header("authorization", format!("Token {TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Route `path_and_query` to a bare status for the good token.
pub async fn stub_status(server: &mut ServerGuard, path_and_query: &str, status: usize) -> Mock {
    server
        .mock("GET", path_and_query)
        .match_header("authorization", format!("Token {TOKEN}").as_str())
        .with_status(status)
        .create_async()
        .await
}

/// Answer 401 for any request carrying the bad token.
pub async fn stub_unauthorized(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", mockito::Matcher::Any)
        .match_header("authorization", format!("Token {BAD_TOKEN}").as_str())
        .with_status(401)
        .create_async()
        .await
}

/// An endpoint on a local port that was just released, so connecting is refused.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("bound address");
    drop(listener);
    format!("http://{addr}")
}

/// Install a subscriber once so `RUST_LOG=kenall=debug` shows pipeline spans.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

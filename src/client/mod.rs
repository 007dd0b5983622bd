//! kenall HTTP client.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config     - ClientConfig (endpoint, transport, defaults)
//! ├── fetch      - KenallClient and the shared request pipeline
//! ├── operations - Public lookup methods
//! └── validate   - Argument checks run before a request
//! ```
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use kenall::client::{ClientConfig, KenallClient};
//!
//! // Default configuration
//! let client = KenallClient::new("my-token").unwrap();
//! assert_eq!(client.endpoint(), "https://api.kenall.jp/v1");
//!
//! // Custom endpoint and transport
//! let config = ClientConfig::default()
//!     .with_endpoint("http://127.0.0.1:8080")
//!     .with_http_client(reqwest::Client::new());
//! let client = KenallClient::with_config("my-token", config).unwrap();
//! assert_eq!(client.endpoint(), "http://127.0.0.1:8080");
//!
//! // An empty token is rejected up front
//! assert!(KenallClient::new("").is_err());
//! ```
//!
//! ## Looking Things Up
//!
//! ```ignore
//! use kenall::{KenallClient, RequestContext};
//! use std::time::Duration;
//!
//! let client = KenallClient::from_env()?;
//! let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//!
//! let cities = client.get_city(&ctx, "13").await?;
//! let holidays = client.get_holidays_by_year(&ctx, 2022).await?;
//! let normalized = client
//!     .normalize_address(&ctx, "東京都千代田区麹町三丁目12-14麹町駅前ヒルトップ8F")
//!     .await?;
//! println!("{}", normalized.query.block_lot_num);
//! ```

mod config;
mod fetch;
mod operations;
mod validate;

pub use config::ClientConfig;
pub use fetch::KenallClient;

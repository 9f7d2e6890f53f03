//! Blocking client core for the BattleMetrics API.
//!
//! # Overview
//! Lists and fetches games and servers. Typed parameter structs are encoded
//! into the API's bracket-notation query dialect by [`query`], requests are
//! built and responses parsed as plain data by [`resources`], and a
//! [`Transport`] performs the authenticated round-trip.
//!
//! # Design
//! - The query encoder is pure and total over JSON-shaped input.
//! - `build_*` / `parse_*` keep the I/O boundary explicit; `HttpTransport`
//!   (ureq) is one implementation of it.
//! - Configuration is an explicit `Config` value. Reading the environment
//!   is a convenience constructor, and a missing token is reported when the
//!   transport is built, before any request.
//!
//! ```no_run
//! use battlemetrics_core::{BattleMetricsClient, Config, ServerListFilters, ServerListParams};
//!
//! let client = BattleMetricsClient::from_config(&Config::new("token"))?;
//! let params = ServerListParams {
//!     filter: Some(ServerListFilters {
//!         game: Some("rust".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! for server in client.list_servers(Some(&params))?.data {
//!     println!("{} ({} players)", server.attributes.name, server.attributes.players);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::BattleMetricsClient;
pub use config::{Config, BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{encode, flatten, to_query_string, EncodeMode, QueryEncoder};
pub use transport::{HttpTransport, Transport};
pub use types::*;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Blocking client for the BattleMetrics API.
//!
//! # Design
//! `BattleMetricsClient` owns a `Transport` and nothing else. Each accessor
//! builds a request with the matching `resources` builder, sends it once,
//! and parses the response. Failures are returned as-is: no retries, no
//! caching, no fallback values.

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ApiError, ConfigError};
use crate::http::HttpRequest;
use crate::resources::{self, games, servers};
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    GameListParams, GameListResponse, GameResponse, ServerListParams, ServerListResponse,
    ServerResponse,
};

#[derive(Debug, Clone)]
pub struct BattleMetricsClient<T = HttpTransport> {
    transport: T,
}

impl BattleMetricsClient<HttpTransport> {
    /// Build an `HttpTransport` from `config` and wrap it.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }

    /// Shorthand for `from_config(&Config::from_env())`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(&Config::from_env())
    }
}

impl<T: Transport> BattleMetricsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send any built request and decode a 2xx body into `R`.
    ///
    /// Useful when the caller wants its own record shape, or the raw
    /// `serde_json::Value`, instead of the typed envelopes.
    pub fn fetch<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R, ApiError> {
        resources::parse_body(self.transport.send(request)?)
    }

    pub fn list_games(&self, params: Option<&GameListParams>) -> Result<GameListResponse, ApiError> {
        let request = games::build_list(params)?;
        games::parse_list(self.transport.send(&request)?)
    }

    pub fn get_game(&self, id: &str) -> Result<GameResponse, ApiError> {
        games::parse_get(self.transport.send(&games::build_get(id))?)
    }

    pub fn list_servers(
        &self,
        params: Option<&ServerListParams>,
    ) -> Result<ServerListResponse, ApiError> {
        let request = servers::build_list(params)?;
        servers::parse_list(self.transport.send(&request)?)
    }

    pub fn get_server(&self, id: &str) -> Result<ServerResponse, ApiError> {
        servers::parse_get(self.transport.send(&servers::build_get(id))?)
    }
}

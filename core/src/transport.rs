//! Executes `HttpRequest` values against the BattleMetrics API.
//!
//! # Design
//! `Transport` is the seam between the pure request/response layer and the
//! network. `HttpTransport` is the blocking implementation on top of a
//! `ureq::Agent`: it is bound to one base URL, attaches the bearer token to
//! every request and hands back non-2xx responses as data so the parsers
//! decide what a status means. Connection reuse and timeouts belong to the
//! agent; pass a configured one through `with_agent` to change them.

use std::fmt;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpRequest, HttpResponse};

/// Performs one HTTP round-trip per call.
pub trait Transport {
    /// Send `request` and return the response, whatever its status.
    /// Only failures that produced no response are errors.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request)
    }
}

/// `ureq`-backed transport with a default `Authorization: Bearer` header.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

impl HttpTransport {
    /// Validate `config` and build a transport. Fails before any network
    /// activity if the token is missing or the base URL is unusable.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::with_agent(config, agent)
    }

    /// Like `new`, with a caller-configured agent. The agent must not treat
    /// HTTP status codes as errors.
    pub fn with_agent(config: &Config, agent: ureq::Agent) -> Result<Self, ConfigError> {
        let (token, url) = config.resolve()?;
        let base_url = url.as_str().trim_end_matches('/').to_string();
        debug!(%base_url, "battlemetrics transport ready");
        Ok(Self {
            agent,
            base_url,
            authorization: format!("Bearer {token}"),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.base_url, request.path)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url_for(request);
        debug!(method = request.method.as_str(), %url, "sending request");

        let mut builder = self
            .agent
            .get(&url)
            .header("authorization", &self.authorization)
            .header("accept", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;
        trace!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

//! Client configuration.
//!
//! # Design
//! A `Config` is a plain value handed to the transport at construction time.
//! Reading the process environment is one way to build it (`from_env`);
//! `from_lookup` accepts any key lookup so tests never touch global state.
//! Nothing is validated until `HttpTransport::new`, which is where a missing
//! token surfaces as `ConfigError::MissingToken`.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "BATTLEMETRICS_TOKEN";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "BATTLEMETRICS_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.battlemetrics.com";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    token: Option<String>,
    base_url: String,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `BATTLEMETRICS_TOKEN` and `BATTLEMETRICS_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            token: non_empty(TOKEN_ENV),
            base_url: non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Token and parsed base URL, or the first problem found.
    pub(crate) fn resolve(&self) -> Result<(&str, Url), ConfigError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_string(),
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }
        Ok((token, url))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

//! Error types for the BattleMetrics client.
//!
//! # Design
//! Configuration problems are caught when the transport is constructed and
//! get their own `ConfigError` type. Everything that can go wrong once a
//! request is in flight lands in `ApiError`. Non-2xx responses keep the raw
//! status and body; the client does not classify them further.

use thiserror::Error;

/// Invalid or missing client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API token was supplied, or it was blank.
    #[error("BATTLEMETRICS_TOKEN is not set")]
    MissingToken,

    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors returned by request builders, response parsers and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request parameters could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

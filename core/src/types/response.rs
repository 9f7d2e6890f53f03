use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::PaginationLinks;
use super::game::Game;
use super::server::Server;

/// Envelope for collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PaginationLinks>,
    /// Side-loaded related resources, left undecoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

/// Envelope for single-resource endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PaginationLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

pub type GameResponse = Response<Game>;
pub type GameListResponse = ListResponse<Game>;
pub type ServerResponse = Response<Server>;
pub type ServerListResponse = ListResponse<Server>;

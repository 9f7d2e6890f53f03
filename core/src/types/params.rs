//! Query parameters for the list endpoints.
//!
//! Every field is optional and skipped when `None`, so a default value
//! encodes to an empty query string. Field declaration order is the order
//! the encoder emits pairs in.

use serde::{Deserialize, Serialize};

use super::common::{PaginationDirection, ServerStatus};

/// Pagination controls shared by all list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Items per page, 1..=100. The API defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Opaque key taken from a previous page's links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<PaginationDirection>,
}

impl PageParams {
    pub fn size(size: u32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFields {
    /// Attribute names to return, e.g. `["name", "players"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub game: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<GameFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFields {
    /// Attribute names to return, e.g. `["name", "ip", "port"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server: Vec<String>,
}

/// Server id allow/deny lists. Values are comma separated ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerListFilters {
    /// Only servers you have favorited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<bool>,
    /// Game id, e.g. `ark`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    /// `true` for group leaders only, `false` to exclude them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_leader: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<IdFilter>,
    /// Kilometres from `location`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    /// Comma separated organization ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<PlayerRange>,
    /// Only servers you have RCON access to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
    /// ISO 3166-1 alpha-2 codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRelations {
    /// Comma separated relationship names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ServerFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ServerListFilters>,
    /// Related resources to include, e.g. `serverGroup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    /// `longitude,latitude`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<ServerRelations>,
    /// `rank` (default), `name`, `players` or `distance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

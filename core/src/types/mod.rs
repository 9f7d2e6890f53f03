//! Domain DTOs for the BattleMetrics API.
//!
//! # Design
//! Resource records mirror the API's JSON:API shape (`id`, `type`,
//! `attributes`, `relationships`) and are passive data. Parameter structs
//! serialize into parameter trees for the query encoder, so their field
//! order is the order pairs appear on the wire.

pub mod common;
pub mod game;
pub mod params;
pub mod response;
pub mod server;

pub use common::{
    ConnectionType, PaginationDirection, PaginationLinks, QueryStatus, RconStatus, ResourceType,
    ServerStatus,
};
pub use game::{Game, GameAttributes, GameMetadata};
pub use params::{
    GameFields, GameListParams, IdFilter, PageParams, PlayerRange, ServerFields, ServerListFilters,
    ServerListParams, ServerRelations,
};
pub use response::{GameListResponse, GameResponse, ListResponse, Response, ServerListResponse, ServerResponse};
pub use server::{
    Relationship, ResourceIdentifier, Server, ServerAttributes, ServerDetails,
    ServerGroupMeta, ServerGroupRelationship, ServerMetadata, ServerRelationships,
};

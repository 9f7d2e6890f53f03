use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::common::{ConnectionType, QueryStatus, RconStatus, ResourceType, ServerStatus};

/// A game server tracked by BattleMetrics. Ids are numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub attributes: ServerAttributes,
    #[serde(default)]
    pub relationships: ServerRelationships,
}

/// Attributes left out of a response, as with `fields[server]`, take their
/// default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerAttributes {
    pub id: String,
    pub name: String,
    /// Hostname. The API sends `null` for servers registered by IP only.
    pub address: Option<String>,
    pub ip: String,
    pub port: u16,
    pub port_query: u16,
    pub players: u32,
    pub max_players: u32,
    /// `None` when the server has been de-ranked.
    pub rank: Option<u32>,
    /// `[longitude, latitude]`.
    pub location: [f64; 2],
    pub status: ServerStatus,
    pub details: ServerDetails,
    pub private: bool,
    pub created_at: String,
    pub updated_at: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    pub query_status: Option<QueryStatus>,
    pub rcon_active: Option<bool>,
    pub rcon_disconnected: Option<String>,
    pub rcon_last_connected: Option<String>,
    pub rcon_status: Option<RconStatus>,
    pub metadata: Option<ServerMetadata>,
}

/// Game-specific details. Only `tags` and `official` are common to every
/// game; everything else (`rust_type`, `rust_maps`, ...) is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerDetails {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub official: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerDetails {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// RCON settings. Only visible to authenticated owners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerMetadata {
    pub connection_type: Option<ConnectionType>,
    /// Seconds, 60..=300 (Hell Let Loose).
    pub hll_player_list_interval: Option<u32>,
    pub reserved_slots: Option<u32>,
    pub reserved_slots_kick_last_to_join: Option<bool>,
    /// Seconds, 15..=300 (Rust).
    pub status_interval: Option<u32>,
    pub use_connection_pool: Option<bool>,
    pub use_get_chat: Option<bool>,
    pub username: Option<String>,
}

/// JSON:API resource linkage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier<Id = String> {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship<Id = String> {
    pub data: ResourceIdentifier<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroupRelationship {
    pub data: ResourceIdentifier<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ServerGroupMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroupMeta {
    pub leader: bool,
}

/// Missing when the server's relationships were not requested; `game` is
/// then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ban_list: Option<Relationship<Uuid>>,
    #[serde(default)]
    pub game: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_group: Option<ServerGroupRelationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOOSE: &str = r#"{
        "id": "4729828",
        "type": "server",
        "attributes": {
            "id": "4729828",
            "name": "Rusty Moose |EU Main|",
            "address": "main.eu.moose.gg",
            "ip": "205.178.168.176",
            "port": 28010,
            "portQuery": 28017,
            "players": 244,
            "maxPlayers": 275,
            "rank": 85,
            "location": [-0.1278, 51.5081],
            "status": "online",
            "details": {
                "tags": ["mp300", "EU"],
                "official": true,
                "rust_type": "official",
                "rust_world_size": 4500,
                "rust_maps": {"seed": 1337, "barren": false}
            },
            "private": false,
            "createdAt": "2019-11-07T19:39:44.018Z",
            "updatedAt": "2025-06-27T02:10:20.824Z",
            "country": "GB",
            "queryStatus": "timeout",
            "rconActive": null
        },
        "relationships": {
            "game": {"data": {"type": "game", "id": "rust"}},
            "serverGroup": {
                "data": {"type": "serverGroup", "id": "6e7a3d0c-6a1f-11e8-9ec0-1f7d3b2a4c5d"},
                "meta": {"leader": true}
            }
        }
    }"#;

    #[test]
    fn server_deserializes_from_api_shape() {
        let server: Server = serde_json::from_str(MOOSE).unwrap();
        assert_eq!(server.id, "4729828");
        assert_eq!(server.kind, ResourceType::Server);
        let attrs = &server.attributes;
        assert_eq!(attrs.address.as_deref(), Some("main.eu.moose.gg"));
        assert_eq!(attrs.port, 28010);
        assert_eq!(attrs.port_query, 28017);
        assert_eq!(attrs.rank, Some(85));
        assert_eq!(attrs.location, [-0.1278, 51.5081]);
        assert_eq!(attrs.status, ServerStatus::Online);
        assert_eq!(attrs.query_status, Some(QueryStatus::Timeout));
        assert_eq!(attrs.rcon_active, None);
        assert!(attrs.metadata.is_none());
    }

    #[test]
    fn details_keep_game_specific_keys() {
        let server: Server = serde_json::from_str(MOOSE).unwrap();
        let details = &server.attributes.details;
        assert_eq!(details.tags, ["mp300", "EU"]);
        assert!(details.official);
        assert_eq!(details.get("rust_type").unwrap(), "official");
        assert_eq!(details.get("rust_maps").unwrap()["seed"], 1337);
        assert!(!details.extra.contains_key("tags"));
    }

    #[test]
    fn relationships_parse_typed_ids() {
        let server: Server = serde_json::from_str(MOOSE).unwrap();
        let rel = &server.relationships;
        assert_eq!(rel.game.data.id, "rust");
        assert_eq!(rel.game.data.kind, "game");
        let group = rel.server_group.as_ref().unwrap();
        assert_eq!(
            group.data.id.to_string(),
            "6e7a3d0c-6a1f-11e8-9ec0-1f7d3b2a4c5d"
        );
        assert_eq!(group.meta, Some(ServerGroupMeta { leader: true }));
        assert!(rel.default_ban_list.is_none());
        assert!(rel.organization.is_none());
    }

    #[test]
    fn server_group_id_must_be_uuid() {
        let body = MOOSE.replace("6e7a3d0c-6a1f-11e8-9ec0-1f7d3b2a4c5d", "not-a-uuid");
        assert!(serde_json::from_str::<Server>(&body).is_err());
    }

    #[test]
    fn null_rank_means_deranked() {
        let body = MOOSE.replace(r#""rank": 85"#, r#""rank": null"#);
        let server: Server = serde_json::from_str(&body).unwrap();
        assert_eq!(server.attributes.rank, None);
    }

    #[test]
    fn sparse_attributes_fall_back_to_defaults() {
        let server: Server = serde_json::from_str(
            r#"{"id":"1","type":"server","attributes":{"name":"x","players":3},
                "relationships":{"game":{"data":{"type":"game","id":"rust"}}}}"#,
        )
        .unwrap();
        let attrs = &server.attributes;
        assert_eq!(attrs.name, "x");
        assert_eq!(attrs.players, 3);
        assert_eq!(attrs.id, "");
        assert_eq!(attrs.port, 0);
        assert_eq!(attrs.status, ServerStatus::Unknown);
        assert_eq!(attrs.rank, None);
        assert_eq!(server.relationships.game.data.id, "rust");
    }

    #[test]
    fn missing_relationships_are_tolerated() {
        let server: Server =
            serde_json::from_str(r#"{"id":"1","type":"server","attributes":{"name":"x"}}"#).unwrap();
        assert_eq!(server.relationships, ServerRelationships::default());
        assert!(server.relationships.game.data.id.is_empty());
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let body = MOOSE.replace(r#""status": "online""#, r#""status": "hibernating""#);
        let server: Server = serde_json::from_str(&body).unwrap();
        assert_eq!(server.attributes.status, ServerStatus::Unknown);
    }

    #[test]
    fn metadata_fields_are_all_optional() {
        let metadata: ServerMetadata =
            serde_json::from_str(r#"{"connectionType":"ws","reservedSlots":4}"#).unwrap();
        assert_eq!(metadata.connection_type, Some(ConnectionType::Ws));
        assert_eq!(metadata.reserved_slots, Some(4));
        assert!(metadata.username.is_none());
    }
}

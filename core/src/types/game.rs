use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::ResourceType;

/// A game supported by BattleMetrics. Ids are short lowercase slugs such as
/// `ark` or `rust`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub attributes: GameAttributes,
}

/// Attributes left out of a response, as with `fields[game]`, take their
/// default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameAttributes {
    /// Long name, e.g. "ARK: Survival Evolved".
    pub name: String,
    pub metadata: GameMetadata,
    /// Players currently online.
    pub players: u64,
    /// Servers currently online.
    pub servers: u64,
    /// Keyed by ISO 3166-1 alpha-2 country code.
    pub servers_by_country: BTreeMap<String, u64>,
    pub players_by_country: BTreeMap<String, u64>,
    #[serde(rename = "maxPlayers30D")]
    pub max_players_30d: u64,
    #[serde(rename = "maxPlayers7D")]
    pub max_players_7d: u64,
    #[serde(rename = "maxPlayers24H")]
    pub max_players_24h: u64,
    #[serde(rename = "minPlayers30D")]
    pub min_players_30d: u64,
    #[serde(rename = "minPlayers7D")]
    pub min_players_7d: u64,
    #[serde(rename = "minPlayers24H")]
    pub min_players_24h: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameMetadata {
    /// Steam app id.
    pub appid: u64,
    /// Steam game directory used in queries.
    pub gamedir: String,
    /// True when BattleMetrics cannot provide public player lists.
    pub no_player_list: bool,
}

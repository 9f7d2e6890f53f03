//! In-process stand-in for the BattleMetrics API.
//!
//! Serves the fixture games and servers under the same paths as the real
//! API, requires `Authorization: Bearer <token>`, and understands the
//! bracket-notation query parameters the client sends: filters, pagination
//! and sparse fieldsets. Error bodies use the JSON:API `errors` array.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

const GAMES: &str = include_str!("../fixtures/games.json");
const SERVERS: &str = include_str!("../fixtures/servers.json");
const MAX_PAGE_SIZE: usize = 100;

pub struct ApiState {
    token: String,
    games: Vec<Value>,
    servers: Vec<Value>,
}

pub type Db = Arc<ApiState>;

type Rejection = (StatusCode, Json<Value>);
type Reply = Result<Json<Value>, Rejection>;

pub fn app(token: &str) -> Router {
    let state: Db = Arc::new(ApiState {
        token: token.to_string(),
        games: fixture_games(),
        servers: fixture_servers(),
    });
    Router::new()
        .route("/games", get(list_games))
        .route("/games/{id}", get(get_game))
        .route("/servers", get(list_servers))
        .route("/servers/{id}", get(get_server))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

pub fn fixture_games() -> Vec<Value> {
    serde_json::from_str(GAMES).unwrap_or_default()
}

pub fn fixture_servers() -> Vec<Value> {
    serde_json::from_str(SERVERS).unwrap_or_default()
}

async fn list_games(
    State(db): State<Db>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Reply {
    authorize(&db, &headers)?;
    let query = QueryPairs::parse(raw.as_deref());
    debug!(pairs = query.0.len(), "list games");
    let all: Vec<&Value> = db.games.iter().collect();
    list_body("games", "game", &all, &query)
}

async fn get_game(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    authorize(&db, &headers)?;
    find(&db.games, &id, "Unknown Game")
}

async fn list_servers(
    State(db): State<Db>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Reply {
    authorize(&db, &headers)?;
    let query = QueryPairs::parse(raw.as_deref());
    debug!(pairs = query.0.len(), "list servers");
    let filter = ServerFilter::from_query(&query)?;
    let matching: Vec<&Value> = db.servers.iter().filter(|s| filter.matches(s)).collect();
    list_body("servers", "server", &matching, &query)
}

async fn get_server(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    authorize(&db, &headers)?;
    find(&db.servers, &id, "Unknown Server")
}

fn authorize(db: &ApiState, headers: &HeaderMap) -> Result<(), Rejection> {
    let expected = format!("Bearer {}", db.token);
    let given = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if given == Some(expected.as_str()) {
        Ok(())
    } else {
        Err(rejection(StatusCode::UNAUTHORIZED, "Unauthorized", "missing or invalid bearer token"))
    }
}

fn find(items: &[Value], id: &str, title: &str) -> Reply {
    items
        .iter()
        .find(|item| item["id"] == id)
        .map(|item| Json(json!({ "data": item })))
        .ok_or_else(|| rejection(StatusCode::NOT_FOUND, title, &format!("no resource with id {id}")))
}

/// Paginate `items` and apply `fields[<resource>]` before wrapping them in
/// a list envelope. `page[key]` is the offset of the first item.
fn list_body(collection: &str, resource: &str, items: &[&Value], query: &QueryPairs) -> Reply {
    let size = match query.first("page[size]") {
        None => MAX_PAGE_SIZE,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .ok_or_else(|| bad_request("page[size] must be between 1 and 100"))?,
    };
    let offset = match query.first("page[key]") {
        None => 0,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| bad_request("page[key] is not a valid page key"))?,
    };

    let fields: Option<HashSet<&str>> = query
        .first(&format!("fields[{resource}]"))
        .map(|list| list.split(',').filter(|f| !f.is_empty()).collect());

    let data: Vec<Value> = items
        .iter()
        .skip(offset)
        .take(size)
        .map(|item| select_fields(item, fields.as_ref()))
        .collect();

    let mut body = json!({ "data": data });
    let mut links = serde_json::Map::new();
    if offset + size < items.len() {
        links.insert(
            "next".to_string(),
            json!(format!("/{collection}?page[size]={size}&page[key]={}&page[rel]=next", offset + size)),
        );
    }
    if offset > 0 {
        links.insert(
            "prev".to_string(),
            json!(format!(
                "/{collection}?page[size]={size}&page[key]={}&page[rel]=prev",
                offset.saturating_sub(size)
            )),
        );
    }
    if !links.is_empty() {
        body["links"] = Value::Object(links);
    }
    Ok(Json(body))
}

fn select_fields(item: &Value, fields: Option<&HashSet<&str>>) -> Value {
    let mut item = item.clone();
    if let (Some(fields), Some(attributes)) = (fields, item["attributes"].as_object_mut()) {
        attributes.retain(|key, _| fields.contains(key.as_str()));
    }
    item
}

/// Decoded query pairs in request order. Repeated keys are kept.
#[derive(Debug, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
            .into_owned()
            .collect();
        Self(pairs)
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// The subset of `filter[...]` parameters the mock understands.
#[derive(Debug, Default)]
struct ServerFilter {
    game: Option<String>,
    status: Option<String>,
    search: Option<String>,
    countries: Vec<String>,
    min_players: Option<u64>,
    max_players: Option<u64>,
    whitelist: Option<Vec<String>>,
    blacklist: Vec<String>,
}

impl ServerFilter {
    fn from_query(query: &QueryPairs) -> Result<Self, Rejection> {
        let number = |key: &str| -> Result<Option<u64>, Rejection> {
            query
                .first(key)
                .map(|raw| raw.parse::<u64>().map_err(|_| bad_request(&format!("{key} must be a number"))))
                .transpose()
        };
        let ids = |key: &str| -> Option<Vec<String>> {
            query
                .first(key)
                .map(|list| list.split(',').map(str::to_string).collect())
        };
        Ok(Self {
            game: query.first("filter[game]").map(str::to_string),
            status: query.first("filter[status]").map(str::to_string),
            search: query.first("filter[search]").map(str::to_lowercase),
            countries: query
                .all("filter[countries][]")
                .into_iter()
                .map(str::to_string)
                .collect(),
            min_players: number("filter[players][min]")?,
            max_players: number("filter[players][max]")?,
            whitelist: ids("filter[ids][whitelist]"),
            blacklist: ids("filter[ids][blacklist]").unwrap_or_default(),
        })
    }

    fn matches(&self, server: &Value) -> bool {
        let attributes = &server["attributes"];
        let id = server["id"].as_str().unwrap_or_default();
        let game = server["relationships"]["game"]["data"]["id"].as_str();
        let players = attributes["players"].as_u64().unwrap_or_default();
        let name = attributes["name"].as_str().unwrap_or_default().to_lowercase();
        let country = attributes["country"].as_str().unwrap_or_default();

        self.game.as_deref().is_none_or(|g| game == Some(g))
            && self
                .status
                .as_deref()
                .is_none_or(|s| attributes["status"] == s)
            && self.search.as_deref().is_none_or(|s| name.contains(s))
            && (self.countries.is_empty() || self.countries.iter().any(|c| c == country))
            && self.min_players.is_none_or(|min| players >= min)
            && self.max_players.is_none_or(|max| players <= max)
            && self
                .whitelist
                .as_ref()
                .is_none_or(|ids| ids.iter().any(|w| w == id))
            && !self.blacklist.iter().any(|b| b == id)
    }
}

fn bad_request(detail: &str) -> Rejection {
    rejection(StatusCode::BAD_REQUEST, "Invalid Parameter", detail)
}

fn rejection(status: StatusCode, title: &str, detail: &str) -> Rejection {
    (
        status,
        Json(json!({
            "errors": [{
                "status": status.as_u16().to_string(),
                "title": title,
                "detail": detail,
            }]
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_parse() {
        assert_eq!(fixture_games().len(), 3);
        assert_eq!(fixture_servers().len(), 4);
    }

    #[test]
    fn query_pairs_decode_values_and_keep_repeats() {
        let query = QueryPairs::parse(Some(
            "filter[countries][]=US&filter[countries][]=CA&filter[search]=rusty%20moose&flag",
        ));
        assert_eq!(query.all("filter[countries][]"), ["US", "CA"]);
        assert_eq!(query.first("filter[search]"), Some("rusty moose"));
        assert_eq!(query.first("flag"), Some(""));
        assert_eq!(query.first("missing"), None);
    }

    #[test]
    fn query_pairs_decode_encoded_brackets_in_keys() {
        let query = QueryPairs::parse(Some("page%5Bsize%5D=2"));
        assert_eq!(query.first("page[size]"), Some("2"));
    }

    #[test]
    fn query_pairs_treat_plus_as_space() {
        let query = QueryPairs::parse(Some("filter[search]=dino+valley"));
        assert_eq!(query.first("filter[search]"), Some("dino valley"));
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(QueryPairs::parse(None).0.is_empty());
        assert!(QueryPairs::parse(Some("")).0.is_empty());
    }

    #[test]
    fn server_filter_matches_on_game_and_players() {
        let query = QueryPairs::parse(Some("filter[game]=rust&filter[players][min]=200"));
        let filter = ServerFilter::from_query(&query).unwrap();
        let names: Vec<String> = fixture_servers()
            .iter()
            .filter(|s| filter.matches(s))
            .map(|s| s["attributes"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Rusty Moose |EU Main|"]);
    }

    #[test]
    fn server_filter_rejects_non_numeric_player_bounds() {
        let query = QueryPairs::parse(Some("filter[players][max]=lots"));
        let (status, _) = ServerFilter::from_query(&query).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn select_fields_keeps_only_requested_attributes() {
        let servers = fixture_servers();
        let fields: HashSet<&str> = ["name", "ip"].into_iter().collect();
        let trimmed = select_fields(&servers[0], Some(&fields));
        let attributes = trimmed["attributes"].as_object().unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(trimmed["id"], "4729828");
    }
}

//! `/games`: games tracked by BattleMetrics.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{GameListParams, GameListResponse, GameResponse};

const COLLECTION: &str = "games";

pub fn build_list(params: Option<&GameListParams>) -> Result<HttpRequest, ApiError> {
    super::list_request(COLLECTION, params)
}

pub fn build_get(id: &str) -> HttpRequest {
    super::get_request(COLLECTION, id)
}

pub fn parse_list(response: HttpResponse) -> Result<GameListResponse, ApiError> {
    super::parse_body(response)
}

pub fn parse_get(response: HttpResponse) -> Result<GameResponse, ApiError> {
    super::parse_body(response)
}

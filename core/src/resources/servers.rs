//! `/servers`: game servers, filterable by game, status, location and more.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{ServerListParams, ServerListResponse, ServerResponse};

const COLLECTION: &str = "servers";

pub fn build_list(params: Option<&ServerListParams>) -> Result<HttpRequest, ApiError> {
    super::list_request(COLLECTION, params)
}

pub fn build_get(id: &str) -> HttpRequest {
    super::get_request(COLLECTION, id)
}

pub fn parse_list(response: HttpResponse) -> Result<ServerListResponse, ApiError> {
    super::parse_body(response)
}

pub fn parse_get(response: HttpResponse) -> Result<ServerResponse, ApiError> {
    super::parse_body(response)
}

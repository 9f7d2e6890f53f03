//! Request builders and response parsers for each API collection.
//!
//! # Design
//! Every operation is split into a `build_*` function that produces an
//! `HttpRequest` and a `parse_*` function that consumes an `HttpResponse`.
//! Neither touches the network. Paths are relative to the API root; the
//! transport supplies the base URL and credentials.

pub mod games;
pub mod servers;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::to_query_string;

/// `/{collection}` plus `?query` when the parameters encode to anything.
fn list_request<P: Serialize>(collection: &str, params: Option<&P>) -> Result<HttpRequest, ApiError> {
    let query = to_query_string(&params)?;
    let path = if query.is_empty() {
        format!("/{collection}")
    } else {
        format!("/{collection}?{query}")
    };
    debug!(%path, "built list request");
    Ok(HttpRequest::get(path))
}

/// `/{collection}/{id}` with the id escaped as a path segment.
fn get_request(collection: &str, id: &str) -> HttpRequest {
    let path = format!("/{collection}/{}", urlencoding::encode(id));
    debug!(%path, "built get request");
    HttpRequest::get(path)
}

/// Reject non-2xx responses, then decode the body.
pub(crate) fn parse_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

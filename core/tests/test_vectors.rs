//! Check the encoder, builders and parsers against JSON vectors in `test-vectors/`.
//!
//! Query cases compare exact strings in bracket mode, since pair order is
//! part of the wire format. Flat cases compare the flattened map as JSON.

use battlemetrics_core::resources::{games, servers};
use battlemetrics_core::{
    encode, flatten, ApiError, GameListParams, HttpMethod, HttpRequest, HttpResponse,
    ServerListParams,
};
use serde_json::Value;

fn load(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn name(case: &Value) -> &str {
    case["name"].as_str().unwrap()
}

// ---------------------------------------------------------------------------
// Query encoding
// ---------------------------------------------------------------------------

#[test]
fn query_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/query.json"));

    for case in vectors["cases"].as_array().unwrap() {
        let name = name(case);
        let input = &case["input"];
        match case["mode"].as_str().unwrap() {
            "bracket" => {
                let expected = case["expected"].as_str().unwrap();
                assert_eq!(encode(input), expected, "{name}");
                assert_eq!(encode(input), encode(input), "{name}: deterministic");
            }
            "flat" => {
                let flat = Value::Object(flatten(input));
                assert_eq!(flat, case["expected"], "{name}");
            }
            other => panic!("{name}: unknown mode {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request building
// ---------------------------------------------------------------------------

fn build(case: &Value) -> HttpRequest {
    let params = &case["params"];
    let id = || case["id"].as_str().unwrap();
    match (case["resource"].as_str().unwrap(), case["operation"].as_str().unwrap()) {
        ("games", "list") => {
            let params: Option<GameListParams> = serde_json::from_value(params.clone()).unwrap();
            games::build_list(params.as_ref()).unwrap()
        }
        ("games", "get") => games::build_get(id()),
        ("servers", "list") => {
            let params: Option<ServerListParams> = serde_json::from_value(params.clone()).unwrap();
            servers::build_list(params.as_ref()).unwrap()
        }
        ("servers", "get") => servers::build_get(id()),
        (resource, operation) => panic!("unknown vector target {resource}/{operation}"),
    }
}

#[test]
fn request_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/requests.json"));

    for case in vectors["requests"].as_array().unwrap() {
        let name = name(case);
        let req = build(case);
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert_eq!(req.path, case["expected_path"].as_str().unwrap(), "{name}: path");
        assert!(req.headers.is_empty(), "{name}: headers");
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parse a canned response and return the ids of the resources it carries.
fn parse(case: &Value) -> Result<Vec<String>, ApiError> {
    let response = HttpResponse {
        status: case["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: case["body"].to_string(),
    };
    match (case["resource"].as_str().unwrap(), case["operation"].as_str().unwrap()) {
        ("games", "list") => Ok(games::parse_list(response)?.data.into_iter().map(|g| g.id).collect()),
        ("games", "get") => Ok(vec![games::parse_get(response)?.data.id]),
        ("servers", "list") => Ok(servers::parse_list(response)?.data.into_iter().map(|s| s.id).collect()),
        ("servers", "get") => Ok(vec![servers::parse_get(response)?.data.id]),
        (resource, operation) => panic!("unknown vector target {resource}/{operation}"),
    }
}

#[test]
fn response_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/requests.json"));

    for case in vectors["responses"].as_array().unwrap() {
        let name = name(case);
        let expected = &case["expected"];
        let result = parse(case);

        if expected["ok"].as_bool().unwrap() {
            let ids = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            let expected_ids: Vec<String> = serde_json::from_value(expected["ids"].clone()).unwrap();
            assert_eq!(ids, expected_ids, "{name}: ids");
        } else {
            let err = result.expect_err(name);
            let status = expected["status"].as_u64().map(|s| s as u16);
            assert_eq!(err.status(), status, "{name}: status");
            if status.is_none() {
                assert!(matches!(err, ApiError::Deserialization(_)), "{name}: {err}");
            }
        }
    }
}

//! Parameter-tree to query-string encoding.
//!
//! # Design
//! BattleMetrics expects nested parameters in bracket notation
//! (`filter[players][min]=10`). A parameter tree is any `serde_json::Value`
//! mapping; typed parameter structs reach this module through `Serialize`.
//! `serde_json` is built with `preserve_order`, so pairs come out in the
//! order the keys were inserted (struct field order for typed params).
//!
//! A single walker serves two modes:
//! - [`EncodeMode::Bracket`] is the wire format the API documents: colon
//!   shorthand keys are expanded, arrays become repeated `key[]=` pairs
//!   except under a field selection (`fields[server]`), where they are
//!   comma-joined.
//! - [`EncodeMode::Flat`] only builds bracket paths. Arrays stay opaque
//!   leaves and nothing is percent-encoded. It suits transports that
//!   serialize a flat map themselves.
//!
//! Null values are skipped in both modes. Falsy values such as `0` and
//! `false` are not null and are always emitted. This includes null items in
//! a field selection: `["name", null, "ip"]` joins to `name,ip`, not the
//! `name,,ip` a plain string join would give.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::ApiError;

const FIELDS_KEY: &str = "fields";

/// How a parameter tree is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    /// Full BattleMetrics wire format.
    #[default]
    Bracket,
    /// Plain `path -> value` flattening.
    Flat,
}

/// Flattens parameter trees into ordered key/value pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEncoder {
    mode: EncodeMode,
}

impl QueryEncoder {
    pub fn new(mode: EncodeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Walk `params` depth-first and return the emitted `(path, value)`
    /// pairs in order. Anything other than a mapping yields no pairs.
    pub fn pairs(&self, params: &Value) -> Vec<(String, Value)> {
        let mut out = Vec::new();
        if let Value::Object(map) = params {
            self.walk(map, "", &mut out);
        }
        out
    }

    /// Render `params` as an `&`-joined query string without a leading `?`.
    ///
    /// Values are percent-encoded in bracket mode and written verbatim in
    /// flat mode. Keys are never encoded, so brackets stay literal.
    pub fn encode(&self, params: &Value) -> String {
        self.pairs(params)
            .iter()
            .map(|(key, value)| {
                let value = stringify(value);
                match self.mode {
                    EncodeMode::Bracket => format!("{key}={}", urlencoding::encode(&value)),
                    EncodeMode::Flat => format!("{key}={value}"),
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn walk(&self, map: &Map<String, Value>, prefix: &str, out: &mut Vec<(String, Value)>) {
        for (key, value) in map {
            let path = self.key_path(prefix, key);
            match value {
                Value::Null => {}
                Value::Object(nested) => self.walk(nested, &path, out),
                Value::Array(items) => self.push_array(path, items, out),
                primitive => out.push((path, primitive.clone())),
            }
        }
    }

    fn key_path(&self, prefix: &str, key: &str) -> String {
        let shorthand = match self.mode {
            EncodeMode::Bracket => key.split_once(':'),
            EncodeMode::Flat => None,
        };
        match (prefix.is_empty(), shorthand) {
            (true, Some((base, sub))) => format!("{base}[{sub}]"),
            (false, Some((base, sub))) => format!("{prefix}[{base}][{sub}]"),
            (true, None) => key.to_string(),
            (false, None) => format!("{prefix}[{key}]"),
        }
    }

    /// Null items are dropped before either the repeat or the comma join.
    fn push_array(&self, path: String, items: &[Value], out: &mut Vec<(String, Value)>) {
        if self.mode == EncodeMode::Flat {
            out.push((path, Value::Array(items.to_vec())));
            return;
        }

        let present = items.iter().filter(|item| !item.is_null());
        if is_field_selection(&path) {
            let joined = present.map(stringify).collect::<Vec<_>>().join(",");
            out.push((path, Value::String(joined)));
        } else {
            let key = format!("{path}[]");
            out.extend(present.map(|item| (key.clone(), item.clone())));
        }
    }
}

/// `fields[<resource>]`: the one place arrays are comma-joined.
fn is_field_selection(path: &str) -> bool {
    path.strip_prefix(FIELDS_KEY)
        .and_then(|rest| rest.strip_prefix('['))
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|resource| !resource.is_empty() && !resource.contains(['[', ']']))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => canonical_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Integers print as-is; floats with no fractional part drop the `.0`.
fn canonical_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Encode `params` in the BattleMetrics wire format.
pub fn encode(params: &Value) -> String {
    QueryEncoder::default().encode(params)
}

/// Flatten `params` into an ordered `path -> value` map.
///
/// A later duplicate path replaces the earlier value in place.
pub fn flatten(params: &Value) -> Map<String, Value> {
    QueryEncoder::new(EncodeMode::Flat)
        .pairs(params)
        .into_iter()
        .collect()
}

/// Serialize typed parameters and encode them. `None` encodes to `""`.
pub fn to_query_string<T: Serialize + ?Sized>(params: &T) -> Result<String, ApiError> {
    let tree =
        serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(encode(&tree))
}

//! Loose parameter bags and their normalization
//!
//! Mapper parameters arrive as untyped JSON objects: from hosts, from
//! persisted configurations written by older versions, or from hand-edited
//! documents. Each helper here reads one key and normalizes it to the typed
//! field a mapper stores, substituting the default where a value cannot be
//! interpreted.
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Parameter bag handed to mapper factories
pub type Params = Map<String, Value>;

/// Parse the leading decimal integer of `text`.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits. Anything after the digits is ignored. Returns `None` when no
/// digit is found.
pub fn parse_int_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0.0_f64, |acc, d| acc * 10.0 + f64::from(*d));
    Some(if negative { -magnitude } else { magnitude })
}

/// Read an integer parameter.
///
/// A missing key yields `Some(default)`. Numbers are truncated, text is parsed
/// with [`parse_int_prefix`]. `null` and anything unparseable yield `None`,
/// which mappers treat as "not a number".
pub fn int_param(params: &Params, key: &str, default: i64) -> Option<i64> {
    match params.get(key) {
        None => Some(default),
        Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => parse_int_prefix(s).map(|f| f as i64),
        Some(other) => {
            log::warn!("Parameter '{}' is not numeric: {}", key, other);
            None
        }
    }
}

/// Read a flag parameter using JSON truthiness.
pub fn bool_param(params: &Params, key: &str, default: bool) -> bool {
    match params.get(key) {
        None => default,
        Some(value) => json_truthy(value),
    }
}

/// Read a text parameter. Numbers and booleans are rendered as text.
pub fn string_param(params: &Params, key: &str, default: &str) -> String {
    match params.get(key) {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            log::warn!(
                "Parameter '{}' is not text ({}), using default '{}'",
                key,
                other,
                default
            );
            default.to_string()
        }
    }
}

/// Read an enum parameter encoded as its serde literal.
pub fn enum_param<T>(params: &Params, key: &str) -> T
where
    T: DeserializeOwned + Default + std::fmt::Debug,
{
    match params.get(key) {
        None => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
            let fallback = T::default();
            log::warn!(
                "Unknown value {} for parameter '{}', using {:?}",
                value,
                key,
                fallback
            );
            fallback
        }),
    }
}

/// Serialize a typed mapper config back into a parameter bag.
pub fn to_params<T: Serialize>(config: &T) -> Params {
    match serde_json::to_value(config) {
        Ok(Value::Object(map)) => map,
        _ => Params::new(),
    }
}

/// Read the parameter bag of a serialized mapper entry.
pub(crate) fn params_of(entry: &Value) -> Params {
    match entry.get("params") {
        Some(Value::Object(map)) => map.clone(),
        _ => Params::new(),
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

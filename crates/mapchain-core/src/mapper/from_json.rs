//! JSON property extraction mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::{Mapper, MapperConfig};
use crate::canonical::to_canonical_string;
use crate::params::{json_truthy, string_param, to_params, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::any::Any;

/// Parameters of [`FromJson`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromJsonConfig {
    /// Dot separated property path, e.g. `a.b.c`
    pub property_string: String,
}

impl FromJsonConfig {
    pub fn new(property_string: impl Into<String>) -> Self {
        Self {
            property_string: property_string.into(),
        }
    }
}

/// Parses the input as JSON and extracts the value at a property path
///
/// Path segments are literal keys; empty segments are skipped. A missing
/// or falsy property ends the walk with the empty string. Text results are
/// returned as-is, anything else as compact JSON. Falsy input and input
/// that is not JSON are returned unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FromJson {
    config: FromJsonConfig,
}

impl FromJson {
    pub const ID: &'static str = "FROMJSON";
    pub const LABEL: &'static str = "JSON";

    pub fn new(config: FromJsonConfig) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(FromJsonConfig {
            property_string: string_param(params, "propertyString", ""),
        })
    }

    pub fn settings(&self) -> &FromJsonConfig {
        &self.config
    }
}

impl Mapper for FromJson {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "JSON"
    }

    fn output_type(&self) -> OutputType {
        OutputType::String
    }

    fn transform(&self, value: &DataValue) -> DataValue {
        if !value.is_truthy() {
            return value.clone();
        }

        let document: Value = match serde_json::from_str(&value.to_text()) {
            Ok(document) => document,
            Err(_) => return value.clone(),
        };

        let mut current = spread_root(document);
        for piece in self.config.property_string.split('.') {
            if piece.is_empty() {
                continue;
            }
            current = match property(&current, piece) {
                Some(next) if json_truthy(&next) => next,
                _ => Value::String(String::new()),
            };
        }

        match current {
            Value::String(text) => DataValue::Text(text),
            other => DataValue::Text(to_canonical_string(&other).unwrap_or_default()),
        }
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Copy the parsed root into an object the way a shallow object spread does:
/// arrays and strings become index-keyed objects, other scalars become `{}`.
fn spread_root(document: Value) -> Value {
    match document {
        Value::Object(map) => Value::Object(map),
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
        ),
        Value::String(text) => Value::Object(
            text.chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
                .collect(),
        ),
        _ => Value::Object(Map::new()),
    }
}

/// Look up one path segment. Arrays and strings are indexed by canonical
/// decimal indexes only.
fn property(current: &Value, key: &str) -> Option<Value> {
    let index = || key.parse::<usize>().ok().filter(|i| i.to_string() == key);

    match current {
        Value::Object(map) => map.get(key).cloned(),
        Value::Array(items) => index().and_then(|i| items.get(i)).cloned(),
        Value::String(text) => index()
            .and_then(|i| text.chars().nth(i))
            .map(|c| Value::String(c.to_string())),
        _ => None,
    }
}

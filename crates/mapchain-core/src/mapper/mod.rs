//! Mappers: named, configurable transforms over a single scalar value
//!
//! A mapper is constructed from a loose parameter bag, transforms one
//! [`DataValue`] into another, and describes itself back as a
//! [`MapperConfig`] so a chain can be persisted and restored.
//!
//! # Module Organization
//!
//! - [`options`] - Enumerated parameters shared by several mappers
//! - [`base64`], [`chunk`], [`from_json`], [`hex_to_float`], [`hex_to_int`],
//!   [`offset`] - The built-in mappers
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

pub mod base64;
pub mod chunk;
pub mod from_json;
mod hex;
pub mod hex_to_float;
pub mod hex_to_int;
pub mod offset;
pub mod options;

use crate::params::{params_of, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;

pub use self::base64::{Base64, Base64Config};
pub use chunk::{Chunk, ChunkConfig};
pub use from_json::{FromJson, FromJsonConfig};
pub use hex_to_float::{HexToFloat, HexToFloatConfig};
pub use hex_to_int::{HexToInt, HexToIntConfig};
pub use offset::{Offset, OffsetConfig};
pub use options::{Base64Action, Base64DecodeAs, Endianness};

/// Capability contract every mapper fulfils
///
/// `transform` must be total: decode failures degrade to a fallback value
/// instead of an error, and the result depends only on the input and the
/// mapper's own configuration.
pub trait Mapper: fmt::Debug + Send + Sync {
    /// Stable type identifier, written as `id` in serialized configs
    fn id(&self) -> &str;

    /// Human readable instance name
    fn name(&self) -> &str;

    /// Declared output shape
    fn output_type(&self) -> OutputType;

    /// Transform one value
    fn transform(&self, value: &DataValue) -> DataValue;

    /// Describe this instance so that the factory registered under
    /// [`Mapper::id`] can rebuild it
    fn config(&self) -> MapperConfig;

    /// Access to the concrete type
    fn as_any(&self) -> &dyn Any;
}

/// Serialized form of one mapper: `{"id": ..., "params": {...}}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default)]
    pub id: String,
    /// Legacy name of `id`, still accepted on input
    #[serde(default, skip_serializing)]
    pub ident: Option<String>,
    #[serde(default)]
    pub params: Params,
}

impl MapperConfig {
    pub fn new(id: impl Into<String>, params: Params) -> Self {
        Self {
            id: id.into(),
            ident: None,
            params,
        }
    }

    /// Copy a non-empty legacy `ident` over `id`.
    pub fn resolve_legacy_id(&mut self) {
        if let Some(ident) = self.ident.take().filter(|ident| !ident.is_empty()) {
            self.id = ident;
        }
    }

    /// Read one entry of a serialized `mappers` array.
    ///
    /// Entries are read leniently: a missing or non-text `id` becomes the
    /// empty id (which no registered type matches), and missing or
    /// non-object `params` become an empty bag.
    pub fn from_entry(entry: &Value) -> Self {
        let text_field = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);

        let mut config = Self {
            id: text_field("id").unwrap_or_default(),
            ident: text_field("ident"),
            params: params_of(entry),
        };
        config.resolve_legacy_id();
        config
    }
}

/// Build a boxed [`Base64`] mapper
pub fn base64(config: Base64Config) -> Box<dyn Mapper> {
    Box::new(Base64::new(config))
}

/// Build a boxed [`Chunk`] mapper
pub fn chunk(config: ChunkConfig) -> Box<dyn Mapper> {
    Box::new(Chunk::new(config))
}

/// Build a boxed [`FromJson`] mapper
pub fn from_json(config: FromJsonConfig) -> Box<dyn Mapper> {
    Box::new(FromJson::new(config))
}

/// Build a boxed [`HexToFloat`] mapper
pub fn hex_to_float(config: HexToFloatConfig) -> Box<dyn Mapper> {
    Box::new(HexToFloat::new(config))
}

/// Build a boxed [`HexToInt`] mapper
pub fn hex_to_int(config: HexToIntConfig) -> Box<dyn Mapper> {
    Box::new(HexToInt::new(config))
}

/// Build a boxed [`Offset`] mapper
pub fn offset(config: OffsetConfig) -> Box<dyn Mapper> {
    Box::new(Offset::new(config))
}

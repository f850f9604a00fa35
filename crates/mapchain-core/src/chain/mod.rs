//! Mapper chains: ordered mappers applied to one value
//!
//! A [`MapperChain`] folds a value through its mappers left to right and can
//! be persisted to, and restored from, a compact JSON document.
//!
//! # Module Organization
//!
//! - [`wire`] - Serialized chain format, `serialize` and `deserialize`
//! - [`builder`] - Fluent operations adding one built-in mapper each
//!
//! # Examples
//!
//! ```
//! use mapchain_core::{DataValue, MapperChain};
//! use mapchain_core::mapper::{Base64Config, Base64DecodeAs, ChunkConfig, HexToIntConfig};
//!
//! let mut chain = MapperChain::new();
//! chain
//!     .base64(Base64Config { decode_as: Base64DecodeAs::HexString, ..Default::default() })
//!     .chunk(ChunkConfig::new(0, 2))
//!     .hex_to_int(HexToIntConfig::default());
//!
//! assert_eq!(chain.apply("QQ==".into()), DataValue::Number(65.0));
//!
//! let mut restored = MapperChain::new();
//! restored.deserialize(&chain.serialize().unwrap()).unwrap();
//! assert_eq!(restored.len(), 3);
//! ```
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod wire;


use crate::mapper::{Mapper, MapperConfig};
use crate::registry::{MapperRegistry, MapperType};
use crate::value::DataValue;
use serde_json::{Map, Value};

pub use wire::{SerializedChain, CHAIN_CONFIG_VERSION};

/// Construction options for a [`MapperChain`]
#[derive(Debug)]
pub struct ChainOptions {
    /// Initial mappers, in application order
    pub mappers: Vec<Box<dyn Mapper>>,
    pub name: String,
    /// Opaque host data, carried through serialization untouched
    pub meta: Value,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            mappers: Vec::new(),
            name: String::new(),
            meta: Value::Object(Map::new()),
        }
    }
}

/// An ordered sequence of mappers with a name, meta data and its own
/// registry of mapper types
///
/// `name` and `meta` are optional because configurations loaded from older
/// documents may omit them; [`MapperChain::serialize`] then omits them too.
/// A loaded `name` is kept as whatever JSON value the document held.
#[derive(Debug)]
pub struct MapperChain {
    mappers: Vec<Box<dyn Mapper>>,
    name: Option<Value>,
    meta: Option<Value>,
    last_input: DataValue,
    registry: MapperRegistry,
}

impl MapperChain {
    /// Create an empty chain that knows the built-in mapper types
    pub fn new() -> Self {
        Self::from_options(ChainOptions::default())
    }

    /// Create an empty chain resolving mapper ids against `registry`
    pub fn with_registry(registry: MapperRegistry) -> Self {
        let mut chain = Self::new();
        chain.registry = registry;
        chain
    }

    /// Create a chain from construction options. Mappers are taken verbatim.
    pub fn from_options(options: ChainOptions) -> Self {
        Self {
            mappers: options.mappers,
            name: Some(Value::String(options.name)),
            meta: Some(options.meta),
            last_input: DataValue::default(),
            registry: MapperRegistry::with_builtins(),
        }
    }

    /// Append a mapper. Duplicates are allowed.
    pub fn add_mapper(&mut self, mapper: Box<dyn Mapper>) -> &mut Self {
        self.mappers.push(mapper);
        self
    }

    /// Make a mapper type available to this chain, replacing any type
    /// registered under the same id
    pub fn register_mapper_type(&mut self, mapper_type: MapperType) {
        self.registry.register(mapper_type);
    }

    pub fn find_mapper_type(&self, id: &str) -> Option<&MapperType> {
        self.registry.lookup(id)
    }

    /// Build a mapper from its serialized config, or `None` when the id is
    /// not registered
    pub fn build_mapper_from_config(&self, config: &MapperConfig) -> Option<Box<dyn Mapper>> {
        self.registry.instantiate(config)
    }

    /// Run `value` through every mapper in order.
    ///
    /// With no mappers the value is returned unchanged.
    pub fn apply(&mut self, value: DataValue) -> DataValue {
        self.last_input = value.clone();
        self.mappers
            .iter()
            .fold(value, |current, mapper| mapper.transform(&current))
    }

    pub fn mappers(&self) -> &[Box<dyn Mapper>] {
        &self.mappers
    }

    /// The chain name, when it is text
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// The name exactly as stored, including non-text values read from a
    /// document
    pub fn name_value(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(Value::String(name.into()));
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: Value) {
        self.meta = Some(meta);
    }

    /// The value most recently passed to [`MapperChain::apply`]
    pub fn last_input(&self) -> &DataValue {
        &self.last_input
    }

    pub fn registry(&self) -> &MapperRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl Default for MapperChain {
    fn default() -> Self {
        Self::new()
    }
}

//! Registry of known mapper types
//!
//! The registry maps a mapper id to a display label and a factory that
//! builds instances from a parameter bag. Chains own their registry, so
//! custom types registered on one chain never leak into another.
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use crate::mapper::{
    Base64, Chunk, FromJson, HexToFloat, HexToInt, Mapper, MapperConfig, Offset,
};
use crate::params::Params;
use std::fmt;
use std::sync::Arc;

/// Builds a mapper from a parameter bag
pub type MapperFactory = Arc<dyn Fn(&Params) -> Box<dyn Mapper> + Send + Sync>;

/// A registry entry: id, display label and factory
#[derive(Clone)]
pub struct MapperType {
    pub id: String,
    pub label: String,
    pub factory: MapperFactory,
}

impl MapperType {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&Params) -> Box<dyn Mapper> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            factory: Arc::new(factory),
        }
    }

    /// Build an instance from `params`
    pub fn build(&self, params: &Params) -> Box<dyn Mapper> {
        (self.factory)(params)
    }
}

impl fmt::Debug for MapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperType")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered list of mapper types, unique by id
#[derive(Debug, Clone, Default)]
pub struct MapperRegistry {
    types: Vec<MapperType>,
}

impl MapperRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Create a registry holding the built-in mapper types
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for mapper_type in builtin_types() {
            registry.register(mapper_type);
        }
        registry
    }

    /// Register a mapper type.
    ///
    /// A type whose id is already present replaces the existing entry at
    /// its position; otherwise the type is appended.
    pub fn register(&mut self, mapper_type: MapperType) {
        match self.types.iter().position(|t| t.id == mapper_type.id) {
            Some(index) => {
                log::debug!("Overriding mapper type '{}'", mapper_type.id);
                self.types[index] = mapper_type;
            }
            None => {
                log::debug!("Registering mapper type '{}'", mapper_type.id);
                self.types.push(mapper_type);
            }
        }
    }

    /// Find a mapper type by exact, case-sensitive id
    pub fn lookup(&self, id: &str) -> Option<&MapperType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Build a mapper from its serialized config.
    ///
    /// Returns `None` when no type is registered under the config's id.
    pub fn instantiate(&self, config: &MapperConfig) -> Option<Box<dyn Mapper>> {
        self.lookup(&config.id).map(|t| t.build(&config.params))
    }

    /// Registered types in registration order
    pub fn types(&self) -> impl Iterator<Item = &MapperType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The built-in mapper types, in listing order
pub fn builtin_types() -> Vec<MapperType> {
    vec![
        MapperType::new(Chunk::ID, Chunk::LABEL, |p| Box::new(Chunk::from_params(p))),
        MapperType::new(HexToFloat::ID, HexToFloat::LABEL, |p| {
            Box::new(HexToFloat::from_params(p))
        }),
        MapperType::new(HexToInt::ID, HexToInt::LABEL, |p| Box::new(HexToInt::from_params(p))),
        MapperType::new(Offset::ID, Offset::LABEL, |p| Box::new(Offset::from_params(p))),
        MapperType::new(Base64::ID, Base64::LABEL, |p| Box::new(Base64::from_params(p))),
        MapperType::new(FromJson::ID, FromJson::LABEL, |p| Box::new(FromJson::from_params(p))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ChunkConfig;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_builtin_order_and_labels() {
        let registry = MapperRegistry::with_builtins();
        let listing: Vec<(&str, &str)> = registry
            .types()
            .map(|t| (t.id.as_str(), t.label.as_str()))
            .collect();

        assert_eq!(
            listing,
            [
                ("CHUNK", "Chunk"),
                ("HEXTOFLOAT", "Hex to float"),
                ("HEXTOINT", "Hex to int"),
                ("OFFSET", "Offset number"),
                ("BASE64", "Base64"),
                ("FROMJSON", "JSON"),
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = MapperRegistry::with_builtins();
        assert!(registry.lookup("CHUNK").is_some());
        assert!(registry.lookup("chunk").is_none());
    }

    #[test]
    fn test_register_appends_new_ids() {
        let mut registry = MapperRegistry::with_builtins();
        registry.register(MapperType::new("CUSTOM", "Custom", |p| Box::new(Chunk::from_params(p))));
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.types().last().map(|t| t.id.as_str()), Some("CUSTOM"));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = MapperRegistry::with_builtins();
        registry.register(MapperType::new("HEXTOINT", "Replaced", |p| {
            Box::new(Chunk::from_params(p))
        }));

        assert_eq!(registry.len(), 6);
        let entry = registry.types().nth(2).unwrap();
        assert_eq!(entry.id, "HEXTOINT");
        assert_eq!(entry.label, "Replaced");
        let built = registry
            .instantiate(&MapperConfig::new("HEXTOINT", Params::new()))
            .unwrap();
        assert_eq!(built.id(), "CHUNK");
    }

    #[test]
    fn test_instantiate_passes_params() {
        let registry = MapperRegistry::with_builtins();
        let mapper = registry
            .instantiate(&MapperConfig::new("CHUNK", params(json!({"start": 1, "size": 3}))))
            .unwrap();
        let chunk = mapper.as_any().downcast_ref::<Chunk>().unwrap();
        assert_eq!(chunk.settings(), &ChunkConfig::new(1, 3));
    }

    #[test]
    fn test_instantiate_unknown_id() {
        let registry = MapperRegistry::with_builtins();
        assert!(registry
            .instantiate(&MapperConfig::new("NONEXISTANT", Params::new()))
            .is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = MapperRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("CHUNK").is_none());
    }
}

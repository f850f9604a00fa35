//! Serialized chain format
//!
//! A chain serializes to compact JSON with a fixed field order:
//!
//! ```text
//! {"name":"...","version":"0.1.1","meta":{...},"mappers":[{"id":"...","params":{...}}]}
//! ```
//!
//! Numbers are written in their shortest JavaScript form and integer-like
//! object keys come first, so documents stay byte-comparable with those
//! written by the JavaScript runtime.
//!
//! Loading is lenient per entry: legacy `ident` keys are honoured and
//! entries with unknown ids are dropped. Only a document that is not JSON,
//! or not shaped like a chain, is an error.
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::MapperChain;
use crate::canonical::to_canonical_string;
use crate::error::{Error, Result};
use crate::mapper::MapperConfig;
use serde::Serialize;
use serde_json::Value;

/// Version literal written into every serialized chain
pub const CHAIN_CONFIG_VERSION: &str = "0.1.1";

/// Borrowed view of a chain in wire order
#[derive(Debug, Serialize)]
pub struct SerializedChain<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a Value>,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<&'a Value>,
    pub mappers: Vec<MapperConfig>,
}

impl MapperChain {
    /// Wire view of this chain; each entry is the mapper's own `config()`
    pub fn to_serialized(&self) -> SerializedChain<'_> {
        SerializedChain {
            name: self.name.as_ref(),
            version: CHAIN_CONFIG_VERSION,
            meta: self.meta.as_ref(),
            mappers: self.mappers.iter().map(|mapper| mapper.config()).collect(),
        }
    }

    /// Serialize the chain to compact canonical JSON
    pub fn serialize(&self) -> Result<String> {
        to_canonical_string(&self.to_serialized())
    }

    /// Load a serialized chain into this one.
    ///
    /// `name` and `meta` are replaced by the document's fields as they are,
    /// including their absence. Resolvable mappers are appended after any
    /// mappers already present; unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Fails without modifying the chain when `text` is not JSON, is not an
    /// object, or has no `mappers` array.
    pub fn deserialize(&mut self, text: &str) -> Result<&mut Self> {
        let document: Value = serde_json::from_str(text)?;
        let root = document
            .as_object()
            .ok_or_else(|| Error::malformed("chain configuration must be a JSON object", "$"))?;

        let entries = root
            .get("mappers")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed("mappers must be an array", "mappers"))?;

        self.name = root.get("name").cloned();
        self.meta = root.get("meta").cloned();

        for entry in entries {
            let config = MapperConfig::from_entry(entry);
            match self.build_mapper_from_config(&config) {
                Some(mapper) => {
                    self.add_mapper(mapper);
                }
                None => log::debug!("Skipping mapper with unknown id '{}'", config.id),
            }
        }

        Ok(self)
    }
}

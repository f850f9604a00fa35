//! Substring mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::{Mapper, MapperConfig};
use crate::params::{int_param, to_params, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Parameters of [`Chunk`]
///
/// `None` marks a parameter that was supplied but is not a number; it
/// serializes as `null` and counts as `0` when slicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    pub start: Option<i64>,
    pub size: Option<i64>,
}

impl ChunkConfig {
    pub fn new(start: i64, size: i64) -> Self {
        Self {
            start: Some(start),
            size: Some(size),
        }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(0, 4)
    }
}

/// Cuts `size` characters out of the text form of the input, beginning at `start`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chunk {
    config: ChunkConfig,
}

impl Chunk {
    pub const ID: &'static str = "CHUNK";
    pub const LABEL: &'static str = "Chunk";

    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(ChunkConfig {
            start: int_param(params, "start", 0),
            size: int_param(params, "size", 4),
        })
    }

    pub fn settings(&self) -> &ChunkConfig {
        &self.config
    }

    /// Character bounds of the chunk within a text of `len` characters.
    ///
    /// Bounds clamp to `0..=len` and are swapped when start exceeds end.
    fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.config.start.unwrap_or(0);
        let end = match (self.config.start, self.config.size) {
            (Some(start), Some(size)) => start.saturating_add(size),
            _ => 0,
        };

        let clamp = |index: i64| usize::try_from(index.max(0)).unwrap_or(usize::MAX).min(len);
        let (from, to) = (clamp(start), clamp(end));
        if from > to {
            (to, from)
        } else {
            (from, to)
        }
    }
}

impl Mapper for Chunk {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Chunk"
    }

    fn output_type(&self) -> OutputType {
        OutputType::String
    }

    fn transform(&self, value: &DataValue) -> DataValue {
        let text = value.to_text();
        let (from, to) = self.bounds(text.chars().count());
        DataValue::Text(text.chars().skip(from).take(to - from).collect())
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

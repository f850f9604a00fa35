//! Fluent operations adding one built-in mapper each
//!
//! Every operation appends its mapper and returns the chain, so calls can
//! be strung together.

use super::MapperChain;
use crate::mapper::{
    Base64, Base64Config, Chunk, ChunkConfig, FromJson, FromJsonConfig, HexToFloat,
    HexToFloatConfig, HexToInt, HexToIntConfig, Offset, OffsetConfig,
};

impl MapperChain {
    /// Add a [`Base64`] mapper
    pub fn base64(&mut self, config: Base64Config) -> &mut Self {
        self.add_mapper(Box::new(Base64::new(config)))
    }

    /// Add a [`Chunk`] mapper
    pub fn chunk(&mut self, config: ChunkConfig) -> &mut Self {
        self.add_mapper(Box::new(Chunk::new(config)))
    }

    /// Add a [`FromJson`] mapper
    pub fn from_json(&mut self, config: FromJsonConfig) -> &mut Self {
        self.add_mapper(Box::new(FromJson::new(config)))
    }

    /// Add a [`HexToFloat`] mapper
    pub fn hex_to_float(&mut self, config: HexToFloatConfig) -> &mut Self {
        self.add_mapper(Box::new(HexToFloat::new(config)))
    }

    /// Add a [`HexToInt`] mapper
    pub fn hex_to_int(&mut self, config: HexToIntConfig) -> &mut Self {
        self.add_mapper(Box::new(HexToInt::new(config)))
    }

    /// Add an [`Offset`] mapper
    pub fn offset(&mut self, config: OffsetConfig) -> &mut Self {
        self.add_mapper(Box::new(Offset::new(config)))
    }
}

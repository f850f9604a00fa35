//! Mapchain Core - serializable chains of scalar value mappers
//!
//! This crate applies an ordered list of small transforms ("mappers") to a
//! single text or numeric value and persists that list as JSON so a host
//! application can store and restore it.
//!
//! # Main Components
//!
//! - **Values**: [`DataValue`], the scalar threaded through a chain
//! - **Mappers**: the [`Mapper`] contract and the built-in Base64, Chunk,
//!   FromJSON, HexToInt, HexToFloat and Offset mappers
//! - **Registry**: [`MapperRegistry`], mapping ids to mapper factories
//! - **Chain Engine**: [`MapperChain`], applying mappers in order and
//!   reading/writing the serialized configuration
//! - **Canonical Text**: JavaScript-compatible number text and JSON output
//! - **Error Handling**: [`Error`] and [`Result`], built with `thiserror`
//!
//! # Example
//!
//! ```
//! use mapchain_core::{create, ChainOptions, DataValue, Result};
//! use mapchain_core::mapper::{HexToIntConfig, OffsetConfig};
//!
//! fn example() -> Result<()> {
//!     let mut chain = create(ChainOptions::default());
//!     chain.hex_to_int(HexToIntConfig::default()).offset(OffsetConfig::new(5));
//!     assert_eq!(chain.apply("0x0A".into()), DataValue::Number(15.0));
//!
//!     let persisted = chain.serialize()?;
//!     let mut restored = create(ChainOptions::default());
//!     restored.deserialize(&persisted)?;
//!     assert_eq!(restored.apply("0x0A".into()), DataValue::Number(15.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod canonical;
pub mod chain;
pub mod error;
pub mod mapper;
pub mod params;
pub mod registry;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use chain::{ChainOptions, MapperChain, SerializedChain, CHAIN_CONFIG_VERSION};
pub use error::{Error, Result};
pub use mapper::{Mapper, MapperConfig};
pub use params::Params;
pub use registry::{MapperFactory, MapperRegistry, MapperType};
pub use value::{DataValue, OutputType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a new chain from construction options
pub fn create(options: ChainOptions) -> MapperChain {
    MapperChain::from_options(options)
}

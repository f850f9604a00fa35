//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid values, mapper configurations and chains.

#![cfg(test)]

use crate::chain::{ChainOptions, MapperChain};
use crate::mapper::*;
use crate::value::DataValue;
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating scalar values
pub fn data_value_strategy() -> impl Strategy<Value = DataValue> {
    prop_oneof![
        ".{0,24}".prop_map(DataValue::Text),
        "(0x)?[0-9a-fA-F_]{0,16}".prop_map(DataValue::Text),
        "[A-Za-z0-9+/]{0,12}={0,2}".prop_map(DataValue::Text),
        any::<i32>().prop_map(DataValue::from),
        (-1.0e6f64..1.0e6).prop_map(DataValue::Number),
    ]
}

/// Strategy for generating endianness settings
pub fn endianness_strategy() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Little), Just(Endianness::Big)]
}

/// Strategy for generating one built-in mapper
pub fn mapper_strategy() -> impl Strategy<Value = Box<dyn Mapper>> {
    prop_oneof![
        (
            prop_oneof![Just(Base64Action::Encode), Just(Base64Action::Decode)],
            prop_oneof![Just(Base64DecodeAs::String), Just(Base64DecodeAs::HexString)],
        )
            .prop_map(|(action, decode_as)| base64(Base64Config { action, decode_as })),
        (proptest::option::of(-8i64..32), proptest::option::of(-8i64..32))
            .prop_map(|(start, size)| chunk(ChunkConfig { start, size })),
        "[a-z0-9]{0,4}(\\.[a-z0-9]{0,4}){0,3}".prop_map(|path| from_json(FromJsonConfig::new(path))),
        endianness_strategy().prop_map(|endianness| hex_to_float(HexToFloatConfig { endianness })),
        (endianness_strategy(), any::<bool>())
            .prop_map(|(endianness, signed)| hex_to_int(HexToIntConfig { endianness, signed })),
        proptest::option::of(-1000i64..1000).prop_map(|offset| self::offset(OffsetConfig { offset })),
    ]
}

/// Strategy for generating meta data bags
pub fn meta_strategy() -> impl Strategy<Value = Value> {
    hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,10}", "[a-zA-Z0-9 ]{0,20}", 0..4).prop_map(|entries| {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    })
}

/// Strategy for generating chains of built-in mappers
pub fn chain_strategy() -> impl Strategy<Value = MapperChain> {
    ("[a-zA-Z0-9 ]{0,20}", meta_strategy(), vec(mapper_strategy(), 0..6)).prop_map(
        |(name, meta, mappers)| {
            MapperChain::from_options(ChainOptions {
                mappers,
                name,
                meta,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        /// Property: transforms are total and never panic
        #[test]
        fn prop_transform_never_panics(
            mapper in mapper_strategy(),
            value in data_value_strategy()
        ) {
            let _ = mapper.transform(&value);
        }

        /// Property: transforms are deterministic
        #[test]
        fn prop_transform_deterministic(
            mapper in mapper_strategy(),
            value in data_value_strategy()
        ) {
            prop_assert_eq!(mapper.transform(&value), mapper.transform(&value));
        }

        /// Property: an empty chain is the identity
        #[test]
        fn prop_empty_chain_is_identity(value in data_value_strategy()) {
            let mut chain = MapperChain::new();
            prop_assert_eq!(chain.apply(value.clone()), value);
        }

        /// Property: apply is a left-to-right fold of the mappers
        #[test]
        fn prop_apply_is_left_fold(
            mut chain in chain_strategy(),
            value in data_value_strategy()
        ) {
            let expected = chain
                .mappers()
                .iter()
                .fold(value.clone(), |current, mapper| mapper.transform(&current));
            prop_assert_eq!(chain.apply(value), expected);
        }

        /// Property: serialize then deserialize preserves name, meta and configs
        #[test]
        fn prop_serialization_round_trip(chain in chain_strategy()) {
            let text = chain.serialize().unwrap();
            let mut restored = MapperChain::new();
            restored.deserialize(&text).unwrap();

            prop_assert_eq!(restored.name(), chain.name());
            prop_assert_eq!(restored.meta(), chain.meta());
            prop_assert_eq!(restored.len(), chain.len());
            for (original, loaded) in chain.mappers().iter().zip(restored.mappers()) {
                prop_assert_eq!(original.config(), loaded.config());
            }
        }

        /// Property: rebuilding a mapper from its config preserves behavior
        #[test]
        fn prop_config_rebuild_equivalent(
            mapper in mapper_strategy(),
            value in data_value_strategy()
        ) {
            let registry = crate::registry::MapperRegistry::with_builtins();
            let rebuilt = registry.instantiate(&mapper.config()).unwrap();
            prop_assert_eq!(rebuilt.transform(&value), mapper.transform(&value));
        }
    }
}

//! Numeric offset mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::{Mapper, MapperConfig};
use crate::params::{int_param, parse_int_prefix, to_params, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Parameters of [`Offset`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetConfig {
    /// `None` when the supplied offset is not a number
    pub offset: Option<i64>,
}

impl OffsetConfig {
    pub fn new(offset: i64) -> Self {
        Self {
            offset: Some(offset),
        }
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Adds a fixed offset to a number
///
/// Text input is read as a leading decimal integer. Input that is not a
/// number, or a non-numeric offset, yields `0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Offset {
    config: OffsetConfig,
}

impl Offset {
    pub const ID: &'static str = "OFFSET";
    pub const LABEL: &'static str = "Offset number";

    pub fn new(config: OffsetConfig) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(OffsetConfig {
            offset: int_param(params, "offset", 0),
        })
    }

    pub fn settings(&self) -> &OffsetConfig {
        &self.config
    }
}

impl Mapper for Offset {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Offset"
    }

    fn output_type(&self) -> OutputType {
        OutputType::Number
    }

    fn transform(&self, value: &DataValue) -> DataValue {
        let number = match value {
            DataValue::Number(n) => *n,
            DataValue::Text(text) => parse_int_prefix(text).unwrap_or(f64::NAN),
        };

        match self.config.offset {
            Some(offset) if !number.is_nan() => DataValue::Number(number + offset as f64),
            _ => DataValue::Number(0.0),
        }
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn offset(by: i64) -> Offset {
        Offset::new(OffsetConfig::new(by))
    }

    #[test]
    fn test_adds_offset() {
        assert_eq!(offset(5).transform(&10.into()), DataValue::Number(15.0));
        assert_eq!(offset(-3).transform(&1.5.into()), DataValue::Number(-1.5));
    }

    #[test]
    fn test_text_input_is_parsed() {
        assert_eq!(offset(5).transform(&"10".into()), DataValue::Number(15.0));
        assert_eq!(offset(1).transform(&" 7px".into()), DataValue::Number(8.0));
        assert_eq!(offset(0).transform(&"2.9".into()), DataValue::Number(2.0));
    }

    #[test]
    fn test_non_numeric_input_yields_zero() {
        assert_eq!(offset(5).transform(&"abc".into()), DataValue::Number(0.0));
        assert_eq!(offset(5).transform(&"".into()), DataValue::Number(0.0));
        assert_eq!(offset(5).transform(&f64::NAN.into()), DataValue::Number(0.0));
    }

    #[test]
    fn test_non_numeric_offset_yields_zero() {
        let params = match json!({"offset": "many"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let mapper = Offset::from_params(&params);
        assert_eq!(mapper.settings().offset, None);
        assert_eq!(mapper.transform(&10.into()), DataValue::Number(0.0));
    }

    #[test]
    fn test_config_round_trip() {
        let params = match json!({"offset": "12"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let mapper = Offset::from_params(&params);
        let config = mapper.config();
        assert_eq!(config.id, "OFFSET");
        assert_eq!(serde_json::to_string(&config.params).unwrap(), r#"{"offset":12}"#);
        assert_eq!(Offset::from_params(&config.params), mapper);
    }
}

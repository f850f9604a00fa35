//! Hex text to IEEE-754 single precision mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::hex::{drop_hex_marker, is_hex_text, leading_digits, reverse_byte_groups};
use super::options::Endianness;
use super::{Mapper, MapperConfig};
use crate::params::{enum_param, to_params, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Parameters of [`HexToFloat`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HexToFloatConfig {
    pub endianness: Endianness,
}

/// Decodes 8 hex digits as a 32-bit float pattern
///
/// The value is `sign * (1 + mantissa / 2^23) * 2^(exponent - 127)`. The
/// implicit leading one is always applied, so zero, subnormal and
/// non-finite patterns decode to ordinary finite numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HexToFloat {
    config: HexToFloatConfig,
}

impl HexToFloat {
    pub const ID: &'static str = "HEXTOFLOAT";
    pub const LABEL: &'static str = "Hex to float";

    pub fn new(config: HexToFloatConfig) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(HexToFloatConfig {
            endianness: enum_param(params, "endianness"),
        })
    }

    pub fn settings(&self) -> &HexToFloatConfig {
        &self.config
    }
}

impl Mapper for HexToFloat {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Hex to float"
    }

    fn output_type(&self) -> OutputType {
        OutputType::Number
    }

    fn transform(&self, value: &DataValue) -> DataValue {
        if !value.is_truthy() {
            return DataValue::Number(0.0);
        }

        let text = value.to_text();
        if !is_hex_text(&text) {
            return DataValue::Number(0.0);
        }

        let body = drop_hex_marker(&text);
        let digits = match self.config.endianness {
            Endianness::Little => leading_digits(&reverse_byte_groups(body)).to_string(),
            Endianness::Big => leading_digits(body).to_string(),
        };

        DataValue::Number(decode_single(low_word(&digits)))
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Low 32 bits of a run of hex digits; an empty run reads as zero.
fn low_word(digits: &str) -> u32 {
    let tail = &digits[digits.len().saturating_sub(8)..];
    if tail.is_empty() {
        return 0;
    }
    u32::from_str_radix(tail, 16).unwrap_or(0)
}

fn decode_single(bits: u32) -> f64 {
    let sign = if bits >> 31 == 1 { -1.0 } else { 1.0 };
    let exponent = ((bits >> 23) & 0xff) as i32;
    let mantissa = f64::from((bits & 0x7f_ffff) | 0x80_0000);

    (sign * mantissa / 8_388_608.0) * 2f64.powi(exponent - 127)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn little() -> HexToFloat {
        HexToFloat::new(HexToFloatConfig {
            endianness: Endianness::Little,
        })
    }

    #[test]
    fn test_one() {
        let mapper = HexToFloat::default();
        assert_eq!(mapper.transform(&"3F800000".into()), DataValue::Number(1.0));
        assert_eq!(mapper.transform(&"0x3F800000".into()), DataValue::Number(1.0));
    }

    #[test]
    fn test_sign_and_exponent() {
        let mapper = HexToFloat::default();
        assert_eq!(mapper.transform(&"BF800000".into()), DataValue::Number(-1.0));
        assert_eq!(mapper.transform(&"40490FDB".into()), DataValue::Number(f64::from(std::f32::consts::PI)));
        assert_eq!(mapper.transform(&"41200000".into()), DataValue::Number(10.0));
    }

    #[test]
    fn test_little_endian() {
        assert_eq!(little().transform(&"0000803F".into()), DataValue::Number(1.0));
    }

    #[test]
    fn test_zero_pattern_keeps_implicit_one() {
        let mapper = HexToFloat::default();
        assert_eq!(mapper.transform(&"00000000".into()), DataValue::Number(2f64.powi(-127)));
    }

    #[test]
    fn test_matches_f32_for_normal_patterns() {
        let mapper = HexToFloat::default();
        for bits in [0x3e20_0000u32, 0xc2f6_e979, 0x4b18_9680, 0x0080_0000] {
            let text = format!("{:08X}", bits);
            assert_eq!(
                mapper.transform(&text.as_str().into()),
                DataValue::Number(f64::from(f32::from_bits(bits)))
            );
        }
    }

    #[test]
    fn test_underscore_ends_the_digit_run() {
        let mapper = HexToFloat::default();
        assert_eq!(
            mapper.transform(&"3F80_0000".into()),
            DataValue::Number(decode_single(0x3F80))
        );
        // "_0" and "00" swap to "00_0", leaving the digits "00"
        assert_eq!(little().transform(&"_000".into()), DataValue::Number(2f64.powi(-127)));
    }

    #[test]
    fn test_fallbacks() {
        let mapper = HexToFloat::default();
        assert_eq!(mapper.transform(&"".into()), DataValue::Number(0.0));
        assert_eq!(mapper.transform(&"not hex".into()), DataValue::Number(0.0));
    }

    #[test]
    fn test_config_round_trip() {
        let mapper = little();
        let config = mapper.config();
        assert_eq!(config.id, "HEXTOFLOAT");
        assert_eq!(serde_json::to_value(&config.params).unwrap(), json!({"endianness": "le"}));
        assert_eq!(HexToFloat::from_params(&config.params), mapper);
    }
}

//! Hex text to integer mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::hex::{drop_hex_marker, is_hex_text, leading_digits, reverse_byte_groups};
use super::options::Endianness;
use super::{Mapper, MapperConfig};
use crate::params::{bool_param, enum_param, to_params, Params};
use crate::value::{DataValue, OutputType};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Parameters of [`HexToInt`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HexToIntConfig {
    pub endianness: Endianness,
    /// Read the value as two's complement sized to its digit count
    pub signed: bool,
}

/// Parses hex text such as `0x0A` or `FF` into a number
///
/// Parsing stops at the first character that is not a hex digit, so
/// `01_00` reads as `1`. Falsy input, text that is not hex and text with no
/// leading digits yield `0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HexToInt {
    config: HexToIntConfig,
}

impl HexToInt {
    pub const ID: &'static str = "HEXTOINT";
    pub const LABEL: &'static str = "Hex to int";

    pub fn new(config: HexToIntConfig) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(HexToIntConfig {
            endianness: enum_param(params, "endianness"),
            signed: bool_param(params, "signed", false),
        })
    }

    pub fn settings(&self) -> &HexToIntConfig {
        &self.config
    }
}

impl Mapper for HexToInt {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Hex to int"
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

        let body = match self.config.endianness {
            Endianness::Little => reverse_byte_groups(drop_hex_marker(&text)),
            Endianness::Big => text,
        };
        // the sign width counts every character of the field, not just digits
        let width = if body.contains("0x") { body.len() - 2 } else { body.len() };

        let digits = leading_digits(&body);
        if digits.is_empty() {
            return DataValue::Number(0.0);
        }

        DataValue::Number(parse_hex_integer(digits, width, self.config.signed))
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Parse a non-empty run of hex digits.
///
/// With `signed`, values at or above half of the `width`-digit range
/// (`8` followed by zeros) are shifted down by the full range.
fn parse_hex_integer(digits: &str, width: usize, signed: bool) -> f64 {
    if digits.len() <= 32 {
        let Ok(magnitude) = u128::from_str_radix(digits, 16) else {
            return 0.0;
        };
        if !signed {
            return magnitude as f64;
        }
        if width < 32 {
            let half = 8u128 << (4 * (width - 1));
            if magnitude >= half {
                let range = 1u128 << (4 * width);
                return (magnitude as i128 - range as i128) as f64;
            }
            return magnitude as f64;
        }
        if width == 32 {
            // the full u128 range is i128 two's complement already
            return magnitude as i128 as f64;
        }
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0_f64, |acc, d| acc * 16.0 + f64::from(d));
    if !signed {
        return magnitude;
    }
    let range = 16f64.powi(width as i32);
    if magnitude >= range / 2.0 {
        magnitude - range
    } else {
        magnitude
    }
}

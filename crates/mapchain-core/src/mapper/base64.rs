//! Base64 encode/decode mapper
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use super::options::{Base64Action, Base64DecodeAs};
use super::{Mapper, MapperConfig};
use crate::params::{enum_param, to_params, Params};
use crate::value::{DataValue, OutputType};
use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use ::base64::engine::DecodePaddingMode;
use ::base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Write as _;

/// Standard alphabet, padding required, non-zero trailing bits accepted.
/// URL-safe `-` and `_` are not part of the alphabet.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Parameters of [`Base64`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64Config {
    pub action: Base64Action,
    pub decode_as: Base64DecodeAs,
}

/// Encodes text to Base64 or decodes Base64 to text or hex
///
/// Falsy input is returned unchanged, and so is any input that cannot be
/// decoded or encoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Base64 {
    config: Base64Config,
}

impl Base64 {
    pub const ID: &'static str = "BASE64";
    pub const LABEL: &'static str = "Base64";

    pub fn new(config: Base64Config) -> Self {
        Self { config }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(Base64Config {
            action: enum_param(params, "action"),
            decode_as: enum_param(params, "decodeAs"),
        })
    }

    pub fn settings(&self) -> &Base64Config {
        &self.config
    }

    fn decode(&self, text: &str) -> Option<String> {
        let bytes = DECODER.decode(text).ok()?;
        Some(match self.config.decode_as {
            Base64DecodeAs::String => bytes.iter().map(|b| char::from(*b)).collect(),
            Base64DecodeAs::HexString => {
                bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
                    let _ = write!(out, "{:02x}", b);
                    out
                })
            }
        })
    }

    /// Encode one byte per character; characters above U+00FF cannot be encoded.
    fn encode(text: &str) -> Option<String> {
        let bytes = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).ok())
            .collect::<Option<Vec<u8>>>()?;
        Some(STANDARD.encode(bytes))
    }
}

impl Mapper for Base64 {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Base64"
    }

    fn output_type(&self) -> OutputType {
        OutputType::String
    }

    fn transform(&self, value: &DataValue) -> DataValue {
        if !value.is_truthy() {
            return value.clone();
        }

        let result = match (self.config.action, value) {
            (Base64Action::Decode, DataValue::Text(text)) => self.decode(text),
            (Base64Action::Decode, DataValue::Number(_)) => None,
            (Base64Action::Encode, _) => Self::encode(&value.to_text()),
        };

        result.map(DataValue::Text).unwrap_or_else(|| value.clone())
    }

    fn config(&self) -> MapperConfig {
        MapperConfig::new(Self::ID, to_params(&self.config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

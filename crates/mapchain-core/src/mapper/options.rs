//! Enumerated mapper parameters
//!
//! Each enum serializes to the lowercase literal stored in persisted
//! configurations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte-pair order used when reading a hex string as a multi-byte number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endianness {
    #[serde(rename = "le")]
    Little,
    #[default]
    #[serde(rename = "be")]
    Big,
}

/// Direction of the Base64 mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base64Action {
    Encode,
    #[default]
    Decode,
}

/// Rendering of bytes produced by a Base64 decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base64DecodeAs {
    /// One character per byte, using the byte value as the character code
    #[default]
    String,
    /// Two lowercase hex digits per byte
    HexString,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "le"),
            Endianness::Big => write!(f, "be"),
        }
    }
}

impl fmt::Display for Base64Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base64Action::Encode => write!(f, "encode"),
            Base64Action::Decode => write!(f, "decode"),
        }
    }
}

impl fmt::Display for Base64DecodeAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base64DecodeAs::String => write!(f, "string"),
            Base64DecodeAs::HexString => write!(f, "hexstring"),
        }
    }
}

//! Scalar values threaded through a mapper chain
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use crate::canonical::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar value: either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    Number(f64),
}

impl DataValue {
    /// Empty text, numeric zero and NaN are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            DataValue::Text(s) => !s.is_empty(),
            DataValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            DataValue::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(_) => None,
        }
    }

    /// Text form of the value, as used by mappers that operate on strings
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Default for DataValue {
    fn default() -> Self {
        DataValue::Text(String::new())
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Text(s) => f.write_str(s),
            DataValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}


impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Number(value as f64)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Number(f64::from(value))
    }
}

/// Declared shape of a mapper's output. Descriptive only, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    String,
    Number,
    Array,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::String => write!(f, "string"),
            OutputType::Number => write!(f, "number"),
            OutputType::Array => write!(f, "array"),
        }
    }
}

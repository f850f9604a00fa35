//! Canonical text forms for numbers and JSON documents
//!
//! Persisted chains and stringified lookup results must stay byte-comparable
//! with documents written by the JavaScript runtime, so numbers follow
//! `Number.prototype.toString` and objects list integer-like keys first.
//!
//! Copyright (c) 2025 Mapchain Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io;

/// Largest magnitude an integer can have and still be exact as an `f64`
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Render `n` the way `Number.prototype.toString` does.
///
/// Magnitudes in `[1e-6, 1e21)` print in plain decimal notation, everything
/// else in exponent form such as `1e+21` or `1.5e-7`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // shortest round-trip digits, e.g. "1.2345e2"
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let point = exponent + 1;
    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if point > 0 { '+' } else { '-' });
        out.push_str(&(point - 1).abs().to_string());
    }
    out
}

/// Serialize `value` as compact JSON with canonical numbers and key order.
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let document = order_keys(serde_json::to_value(value)?);
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Whether `key` is an array index in canonical decimal form.
fn is_index_key(key: &str) -> bool {
    key.parse::<u32>()
        .map(|i| i != u32::MAX && i.to_string() == key)
        .unwrap_or(false)
}

/// Recursively move integer-like keys to the front in ascending order,
/// keeping the insertion order of all other keys.
fn order_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let (mut indexed, named): (Vec<_>, Vec<_>) =
                map.into_iter().partition(|(key, _)| is_index_key(key));
            indexed.sort_by_key(|(key, _)| key.parse::<u32>().unwrap_or(u32::MAX));

            let ordered: Map<String, Value> = indexed
                .into_iter()
                .chain(named)
                .map(|(key, item)| (key, order_keys(item)))
                .collect();
            Value::Object(ordered)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(order_keys).collect()),
        other => other,
    }
}

/// Compact formatter writing numbers through [`format_number`]
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_number(value).as_bytes())
    }

    fn write_f32<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f32) -> io::Result<()> {
        self.write_f64(writer, f64::from(value))
    }

    fn write_i64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: i64) -> io::Result<()> {
        if value.unsigned_abs() > MAX_SAFE_INTEGER {
            return self.write_f64(writer, value as f64);
        }
        write!(writer, "{}", value)
    }

    fn write_u64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: u64) -> io::Result<()> {
        if value > MAX_SAFE_INTEGER {
            return self.write_f64(writer, value as f64);
        }
        write!(writer, "{}", value)
    }
}

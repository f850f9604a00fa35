//! Hex text helpers shared by the hex decoding mappers

use regex::Regex;
use std::sync::OnceLock;

static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();

fn hex_pattern() -> &'static Regex {
    HEX_PATTERN.get_or_init(|| Regex::new(r"^[a-fxA-F0-9_]+$").expect("hex pattern is valid"))
}

/// Whether `text` consists only of hex digits, `x` and `_`.
pub(crate) fn is_hex_text(text: &str) -> bool {
    hex_pattern().is_match(text)
}

/// Drop the `0x` marker: when `text` contains it, its first two
/// characters are removed.
pub(crate) fn drop_hex_marker(text: &str) -> &str {
    if text.contains("0x") {
        text.get(2..).unwrap_or_default()
    } else {
        text
    }
}

/// Reverse the order of the 2-character groups in `body`.
///
/// A trailing unpaired character is dropped. Bodies shorter than two
/// characters are returned unchanged.
pub(crate) fn reverse_byte_groups(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    if chars.len() < 2 {
        return body.to_string();
    }
    chars
        .chunks_exact(2)
        .rev()
        .flat_map(|pair| pair.iter())
        .collect()
}

/// The leading run of hex digits in `body`, after an optional `0x`.
///
/// The run ends at the first other character, `_` included.
pub(crate) fn leading_digits(body: &str) -> &str {
    let body = body.strip_prefix("0x").unwrap_or(body);
    let end = body
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern() {
        assert!(is_hex_text("0x0A"));
        assert!(is_hex_text("dead_beef"));
        assert!(!is_hex_text("0X0A"));
        assert!(!is_hex_text("12g4"));
        assert!(!is_hex_text(""));
    }

    #[test]
    fn test_drop_hex_marker() {
        assert_eq!(drop_hex_marker("0xAB_CD"), "AB_CD");
        assert_eq!(drop_hex_marker("ABCD"), "ABCD");
        assert_eq!(drop_hex_marker("0x"), "");
        assert_eq!(drop_hex_marker("a0x1"), "x1");
    }

    #[test]
    fn test_reverse_byte_groups() {
        assert_eq!(reverse_byte_groups("0A0B0C"), "0C0B0A");
        assert_eq!(reverse_byte_groups("ABC"), "AB");
        assert_eq!(reverse_byte_groups("A"), "A");
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(leading_digits("ab0x12"), "ab0");
        assert_eq!(leading_digits("x12"), "");
        assert_eq!(leading_digits("FF"), "FF");
        assert_eq!(leading_digits("0x3F80_0000"), "3F80");
        assert_eq!(leading_digits("_001"), "");
    }
}

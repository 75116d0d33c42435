// SPDX-License-Identifier: MIT
//
// Hex color strings — normalization, validation, and parsing.
//
// Three functions with deliberately different strictness:
//
//   is_valid_hex   strict gate for user input: optional '#' + exactly 6 digits
//   parse_hex      lenient reader: '#RGB' or '#RRGGBB', '#' optional
//   normalize_hex  total formatter: always yields 7 characters, even for junk
//
// normalize_hex never fails. Inputs it cannot make sense of still come out
// as `#` + six characters, so anything that needs meaning (not just
// display) must go through is_valid_hex or parse_hex first.

use std::sync::LazyLock;

use regex::Regex;

use crate::rgb::Rgb;

static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?[0-9a-f]{6}$").expect("hex pattern compiles"));

/// Bring a hex string into canonical `#RRGGBB` uppercase form.
///
/// Strips one leading `#`, expands 3-digit shorthand by doubling each digit,
/// then truncates or right-pads with `0` to exactly six characters.
///
/// ```
/// use crafter_color::normalize_hex;
///
/// assert_eq!(normalize_hex("#abc"), "#AABBCC");
/// assert_eq!(normalize_hex("1a2b3c"), "#1A2B3C");
/// assert_eq!(normalize_hex(&normalize_hex("f80")), "#FF8800");
/// ```
#[must_use]
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let mut out = String::with_capacity(7);
    out.push('#');

    if digits.chars().count() == 3 {
        for ch in digits.chars() {
            out.push(ch);
            out.push(ch);
        }
    } else {
        out.extend(digits.chars().take(6));
        while out.chars().count() < 7 {
            out.push('0');
        }
    }

    out.make_ascii_uppercase();
    out
}

/// Whether `input` is an optional `#` followed by exactly six hex digits.
///
/// Surrounding whitespace is ignored and case does not matter. Shorthand
/// (`#abc`) is rejected: this is the gate for typed input, and a typed
/// value is only accepted once it is complete.
#[must_use]
pub fn is_valid_hex(input: &str) -> bool {
    HEX6.is_match(input.trim())
}

/// Parse `#RGB` or `#RRGGBB` (with or without `#`) into 8-bit sRGB.
#[must_use]
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();
    let s = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let bytes = s.as_bytes();

    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

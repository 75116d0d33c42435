// SPDX-License-Identifier: MIT
//
// crafter-color — color primitives for Color Crafter.
//
// Everything the harmony engine needs to move a color between the
// representations it works in:
//
//   hex string ↔ Rgb (8-bit sRGB) ↔ Hsl          (hue/lightness distribution)
//                                 ↔ Oklch        (perceptual gradients, display)
//
// Hex strings are the currency at the crate boundary. Every function that
// accepts one is total: parsing failures surface as `None` (or a display
// placeholder), never as a panic. Every function that returns one returns
// the canonical `#RRGGBB` uppercase form.

// Single-character variable names (r, g, b, l, c, h, s) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod format;
pub mod hex;
pub mod hsl;
pub mod oklch;
pub mod random;
pub mod rgb;

pub use contrast::{
    DARK_TEXT, LIGHT_TEXT, contrast_ratio, readable_text_color, relative_luminance,
};
pub use format::{PLACEHOLDER, format_hsl_string, format_oklch_string};
pub use hex::{is_valid_hex, normalize_hex, parse_hex};
pub use hsl::{Hsl, hue_distance, wrap_hue};
pub use oklch::Oklch;
pub use random::{PLEASANT_LIGHTNESS, PLEASANT_SATURATION, random_pleasant_hex, random_pleasant_hsl};
pub use rgb::Rgb;

/// Parse a hex color into 8-bit sRGB.
#[must_use]
pub fn to_rgb(hex: &str) -> Option<Rgb> {
    parse_hex(hex)
}

/// Parse a hex color into HSL.
///
/// Greys parse successfully; check [`Hsl::is_achromatic`] when the hue
/// matters.
#[must_use]
pub fn to_hsl(hex: &str) -> Option<Hsl> {
    parse_hex(hex).map(Hsl::from_rgb)
}

/// Parse a hex color into OKLCH.
#[must_use]
pub fn to_oklch(hex: &str) -> Option<Oklch> {
    parse_hex(hex).map(Oklch::from_rgb)
}

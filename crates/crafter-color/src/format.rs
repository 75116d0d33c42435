// SPDX-License-Identifier: MIT
//
// Human-readable color strings for swatch captions.

use crate::{to_hsl, to_oklch};

/// Shown in place of a caption when the input is not a color.
pub const PLACEHOLDER: &str = "—";

/// `"<hue>° <sat>% <light>%"`, each rounded to an integer.
///
/// Greys have no hue and report `0°`.
///
/// ```
/// use crafter_color::format_hsl_string;
///
/// assert_eq!(format_hsl_string("#FF0000"), "0° 100% 50%");
/// assert_eq!(format_hsl_string("oops"), "—");
/// ```
#[must_use]
pub fn format_hsl_string(hex: &str) -> String {
    let Some(hsl) = to_hsl(hex) else {
        return PLACEHOLDER.to_owned();
    };
    let hue = if hsl.is_achromatic() { 0.0 } else { hsl.h };
    format!(
        "{}° {}% {}%",
        round_int(hue),
        round_int(hsl.s * 100.0),
        round_int(hsl.l * 100.0)
    )
}

/// `"<L> <C> <hue>°"`: lightness to one decimal, chroma to three, hue to
/// an integer.
///
/// ```
/// use crafter_color::format_oklch_string;
///
/// assert_eq!(format_oklch_string("#FF0000"), "0.6 0.258 29°");
/// ```
#[must_use]
pub fn format_oklch_string(hex: &str) -> String {
    let Some(oklch) = to_oklch(hex) else {
        return PLACEHOLDER.to_owned();
    };
    let hue = if oklch.is_achromatic() { 0.0 } else { oklch.h };
    format!(
        "{:.1} {:.3} {}°",
        round_to(oklch.l, 1),
        round_to(oklch.c, 3),
        round_int(hue)
    )
}

/// Round half away from zero.
#[allow(clippy::cast_possible_truncation)]
fn round_int(v: f64) -> i64 {
    v.round() as i64
}

/// Round half away from zero to `places` decimals before formatting, so
/// ties resolve the same way as the integer fields.
fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

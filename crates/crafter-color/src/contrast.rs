// SPDX-License-Identifier: MIT
//
// Text-on-swatch contrast.
//
// Two different luminance measures live here and they are not
// interchangeable:
//
// - `readable_text_color` picks the label color for a swatch. It weighs the
//   gamma-encoded channels directly and splits at 0.55. The weights, the
//   cutoff, and both output colors are fixed.
// - `relative_luminance` / `contrast_ratio` are the WCAG 2.1 definitions
//   (linearized channels). They are for reporting how legible the chosen
//   label actually is, never for choosing it.

use crate::hex::parse_hex;
use crate::oklch::srgb_to_linear;
use crate::rgb::Rgb;

/// Label color for light swatches (slate-900).
pub const DARK_TEXT: &str = "#0f172a";

/// Label color for dark swatches (slate-50).
pub const LIGHT_TEXT: &str = "#f8fafc";

/// Luminance above which a swatch counts as light.
const LIGHT_SWATCH_THRESHOLD: f64 = 0.55;

/// Pick a dark or light label color for text drawn on `hex`.
///
/// Unparseable input is treated as black and gets the light label.
///
/// ```
/// use crafter_color::readable_text_color;
///
/// assert_eq!(readable_text_color("#FFFFFF"), "#0f172a");
/// assert_eq!(readable_text_color("#000000"), "#f8fafc");
/// ```
#[must_use]
pub fn readable_text_color(hex: &str) -> &'static str {
    let luminance = parse_hex(hex).map_or(0.0, |rgb| {
        let (r, g, b) = rgb.to_unit();
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    });

    if luminance > LIGHT_SWATCH_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
///
/// Uses the linearized channels:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

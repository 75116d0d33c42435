// SPDX-License-Identifier: MIT
//
// Pleasant random colors.
//
// Saturation stays inside [0.45, 0.80] and lightness inside [0.40, 0.60]:
// no near-white, near-black, or near-grey results. Every random path in
// the workspace draws through here, and every one takes its generator as
// an argument, so a seeded generator makes the whole pipeline
// reproducible.

use rand::Rng;

use crate::hsl::Hsl;

/// Saturation band for pleasant colors.
pub const PLEASANT_SATURATION: (f64, f64) = (0.45, 0.80);

/// Lightness band for pleasant colors.
pub const PLEASANT_LIGHTNESS: (f64, f64) = (0.40, 0.60);

/// Draw a pleasant random color as canonical `#RRGGBB` hex.
pub fn random_pleasant_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    draw(rng).to_hex()
}

/// Draw a pleasant random color and return the HSL of its hex form.
///
/// The color is quantized to 8 bits first, so the result is exactly what
/// [`random_pleasant_hex`] would have produced, read back as HSL.
pub fn random_pleasant_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::from_rgb(draw(rng).to_rgb())
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    let h = rng.random_range(0.0..360.0);
    let s = rng.random_range(PLEASANT_SATURATION.0..=PLEASANT_SATURATION.1);
    let l = rng.random_range(PLEASANT_LIGHTNESS.0..=PLEASANT_LIGHTNESS.1);
    Hsl::new(h, s, l)
}

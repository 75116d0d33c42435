// SPDX-License-Identifier: MIT
//
// HSL — the space harmony modes distribute colors in.
//
// Hue offsets from the classical color wheel (complement = +180°, triad =
// +120°/+240°, …) are defined in HSL, so generation happens here even
// though OKLCH is the better space for blending. Conversions follow the
// usual hexcone model: lightness is the mean of the largest and smallest
// channel, saturation is chroma relative to the widest chroma available at
// that lightness.

/// A color in HSL space.
///
/// - `h`: hue in degrees, wrapped into [0, 360)
/// - `s`: saturation, 0.0–1.0
/// - `l`: lightness, 0.0–1.0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. The hue is wrapped; `s` and `l` are stored as
    /// given and clamped on conversion.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h: wrap_hue(h), s, l }
    }

    /// Whether the hue is undefined (a pure grey, including black and white).
    ///
    /// Achromatic colors report `h = 0.0`, but that zero carries no meaning
    /// and must not be used as a base for hue arithmetic.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s <= 0.0
    }

    /// Convert 8-bit sRGB to HSL.
    #[must_use]
    pub fn from_rgb(rgb: crate::Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = 0.5 * (max + min);

        if delta == 0.0 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (max + min - 1.0).abs());
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self { h: wrap_hue(sector * 60.0), s, l }
    }

    /// Convert to 8-bit sRGB (rounded, clamped).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> crate::Rgb {
        let h = wrap_hue(self.h);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        // m1 is the largest channel, floor the smallest, m2 the middle one.
        let m1 = s.mul_add(if l < 0.5 { l } else { 1.0 - l }, l);
        let floor = 2.0f64.mul_add(l, -m1);
        let m2 = m1 - (m1 - l) * 2.0 * ((h / 60.0) % 2.0 - 1.0).abs();

        let (r, g, b) = match (h / 60.0).floor() as u8 {
            0 => (m1, m2, floor),
            1 => (m2, m1, floor),
            2 => (floor, m1, m2),
            3 => (floor, m2, m1),
            4 => (m2, floor, m1),
            _ => (m1, floor, m2),
        };

        crate::Rgb::from_unit(r, g, b)
    }

    /// Convert to canonical `#RRGGBB` hex.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Wrap a hue angle into [0, 360).
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0.
    if w >= 360.0 { 0.0 } else { w }
}

/// Shortest angular distance between two hues, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

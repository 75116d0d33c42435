// SPDX-License-Identifier: MIT
//
// 8-bit sRGB — the quantized form every generated color passes through
// on its way to a hex string.

use std::fmt;

/// An 8-bit sRGB color.
///
/// This is the exact value a hex string encodes, so converting a hex to
/// `Rgb` and back is lossless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize gamma-encoded sRGB components (0.0–1.0) to 8 bits.
    ///
    /// Components outside the unit range are clamped (gamut mapping by
    /// clipping). Rounding is half-up.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Gamma-encoded sRGB components in 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Canonical `#RRGGBB` uppercase hex.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Bare `RRGGBB` digits, as used in URL state.
    #[must_use]
    pub fn to_hex_digits(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with half-up rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // NaN clamps to 0 through the saturating cast.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

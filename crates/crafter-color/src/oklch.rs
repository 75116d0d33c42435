// SPDX-License-Identifier: MIT
//
// OKLCH — perceptual color for gradients and display.
//
// HSL is where harmony offsets live, but it is a poor space to blend in:
// an HSL midpoint between blue and orange passes through a muddy, uneven
// band. OKLCH has perceptually uniform lightness and chroma, so a straight
// line between two endpoints looks like an even ramp.
//
// Conversion pipeline:
//
//   sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//
// Gamut mapping clips to sRGB on the way out. Interpolated points between
// two in-gamut endpoints can leave the gamut slightly; clipping keeps the
// output a valid hex color.

use std::fmt;

use crate::hsl::{hue_distance, wrap_hue};
use crate::rgb::Rgb;

/// Chroma below which a color is treated as grey (hue undefined).
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// A color in OKLCH space.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (grey) to ~0.37 (most vivid in sRGB).
    pub c: f64,

    /// Hue angle in degrees: 0.0 to 360.0.
    /// 0° = pink/red, 90° = yellow, 180° = cyan/green, 270° = blue/purple.
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert 8-bit sRGB to OKLCH.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let (l, a, b_ok) =
            linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
        let (c, h) = oklab_ab_to_oklch(a, b_ok);
        Self { l, c, h }
    }

    /// Convert to 8-bit sRGB, clipping out-of-gamut components.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = self.to_srgb_unclamped();
        Rgb::from_unit(r, g, b)
    }

    /// Convert to canonical `#RRGGBB` hex.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Whether this color has no visible chroma (hue is meaningless).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }

    /// Mix this color with another in OKLCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Lightness and
    /// chroma interpolate linearly; hue takes the shortest path around the
    /// wheel. A grey endpoint has no hue of its own and borrows the other
    /// endpoint's, so a ramp into grey desaturates instead of sweeping
    /// through unrelated hues.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    fn to_srgb_unclamped(self) -> (f64, f64, f64) {
        let (a, b) = oklch_to_oklab_ab(self.c, self.h);
        let (lr, lg, lb) = oklab_to_linear_srgb(self.l, a, b);
        (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
    }
}

impl fmt::Debug for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl PartialEq for Oklch {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_distance(self.h, other.h) < EPS)
    }
}

// ─── Hue ─────────────────────────────────────────────────────────────────────

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    wrap_hue(diff.mul_add(t, h1))
}

// ─── OKLCH ↔ Oklab ───────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-12 {
        0.0 // achromatic: hue is undefined
    } else {
        wrap_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ─────────────────────────────────────────────────────
//
// Björn Ottosson's Oklab matrices, via the intermediate LMS cone space.
// Reference: https://bottosson.github.io/posts/oklab/

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl =
        1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok =
        0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ──────────────────────────────────────────────

/// Apply the sRGB transfer curve to a linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c.abs() <= 0.003_130_8 {
        c * 12.92
    } else {
        c.signum() * 1.055f64.mul_add(c.abs().powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB transfer curve from a gamma-encoded component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c.abs() <= 0.040_45 {
        c / 12.92
    } else {
        c.signum() * ((c.abs() + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn rgb_roundtrip_is_exact() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(0x25, 0x63, 0xEB),
            Rgb::new(0xF9, 0x73, 0x16),
            Rgb::WHITE,
            Rgb::BLACK,
            Rgb::new(0x80, 0x80, 0x80),
        ];
        for rgb in samples {
            assert_eq!(Oklch::from_rgb(rgb).to_rgb(), rgb, "roundtrip failed for {rgb}");
        }
    }

    #[test]
    fn black_and_white_lightness() {
        let black = Oklch::from_rgb(Rgb::BLACK);
        let white = Oklch::from_rgb(Rgb::WHITE);
        assert!(approx_eq(black.l, 0.0, 1e-6));
        assert!(approx_eq(white.l, 1.0, 1e-4));
        assert!(black.is_achromatic());
        assert!(white.is_achromatic());
    }

    #[test]
    fn red_has_hue_near_29() {
        let red = Oklch::from_rgb(Rgb::new(255, 0, 0));
        assert!(red.h > 25.0 && red.h < 33.0, "Red hue was {}", red.h);
        assert!(red.c > 0.2, "Red chroma was {}", red.c);
        assert!(approx_eq(red.l, 0.628, 0.005), "Red lightness was {}", red.l);
    }

    #[test]
    fn mix_endpoints_are_identity() {
        let a = Oklch::from_rgb(Rgb::new(0x25, 0x63, 0xEB));
        let b = Oklch::from_rgb(Rgb::new(0xF9, 0x73, 0x16));
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
    }

    #[test]
    fn mix_at_half_is_midpoint() {
        let a = Oklch::new(0.3, 0.1, 40.0);
        let b = Oklch::new(0.7, 0.3, 80.0);
        let mixed = a.mix(&b, 0.5);
        assert!(approx_eq(mixed.l, 0.5, 1e-9));
        assert!(approx_eq(mixed.c, 0.2, 1e-9));
        assert!(approx_eq(mixed.h, 60.0, 1e-9));
    }

    #[test]
    fn mix_hue_takes_shortest_path() {
        let a = Oklch::new(0.5, 0.1, 10.0);
        let b = Oklch::new(0.5, 0.1, 350.0);
        let mixed = a.mix(&b, 0.5);
        assert!(
            mixed.h < 1.0 || mixed.h > 359.0,
            "Expected hue near 0/360, got {}",
            mixed.h
        );
    }

    #[test]
    fn mix_into_grey_keeps_hue() {
        let blue = Oklch::new(0.5, 0.15, 260.0);
        let grey = Oklch::new(0.6, 0.0, 0.0);
        assert!(approx_eq(blue.mix(&grey, 0.7).h, 260.0, 1e-9));
        assert!(approx_eq(grey.mix(&blue, 0.3).h, 260.0, 1e-9));
    }

    #[test]
    fn out_of_gamut_is_clipped() {
        let vivid = Oklch::new(0.7, 0.4, 150.0);
        let (r, g, b) = vivid.to_srgb_unclamped();
        assert!([r, g, b].iter().any(|v| !(0.0..=1.0).contains(v)));
        let hex = vivid.to_hex();
        assert_eq!(hex.len(), 7);
    }

    #[test]
    fn transfer_curve_roundtrip() {
        for i in 0..=20 {
            let v = f64::from(i) / 20.0;
            assert!(approx_eq(linear_to_srgb(srgb_to_linear(v)), v, 1e-12));
        }
    }
}

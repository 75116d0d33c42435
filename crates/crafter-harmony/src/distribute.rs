//! Lightness and saturation distribution — the step shared by every
//! hue-offset mode.
//!
//! Whatever the base color looks like, the palette spans a believable
//! lightness range:
//!
//! ```text
//! base (H0, S0, L0)
//!     │
//!     ├─ S0 clamped into [0.40, 0.90]          → saturation anchor
//!     └─ L0 clamped into [0.25, 0.75], ±0.20   → lightness band within [0.25, 0.85]
//!
//! position i of n:
//!     hue        = H0 + offset(i)                       (wrapped)
//!     saturation = anchor + 0.05 · (i − n/2)            clamped [0.35, 0.95]
//!     lightness  = band.lerp(i / (n − 1))               (0.5 when n = 1)
//!                  + adjust · (i − n/2)                 clamped [0.25, 0.85]
//! ```

use crafter_color::{Hsl, wrap_hue};

const SATURATION_ANCHOR: (f64, f64) = (0.4, 0.9);
const SATURATION_BOUNDS: (f64, f64) = (0.35, 0.95);
const SATURATION_STEP: f64 = 0.05;

const LIGHTNESS_ANCHOR: (f64, f64) = (0.25, 0.75);
const LIGHTNESS_BOUNDS: (f64, f64) = (0.25, 0.85);
const LIGHTNESS_HALF_BAND: f64 = 0.2;

/// Per-palette distribution state derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    hue: f64,
    saturation: f64,
    lightness_min: f64,
    lightness_max: f64,
    length: usize,
    adjust: f64,
}

impl Distribution {
    /// Derive the distribution for a palette of `length` colors around
    /// `base`, with a per-position lightness spread of `adjust`.
    #[must_use]
    pub fn new(base: Hsl, length: usize, adjust: f64) -> Self {
        let saturation = base.s.clamp(SATURATION_ANCHOR.0, SATURATION_ANCHOR.1);
        let lightness = base.l.clamp(LIGHTNESS_ANCHOR.0, LIGHTNESS_ANCHOR.1);
        Self {
            hue: base.h,
            saturation,
            lightness_min: (lightness - LIGHTNESS_HALF_BAND).max(LIGHTNESS_BOUNDS.0),
            lightness_max: (lightness + LIGHTNESS_HALF_BAND).min(LIGHTNESS_BOUNDS.1),
            length,
            adjust,
        }
    }

    /// The lightness band `(min, max)` positions are spread across.
    #[must_use]
    pub const fn lightness_band(&self) -> (f64, f64) {
        (self.lightness_min, self.lightness_max)
    }

    /// The color at palette position `index`, rotated by `hue_offset` degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn color_at(&self, index: usize, hue_offset: f64) -> Hsl {
        let i = index as f64;
        let centered = i - self.length as f64 / 2.0;

        let hue = wrap_hue(self.hue + hue_offset);
        let saturation = SATURATION_STEP
            .mul_add(centered, self.saturation)
            .clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1);

        let t = if self.length > 1 {
            i / (self.length - 1) as f64
        } else {
            0.5
        };
        let distributed = (self.lightness_max - self.lightness_min).mul_add(t, self.lightness_min);
        let lightness = if self.adjust == 0.0 {
            distributed
        } else {
            self.adjust
                .mul_add(centered, distributed)
                .clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1)
        };

        Hsl::new(hue, saturation, lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn band_is_centered_on_clamped_lightness() {
        let d = Distribution::new(Hsl::new(0.0, 1.0, 0.5), 4, 0.0);
        let (lo, hi) = d.lightness_band();
        assert!(approx_eq(lo, 0.3, 1e-12));
        assert!(approx_eq(hi, 0.7, 1e-12));
    }

    #[test]
    fn dark_base_band_is_clipped_below() {
        // L0 = 0.05 → anchor 0.25 → band [0.25, 0.45]
        let d = Distribution::new(Hsl::new(0.0, 0.5, 0.05), 4, 0.0);
        let (lo, hi) = d.lightness_band();
        assert!(approx_eq(lo, 0.25, 1e-12));
        assert!(approx_eq(hi, 0.45, 1e-12));
    }

    #[test]
    fn light_base_band_is_clipped_above() {
        // L0 = 0.98 → anchor 0.75 → band [0.55, 0.85]
        let d = Distribution::new(Hsl::new(0.0, 0.5, 0.98), 4, 0.0);
        let (lo, hi) = d.lightness_band();
        assert!(approx_eq(lo, 0.55, 1e-12));
        assert!(approx_eq(hi, 0.85, 1e-12));
    }

    #[test]
    fn without_adjust_lightness_spans_the_band() {
        let d = Distribution::new(Hsl::new(200.0, 0.6, 0.5), 5, 0.0);
        assert!(approx_eq(d.color_at(0, 0.0).l, 0.3, 1e-12));
        assert!(approx_eq(d.color_at(2, 0.0).l, 0.5, 1e-12));
        assert!(approx_eq(d.color_at(4, 0.0).l, 0.7, 1e-12));
    }

    #[test]
    fn single_color_sits_mid_band() {
        let d = Distribution::new(Hsl::new(200.0, 0.6, 0.5), 1, 0.0);
        let c = d.color_at(0, 0.0);
        assert!(approx_eq(c.l, 0.5, 1e-12));
        // centered = 0 − 1/2 → saturation 0.6 − 0.025
        assert!(approx_eq(c.s, 0.575, 1e-12));
    }

    #[test]
    fn saturation_steps_and_clamps() {
        let d = Distribution::new(Hsl::new(0.0, 1.0, 0.5), 4, 0.0);
        // anchor 0.9; centered = −2, −1, 0, 1
        assert!(approx_eq(d.color_at(0, 0.0).s, 0.8, 1e-12));
        assert!(approx_eq(d.color_at(2, 0.0).s, 0.9, 1e-12));
        assert!(approx_eq(d.color_at(3, 0.0).s, 0.95, 1e-12));

        let wide = Distribution::new(Hsl::new(0.0, 0.4, 0.5), 12, 0.0);
        // 0.4 + 0.05·(0 − 6) = 0.1 → 0.35
        assert!(approx_eq(wide.color_at(0, 0.0).s, 0.35, 1e-12));
    }

    #[test]
    fn adjust_spreads_and_clamps_lightness() {
        let d = Distribution::new(Hsl::new(0.0, 1.0, 0.5), 4, 0.06);
        // Ld = 0.3 − 0.12 → clamped to 0.25
        assert!(approx_eq(d.color_at(0, 0.0).l, 0.25, 1e-12));
        // Ld = 0.3 + 0.4·(1/3) − 0.06
        assert!(approx_eq(d.color_at(1, 0.0).l, 0.3 + 0.4 / 3.0 - 0.06, 1e-12));
        // Ld = 0.7 + 0.06
        assert!(approx_eq(d.color_at(3, 0.0).l, 0.76, 1e-12));
    }

    #[test]
    fn hue_offset_wraps() {
        let d = Distribution::new(Hsl::new(350.0, 0.6, 0.5), 3, 0.0);
        assert!(approx_eq(d.color_at(0, 30.0).h, 20.0, 1e-9));
        assert!(approx_eq(d.color_at(0, -360.0).h, 350.0, 1e-9));
    }
}

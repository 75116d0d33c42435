//! Palette generation — mode dispatch.
//!
//! [`generate_palette_by_mode`] is the one-base entry point: a base color,
//! a mode, and a length. [`Harmony`] is the full request the UI layer holds,
//! where gradient mode carries its own two anchors instead of a base.

use crafter_color::{Hsl, random_pleasant_hex, random_pleasant_hsl, to_hsl};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::distribute::Distribution;
use crate::gradient::{GradientSpec, generate_gradient_palette};
use crate::mode::HarmonyMode;

/// Generate `length` colors from `base_hex` using `mode`.
///
/// Deterministic for every mode except [`HarmonyMode::Random`] and the
/// fallback paths. A base that does not parse, or that has no hue (a grey),
/// is silently replaced by a pleasant random color drawn from `rng`.
///
/// [`HarmonyMode::Gradient`] through this entry point runs from the base to
/// its HSL complement in `length` steps.
pub fn generate_palette_by_mode<R: Rng + ?Sized>(
    base_hex: &str,
    mode: HarmonyMode,
    length: usize,
    rng: &mut R,
) -> Vec<String> {
    trace!(base = base_hex, %mode, length, "generating palette");

    match mode {
        HarmonyMode::Random => (0..length).map(|_| random_pleasant_hex(rng)).collect(),
        HarmonyMode::Gradient => {
            let end = to_hsl(base_hex).map_or_else(String::new, |hsl| {
                Hsl::new(hsl.h + 180.0, hsl.s, hsl.l).to_hex()
            });
            generate_gradient_palette(base_hex, &end, length, rng)
        }
        HarmonyMode::Complementary
        | HarmonyMode::Analogous
        | HarmonyMode::Triadic
        | HarmonyMode::Tetradic
        | HarmonyMode::Split => {
            let base = base_hsl(base_hex, rng);
            let distribution = Distribution::new(base, length, mode.lightness_adjust());
            (0..length)
                .filter_map(|i| mode.hue_offset(i).map(|offset| distribution.color_at(i, offset)))
                .map(Hsl::to_hex)
                .collect()
        }
    }
}

/// The base color's HSL, or a pleasant random stand-in.
fn base_hsl<R: Rng + ?Sized>(base_hex: &str, rng: &mut R) -> Hsl {
    match to_hsl(base_hex) {
        Some(hsl) if !hsl.is_achromatic() => hsl,
        _ => {
            debug!(base = base_hex, "base color has no usable hue, substituting a random one");
            random_pleasant_hsl(rng)
        }
    }
}

/// A complete generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Harmony {
    /// One base color, a mode, and a length.
    Mode {
        base: String,
        mode: HarmonyMode,
        length: usize,
    },
    /// Two anchors and a step count.
    Gradient(GradientSpec),
}

impl Harmony {
    /// Build a request for `mode`. Gradient mode takes its anchors from
    /// `gradient`, resized to `length`; every other mode uses `base`.
    #[must_use]
    pub fn new(base: &str, mode: HarmonyMode, length: usize, gradient: &GradientSpec) -> Self {
        if mode == HarmonyMode::Gradient {
            Self::Gradient(gradient.clone().with_steps(length))
        } else {
            Self::Mode {
                base: base.to_owned(),
                mode,
                length,
            }
        }
    }

    /// The mode this request generates with.
    #[must_use]
    pub const fn mode(&self) -> HarmonyMode {
        match self {
            Self::Mode { mode, .. } => *mode,
            Self::Gradient(_) => HarmonyMode::Gradient,
        }
    }

    /// Number of colors this request produces.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Mode { length, .. } => *length,
            Self::Gradient(spec) => spec.steps,
        }
    }

    /// Whether this request produces no colors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same request resized to `length` colors.
    #[must_use]
    pub fn with_len(self, length: usize) -> Self {
        match self {
            Self::Mode { base, mode, .. } => Self::Mode { base, mode, length },
            Self::Gradient(spec) => Self::Gradient(spec.with_steps(length)),
        }
    }

    /// Run the request.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        match self {
            Self::Mode { base, mode, length } => generate_palette_by_mode(base, *mode, *length, rng),
            Self::Gradient(spec) => spec.generate(rng),
        }
    }
}

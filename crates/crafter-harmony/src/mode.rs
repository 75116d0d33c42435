//! Harmony modes — the classical color-wheel relationships.
//!
//! Each hue-offset mode maps a palette index to a hue offset (degrees,
//! relative to the base hue). Triadic, tetradic and split modes walk a base
//! cycle and nudge each repeat of the cycle by the next entry of a variation
//! table; once the table runs out, repeats land on the raw cycle hue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The strategy used to derive a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", from = "String")]
pub enum HarmonyMode {
    /// Independent pleasant random colors; ignores the base color.
    #[default]
    Random,
    /// Base and its complement (180°), alternating.
    Complementary,
    /// A 20° sweep starting 40° below the base.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
    /// Base plus the two neighbours of its complement (150°, 210°).
    Split,
    /// Perceptual interpolation between two anchor colors.
    Gradient,
}

const TRIADIC_CYCLE: [f64; 3] = [0.0, 120.0, 240.0];
const TRIADIC_VARIATION: [f64; 5] = [0.0, 20.0, -20.0, 40.0, -40.0];

const TETRADIC_CYCLE: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
const TETRADIC_VARIATION: [f64; 6] = [0.0, 15.0, -15.0, 30.0, -30.0, 45.0];

const SPLIT_CYCLE: [f64; 3] = [0.0, 150.0, 210.0];
const SPLIT_VARIATION: [f64; 7] = [0.0, 20.0, -20.0, 40.0, -40.0, 10.0, -10.0];

impl HarmonyMode {
    /// Hue offset in degrees for palette position `index`.
    ///
    /// `None` for modes that are not driven by hue offsets
    /// ([`Random`](Self::Random), [`Gradient`](Self::Gradient)).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hue_offset(self, index: usize) -> Option<f64> {
        match self {
            Self::Complementary => Some(if index % 2 == 0 { 0.0 } else { 180.0 }),
            Self::Analogous => Some(20.0f64.mul_add(index as f64, -40.0)),
            Self::Triadic => Some(cycled(&TRIADIC_CYCLE, &TRIADIC_VARIATION, index)),
            Self::Tetradic => Some(cycled(&TETRADIC_CYCLE, &TETRADIC_VARIATION, index)),
            Self::Split => Some(cycled(&SPLIT_CYCLE, &SPLIT_VARIATION, index)),
            Self::Random | Self::Gradient => None,
        }
    }

    /// Per-position lightness spread added on top of the base band.
    ///
    /// Zero for modes without hue offsets.
    #[must_use]
    pub const fn lightness_adjust(self) -> f64 {
        match self {
            Self::Complementary => 0.06,
            Self::Analogous => 0.04,
            Self::Triadic | Self::Split => 0.05,
            Self::Tetradic => 0.03,
            Self::Random | Self::Gradient => 0.0,
        }
    }

    /// Tag used in URLs, saved records, and the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Split => "split",
            Self::Gradient => "gradient",
        }
    }

    /// Parse a mode from its tag (case-insensitive, surrounding whitespace
    /// ignored). `split-complementary` is accepted for `split`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        if lower == "split-complementary" {
            return Some(Self::Split);
        }
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    /// Parse a mode, treating any unrecognized tag as [`Random`](Self::Random).
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::Random)
    }

    /// All modes, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Random,
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::Tetradic,
            Self::Split,
            Self::Gradient,
        ]
    }
}

/// Base-cycle hue plus the variation term for the cycle's repeat count.
fn cycled(cycle: &[f64], variation: &[f64], index: usize) -> f64 {
    cycle[index % cycle.len()] + variation.get(index / cycle.len()).copied().unwrap_or(0.0)
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by [`HarmonyMode::from_str`] for an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown harmony mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for HarmonyMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

impl From<HarmonyMode> for &'static str {
    fn from(mode: HarmonyMode) -> Self {
        mode.name()
    }
}

impl From<String> for HarmonyMode {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

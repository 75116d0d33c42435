//! Two-endpoint gradients, interpolated in OKLCH.
//!
//! Sample `i` of `n` sits at `t = i / max(n − 1, 1)`, so the first sample
//! is the start color and (for `n > 1`) the last is the end color, both
//! exactly, after the 8-bit round trip.

use crafter_color::{normalize_hex, parse_hex, random_pleasant_hex, to_oklch};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Start anchor of the default gradient (blue-600).
pub const DEFAULT_GRADIENT_START: &str = "#2563EB";

/// End anchor of the default gradient (orange-500).
pub const DEFAULT_GRADIENT_END: &str = "#F97316";

/// Step count of the default gradient.
pub const DEFAULT_GRADIENT_STEPS: usize = 5;

/// Anchor state for gradient mode: two endpoints and a step count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientSpec {
    pub start: String,
    pub end: String,
    pub steps: usize,
}

impl GradientSpec {
    /// Create a gradient spec.
    ///
    /// Endpoints that parse are normalized to `#RRGGBB`. Anything else is
    /// kept as given, so [`generate`](Self::generate) takes the random
    /// fallback instead of running from a padded guess.
    #[must_use]
    pub fn new(start: &str, end: &str, steps: usize) -> Self {
        Self {
            start: anchor(start),
            end: anchor(end),
            steps,
        }
    }

    /// Whether both endpoints are colors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        parse_hex(&self.start).is_some() && parse_hex(&self.end).is_some()
    }

    /// The same endpoints with a different step count.
    #[must_use]
    pub fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    /// Interpolate the gradient these anchors describe.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        generate_gradient_palette(&self.start, &self.end, self.steps, rng)
    }
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRADIENT_START,
            DEFAULT_GRADIENT_END,
            DEFAULT_GRADIENT_STEPS,
        )
    }
}

fn anchor(input: &str) -> String {
    if parse_hex(input).is_some() {
        normalize_hex(input)
    } else {
        input.to_owned()
    }
}

/// Interpolate `steps` colors from `start` to `end` in OKLCH.
///
/// If either endpoint is not a color, the result is `steps` independent
/// pleasant random colors instead.
#[allow(clippy::cast_precision_loss)]
pub fn generate_gradient_palette<R: Rng + ?Sized>(
    start: &str,
    end: &str,
    steps: usize,
    rng: &mut R,
) -> Vec<String> {
    let (Some(from), Some(to)) = (to_oklch(start), to_oklch(end)) else {
        debug!(start, end, steps, "gradient endpoint unparseable, substituting random colors");
        return (0..steps).map(|_| random_pleasant_hex(rng)).collect();
    };

    let denominator = steps.saturating_sub(1).max(1) as f64;
    (0..steps)
        .map(|i| from.mix(&to, i as f64 / denominator).to_hex())
        .collect()
}

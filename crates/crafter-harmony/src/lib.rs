//! # crafter-harmony — the Color Crafter palette engine
//!
//! Derives visually balanced palettes from one base color and a harmony
//! mode, or from two gradient anchors.
//!
//! # Architecture
//!
//! ```text
//! base hex + HarmonyMode + length
//!     │
//!     ▼
//! mode.rs:       hue offset per position (color-wheel tables)
//!     │
//!     ▼
//! distribute.rs: saturation + lightness per position (shared band)
//!     │
//!     ▼
//! engine.rs:     HSL → hex, fallbacks, Harmony request dispatch
//!
//! start + end + steps
//!     │
//!     ▼
//! gradient.rs:   OKLCH interpolation
//! ```
//!
//! # Randomness
//!
//! Only [`HarmonyMode::Random`] and the fallback paths draw random numbers,
//! and they draw from the generator passed in. Nothing here touches global
//! state, so a seeded generator reproduces any palette exactly.
//!
//! # Failure
//!
//! There is none. Unparseable or grey base colors and unparseable gradient
//! anchors are replaced by pleasant random colors; the result always has
//! the requested length and every entry is a canonical `#RRGGBB` string.

pub mod distribute;
pub mod engine;
pub mod gradient;
pub mod mode;

pub use engine::{Harmony, generate_palette_by_mode};
pub use gradient::{
    DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START, DEFAULT_GRADIENT_STEPS, GradientSpec,
    generate_gradient_palette,
};
pub use mode::{HarmonyMode, UnknownMode};

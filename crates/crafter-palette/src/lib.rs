//! # crafter-palette — the editable palette behind Color Crafter
//!
//! [`Palette`] holds an ordered list of [`PaletteColor`] swatches, each with
//! a stable id and a lock. Regenerating from a
//! [`Harmony`](crafter_harmony::Harmony) request replaces the unlocked
//! swatches and keeps the locked ones in place. [`PaletteLimits`] bounds how
//! far the palette can grow or shrink.
//!
//! [`codec`] turns palette state into a shareable query string and back;
//! [`PaletteRecord`] is the shape a saved palette takes on disk.

pub mod codec;
pub mod error;
pub mod limits;
pub mod palette;
pub mod record;

pub use codec::{PaletteQuery, decode_colors, decode_gradient, encode_colors, encode_gradient};
pub use error::{CodecError, PaletteError};
pub use limits::{
    DEFAULT_LENGTH, DEFAULT_MAX_COLORS, DEFAULT_MIN_COLORS, MAX_COLORS_ENV, PaletteLimits,
    parse_max_setting,
};
pub use palette::{Palette, PaletteColor};
pub use record::{PaletteRecord, now_millis};

//! Error types for palette editing and URL state.

/// Errors from editing a [`Palette`](crate::Palette).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// The input is not an optional `#` followed by six hex digits.
    #[error("'{0}' is not a valid hex color")]
    InvalidHex(String),

    /// The index does not name a palette position.
    #[error("index {index} is out of range for a palette of {len} colors")]
    OutOfRange { index: usize, len: usize },

    /// Inserting would exceed the palette's maximum length.
    #[error("palette is full ({max} colors)")]
    Full { max: usize },

    /// Removing would drop below the palette's minimum length.
    #[error("palette needs at least {min} colors")]
    TooFew { min: usize },
}

/// Errors from decoding palette URL state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The `colors` parameter is present but lists nothing.
    #[error("color list is empty")]
    EmptyColors,

    /// An entry of the `colors` parameter, or a gradient anchor, is not a color.
    #[error("'{0}' is not a valid hex color")]
    InvalidColor(String),

    /// The `gradient` parameter does not have three `_`-separated parts.
    #[error("gradient must look like START_END_STEPS, got '{0}'")]
    MalformedGradient(String),

    /// The gradient step count is not a positive integer.
    #[error("gradient step count '{0}' is not a positive integer")]
    InvalidSteps(String),
}

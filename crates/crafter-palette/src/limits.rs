//! Palette length policy.
//!
//! The harmony engine accepts any length. How many swatches a palette may
//! hold is the application's call, made here and nowhere else.

use serde::{Deserialize, Serialize};

/// Number of colors in a freshly generated palette.
pub const DEFAULT_LENGTH: usize = 5;

/// Fewest colors a palette may be edited down to.
pub const DEFAULT_MIN_COLORS: usize = 2;

/// Most colors a palette may hold unless configured otherwise.
pub const DEFAULT_MAX_COLORS: usize = 6;

/// Environment variable the command line reads the maximum from.
///
/// Its value is a maximum setting as understood by [`parse_max_setting`].
pub const MAX_COLORS_ENV: &str = "CRAFTER_MAX_COLORS";

/// Bounds on palette length, enforced by [`Palette`](crate::Palette) edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteLimits {
    pub min: usize,
    pub max: Option<usize>,
}

impl Default for PaletteLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_COLORS,
            max: Some(DEFAULT_MAX_COLORS),
        }
    }
}

impl PaletteLimits {
    /// Default minimum, no maximum.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: DEFAULT_MIN_COLORS,
            max: None,
        }
    }

    /// The same limits with a different maximum.
    #[must_use]
    pub const fn with_max(self, max: Option<usize>) -> Self {
        Self { max, ..self }
    }

    /// Whether a palette of `len` colors may grow by one.
    #[must_use]
    pub fn can_grow(&self, len: usize) -> bool {
        self.max.is_none_or(|max| len < max)
    }

    /// Whether a palette of `len` colors may shrink by one.
    #[must_use]
    pub const fn can_shrink(&self, len: usize) -> bool {
        len > self.min
    }

    /// Cap a requested length at the maximum.
    ///
    /// The minimum is an editing floor, not a generation floor: asking for
    /// one color still yields one color.
    #[must_use]
    pub fn cap(&self, len: usize) -> usize {
        self.max.map_or(len, |max| len.min(max))
    }
}

/// Parse a maximum setting.
///
/// A positive integer sets the cap; `0`, `none`, or `unbounded`
/// (case-insensitive) remove it and yield `Some(None)`. Anything else is
/// `None`.
#[must_use]
pub fn parse_max_setting(value: &str) -> Option<Option<usize>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("unbounded") {
        return Some(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(n) => Some(Some(n)),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cap_at_six() {
        let limits = PaletteLimits::default();
        assert_eq!(limits.min, 2);
        assert_eq!(limits.max, Some(6));
        assert!(limits.can_grow(5));
        assert!(!limits.can_grow(6));
        assert_eq!(limits.cap(12), 6);
        assert_eq!(limits.cap(1), 1);
    }

    #[test]
    fn unbounded_never_caps() {
        let limits = PaletteLimits::unbounded();
        assert!(limits.can_grow(10_000));
        assert_eq!(limits.cap(40), 40);
    }

    #[test]
    fn shrink_floor() {
        let limits = PaletteLimits::default();
        assert!(limits.can_shrink(3));
        assert!(!limits.can_shrink(2));
    }

    #[test]
    fn max_settings() {
        assert_eq!(parse_max_setting("8"), Some(Some(8)));
        assert_eq!(parse_max_setting(" 0 "), Some(None));
        assert_eq!(parse_max_setting("Unbounded"), Some(None));
        assert_eq!(parse_max_setting("none"), Some(None));
        assert_eq!(parse_max_setting("lots"), None);
        assert_eq!(parse_max_setting("-3"), None);
    }
}

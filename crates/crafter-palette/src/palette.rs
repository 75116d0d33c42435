//! The editable palette: an ordered list of swatches with per-swatch locks.
//!
//! Regeneration replaces every unlocked swatch and leaves locked ones alone,
//! position by position. Edits are bounded by [`PaletteLimits`].

use crafter_color::{is_valid_hex, normalize_hex, parse_hex};
use crafter_harmony::Harmony;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PaletteError;
use crate::limits::PaletteLimits;

/// One swatch.
///
/// `id` is assigned once and survives every edit of `hex` and `locked`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub id: String,
    pub hex: String,
    pub locked: bool,
}

impl PaletteColor {
    /// An unlocked swatch with a fresh id. `hex` is normalized.
    pub fn new<R: Rng + ?Sized>(hex: &str, rng: &mut R) -> Self {
        Self {
            id: new_id(rng),
            hex: normalize_hex(hex),
            locked: false,
        }
    }
}

/// 64 random bits as 16 lowercase hex digits.
fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:016x}", rng.random::<u64>())
}

/// An ordered palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<PaletteColor>,
    limits: PaletteLimits,
}

impl Palette {
    /// A palette from explicit colors.
    ///
    /// Entries that are not colors (`#RGB` and `#RRGGBB`, `#` optional) are
    /// dropped; the rest are normalized and capped at the maximum length.
    pub fn from_hexes<I, S, R>(hexes: I, limits: PaletteLimits, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut colors = Vec::new();
        for hex in hexes {
            let hex = hex.as_ref();
            if parse_hex(hex).is_none() {
                debug!(hex, "dropping entry that is not a color");
                continue;
            }
            if !limits.can_grow(colors.len()) {
                debug!(max = ?limits.max, "palette is full, dropping remaining entries");
                break;
            }
            colors.push(PaletteColor::new(hex, rng));
        }
        Self { colors, limits }
    }

    /// A palette generated from `harmony`, capped at the maximum length.
    pub fn generate<R: Rng + ?Sized>(harmony: &Harmony, limits: PaletteLimits, rng: &mut R) -> Self {
        let length = limits.cap(harmony.len());
        let hexes = harmony.clone().with_len(length).generate(rng);
        let colors = hexes.iter().map(|hex| PaletteColor::new(hex, rng)).collect();
        Self { colors, limits }
    }

    #[must_use]
    pub const fn limits(&self) -> PaletteLimits {
        self.limits
    }

    #[must_use]
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteColor> {
        self.colors.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PaletteColor> {
        self.colors.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors as `#RRGGBB` strings, in order.
    #[must_use]
    pub fn hexes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex.clone()).collect()
    }

    /// Indices of the locked swatches.
    #[must_use]
    pub fn locked_indices(&self) -> Vec<usize> {
        self.colors
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.locked.then_some(i))
            .collect()
    }

    /// Flip the lock on swatch `index`, returning its new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, PaletteError> {
        let color = self.slot_mut(index)?;
        color.locked = !color.locked;
        Ok(color.locked)
    }

    /// Set the lock on swatch `index`.
    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<(), PaletteError> {
        self.slot_mut(index)?.locked = locked;
        Ok(())
    }

    /// Replace the color of swatch `index`.
    ///
    /// `input` must be an optional `#` and six hex digits; anything else is
    /// rejected and the swatch keeps its previous color. Locked swatches can
    /// be edited.
    pub fn set_hex(&mut self, index: usize, input: &str) -> Result<(), PaletteError> {
        if !is_valid_hex(input) {
            return Err(PaletteError::InvalidHex(input.to_owned()));
        }
        self.slot_mut(index)?.hex = normalize_hex(input);
        Ok(())
    }

    /// Insert an unlocked swatch before `index` (`index == len` appends).
    pub fn insert<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        hex: &str,
        rng: &mut R,
    ) -> Result<(), PaletteError> {
        if !is_valid_hex(hex) {
            return Err(PaletteError::InvalidHex(hex.to_owned()));
        }
        let len = self.len();
        if index > len {
            return Err(PaletteError::OutOfRange { index, len });
        }
        if let Some(max) = self.limits.max.filter(|_| !self.limits.can_grow(len)) {
            return Err(PaletteError::Full { max });
        }
        self.colors.insert(index, PaletteColor::new(hex, rng));
        Ok(())
    }

    /// Append an unlocked swatch.
    pub fn push<R: Rng + ?Sized>(&mut self, hex: &str, rng: &mut R) -> Result<(), PaletteError> {
        self.insert(self.len(), hex, rng)
    }

    /// Remove swatch `index`, locked or not.
    pub fn remove(&mut self, index: usize) -> Result<PaletteColor, PaletteError> {
        let len = self.len();
        if index >= len {
            return Err(PaletteError::OutOfRange { index, len });
        }
        if !self.limits.can_shrink(len) {
            return Err(PaletteError::TooFew {
                min: self.limits.min,
            });
        }
        Ok(self.colors.remove(index))
    }

    /// Regenerate every unlocked swatch from `harmony`.
    ///
    /// The fresh sequence has the palette's current length (or the request's
    /// length, capped, when the palette is empty). Locked swatches keep their
    /// color; unlocked swatches take the fresh color at their position. Ids
    /// never change.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, harmony: &Harmony, rng: &mut R) {
        let length = if self.is_empty() {
            self.limits.cap(harmony.len())
        } else {
            self.len()
        };
        let fresh = harmony.clone().with_len(length).generate(rng);
        trace!(length, locked = self.locked_indices().len(), "regenerating palette");

        for (i, hex) in fresh.into_iter().enumerate() {
            match self.colors.get_mut(i) {
                Some(slot) if slot.locked => {}
                Some(slot) => slot.hex = hex,
                None => self.colors.push(PaletteColor::new(&hex, rng)),
            }
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut PaletteColor, PaletteError> {
        let len = self.colors.len();
        self.colors
            .get_mut(index)
            .ok_or(PaletteError::OutOfRange { index, len })
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteColor;
    type IntoIter = std::slice::Iter<'a, PaletteColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

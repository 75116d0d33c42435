// SPDX-License-Identifier: MIT
//
// Text and JSON rendering of command results.

use std::io::{self, Write};

use crafter_color::{
    contrast_ratio, format_hsl_string, format_oklch_string, normalize_hex, parse_hex,
    readable_text_color,
};
use crafter_harmony::{GradientSpec, HarmonyMode};
use crafter_palette::{Palette, PaletteQuery, encode_gradient};
use serde::Serialize;

use crate::swatch::swatch;

/// Everything `inspect` reports about one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorFacts {
    pub hex: String,
    pub hsl: String,
    pub oklch: String,
    pub text: &'static str,
    pub contrast: f64,
}

impl ColorFacts {
    /// Facts for `input`, or `None` if it is not a color.
    pub fn new(input: &str) -> Option<Self> {
        let rgb = parse_hex(input)?;
        let hex = normalize_hex(input);
        let text = readable_text_color(&hex);
        let contrast = parse_hex(text).map_or(1.0, |label| contrast_ratio(rgb, label));
        Some(Self {
            hsl: format_hsl_string(&hex),
            oklch: format_oklch_string(&hex),
            hex,
            text,
            contrast,
        })
    }
}

/// The decoded contents of a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedQuery {
    pub colors: Option<Vec<String>>,
    pub mode: Option<HarmonyMode>,
    pub gradient: Option<GradientSpec>,
}

impl From<PaletteQuery> for DecodedQuery {
    fn from(q: PaletteQuery) -> Self {
        Self {
            colors: q.colors,
            mode: q.mode,
            gradient: q.gradient,
        }
    }
}

/// One line per swatch: position, lock marker, swatch, HSL, OKLCH.
pub fn palette(w: &mut impl Write, palette: &Palette, color: bool) -> io::Result<()> {
    for (i, c) in palette.iter().enumerate() {
        let lock = if c.locked { '*' } else { ' ' };
        write!(w, "{i:>2} {lock}")?;
        swatch(w, &c.hex, color)?;
        writeln!(
            w,
            "  hsl {:<14} oklch {}",
            format_hsl_string(&c.hex),
            format_oklch_string(&c.hex)
        )?;
    }
    Ok(())
}

/// The palette followed by the query string that restores it.
pub fn shared_palette(
    w: &mut impl Write,
    palette: &Palette,
    query: &PaletteQuery,
    color: bool,
) -> io::Result<()> {
    self::palette(w, palette, color)?;
    writeln!(w, "\nshare: ?{}", query.to_query())
}

pub fn inspect(w: &mut impl Write, facts: &[ColorFacts], color: bool) -> io::Result<()> {
    for f in facts {
        swatch(w, &f.hex, color)?;
        writeln!(
            w,
            "  hsl {:<14} oklch {:<16} text {}  contrast {:.2}:1",
            f.hsl, f.oklch, f.text, f.contrast
        )?;
    }
    Ok(())
}

pub fn decoded(w: &mut impl Write, q: &DecodedQuery, color: bool) -> io::Result<()> {
    if let Some(mode) = q.mode {
        writeln!(w, "mode: {mode}")?;
    }
    if let Some(gradient) = &q.gradient {
        writeln!(w, "gradient: {}", encode_gradient(gradient))?;
    }
    if let Some(colors) = &q.colors {
        writeln!(w, "colors:")?;
        for hex in colors {
            write!(w, "  ")?;
            swatch(w, hex, color)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Pretty JSON followed by a newline.
pub fn json(w: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

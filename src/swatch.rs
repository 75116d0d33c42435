// SPDX-License-Identifier: MIT
//
// 24-bit ANSI color swatches.
//
// Every swatch is the hex label printed in its readable text color on a
// background of the color itself, followed by a reset. With color off the
// label is printed bare, padded the same way, so columns line up either way.

use std::io::{self, Write};

use crafter_color::{Rgb, parse_hex, readable_text_color};

/// Set the foreground to a 24-bit color.
pub fn fg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Set the background to a 24-bit color.
pub fn bg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Reset all attributes.
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Write ` #RRGGBB ` as a colored block, or plain when `color` is off or
/// `hex` does not parse.
pub fn swatch(w: &mut impl Write, hex: &str, color: bool) -> io::Result<()> {
    let background = parse_hex(hex).filter(|_| color);
    let Some(background) = background else {
        return write!(w, " {hex} ");
    };
    let text = parse_hex(readable_text_color(hex)).unwrap_or(Rgb::WHITE);
    bg(w, background)?;
    fg(w, text)?;
    write!(w, " {hex} ")?;
    reset(w)
}

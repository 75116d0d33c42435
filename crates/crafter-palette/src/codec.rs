//! Shareable URL state.
//!
//! ```text
//! ?colors=FF0000-00FF00-0000FF&mode=triadic&gradient=2563EB_F97316_5
//! ```
//!
//! Colors are bare uppercase hex digits joined by `-`; decoding also
//! accepts `_` separators and a leading `#` per entry, raw or
//! percent-encoded as `%23`. A gradient is `START_END_STEPS`. No other
//! percent escapes are decoded. Keys other than `colors`, `mode`, and `gradient` are
//! ignored, and an unrecognized mode decodes as random.

use crafter_color::{Rgb, is_valid_hex, normalize_hex, to_rgb};
use crafter_harmony::{GradientSpec, Harmony, HarmonyMode};
use tracing::trace;

use crate::error::CodecError;
use crate::palette::Palette;

/// Join colors as `RRGGBB-RRGGBB-…`.
pub fn encode_colors<I, S>(hexes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hexes
        .into_iter()
        .map(|hex| bare(hex.as_ref()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a `colors` value into `#RRGGBB` strings.
///
/// Any entry that is not six hex digits rejects the whole list.
pub fn decode_colors(value: &str) -> Result<Vec<String>, CodecError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CodecError::EmptyColors);
    }
    value
        .split(['-', '_'])
        .map(unescape_hash)
        .map(|entry| {
            if is_valid_hex(entry) {
                Ok(normalize_hex(entry))
            } else {
                Err(CodecError::InvalidColor(entry.to_owned()))
            }
        })
        .collect()
}

/// `START_END_STEPS`, anchors as bare hex digits.
#[must_use]
pub fn encode_gradient(spec: &GradientSpec) -> String {
    format!("{}_{}_{}", bare(&spec.start), bare(&spec.end), spec.steps)
}

/// Parse a `gradient` value.
pub fn decode_gradient(value: &str) -> Result<GradientSpec, CodecError> {
    let parts: Vec<&str> = value.trim().split('_').collect();
    let [start, end, steps] = parts.as_slice() else {
        return Err(CodecError::MalformedGradient(value.to_owned()));
    };
    let (start, end) = (unescape_hash(start), unescape_hash(end));
    for anchor in [start, end] {
        if !is_valid_hex(anchor) {
            return Err(CodecError::InvalidColor(anchor.to_owned()));
        }
    }
    let steps = match steps.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => return Err(CodecError::InvalidSteps((*steps).to_owned())),
    };
    Ok(GradientSpec::new(start, end, steps))
}

/// Digits without `#`. Input that is not a color passes through trimmed,
/// so decoding the result reports it instead of guessing.
fn bare(hex: &str) -> String {
    to_rgb(hex).map_or_else(
        || hex.trim().trim_start_matches('#').to_owned(),
        Rgb::to_hex_digits,
    )
}

/// Strip a percent-encoded `#` (`%23`) as browsers write it.
fn unescape_hash(entry: &str) -> &str {
    entry.strip_prefix("%23").unwrap_or(entry)
}

/// The palette state carried in a query string. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteQuery {
    pub colors: Option<Vec<String>>,
    pub mode: Option<HarmonyMode>,
    pub gradient: Option<GradientSpec>,
}

impl PaletteQuery {
    /// The state describing `palette` as generated by `harmony`.
    #[must_use]
    pub fn from_palette(palette: &Palette, harmony: &Harmony) -> Self {
        Self {
            colors: Some(palette.hexes()),
            mode: Some(harmony.mode()),
            gradient: match harmony {
                Harmony::Gradient(spec) => Some(spec.clone()),
                Harmony::Mode { .. } => None,
            },
        }
    }

    /// Parse `key=value` pairs joined by `&`, with or without a leading `?`.
    ///
    /// A later occurrence of a key overrides an earlier one.
    pub fn from_query(query: &str) -> Result<Self, CodecError> {
        let mut out = Self::default();
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "colors" => out.colors = Some(decode_colors(value)?),
                "mode" => out.mode = Some(HarmonyMode::parse_lenient(value)),
                "gradient" => out.gradient = Some(decode_gradient(value)?),
                _ => trace!(key, "ignoring unknown query key"),
            }
        }
        Ok(out)
    }

    /// Render as `colors=…&mode=…&gradient=…`, skipping absent fields.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(colors) = &self.colors {
            parts.push(format!("colors={}", encode_colors(colors)));
        }
        if let Some(mode) = self.mode {
            parts.push(format!("mode={mode}"));
        }
        if let Some(gradient) = &self.gradient {
            parts.push(format!("gradient={}", encode_gradient(gradient)));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn colors_encode_bare_uppercase() {
        assert_eq!(
            encode_colors(["#ff0000", "00ff00", "#00f"]),
            "FF0000-00FF00-0000FF"
        );
        assert_eq!(encode_colors(Vec::<String>::new()), "");
    }

    #[test]
    fn colors_decode_either_separator() {
        assert_eq!(
            decode_colors("ff0000_00FF00-#0000ff").unwrap(),
            ["#FF0000", "#00FF00", "#0000FF"]
        );
    }

    #[test]
    fn colors_decode_rejects_any_bad_entry() {
        assert_eq!(
            decode_colors("FF0000-XYZXYZ"),
            Err(CodecError::InvalidColor("XYZXYZ".into()))
        );
        assert_eq!(
            decode_colors("FF0000--00FF00"),
            Err(CodecError::InvalidColor(String::new()))
        );
        assert_eq!(decode_colors("F00"), Err(CodecError::InvalidColor("F00".into())));
        assert_eq!(decode_colors("  "), Err(CodecError::EmptyColors));
    }

    #[test]
    fn percent_encoded_hash_is_accepted() {
        assert_eq!(
            decode_colors("%23FF0000-%2300ff00").unwrap(),
            ["#FF0000", "#00FF00"]
        );
        assert_eq!(
            decode_gradient("%232563EB_%23F97316_3").unwrap(),
            GradientSpec::new("#2563EB", "#F97316", 3)
        );
        let q = PaletteQuery::from_query("colors=%23ABCDEF-123456").unwrap();
        assert_eq!(q.colors, Some(vec!["#ABCDEF".to_owned(), "#123456".to_owned()]));
        assert_eq!(
            decode_colors("%2FFF0000"),
            Err(CodecError::InvalidColor("%2FFF0000".into()))
        );
    }

    #[test]
    fn malformed_anchor_is_not_padded_into_a_color() {
        let spec = GradientSpec::new("12345", "#F97316", 3);
        let encoded = encode_gradient(&spec);
        assert_eq!(encoded, "12345_F97316_3");
        assert_eq!(decode_gradient(&encoded), Err(CodecError::InvalidColor("12345".into())));
    }

    #[test]
    fn gradient_round_trip() {
        let spec = GradientSpec::new("#2563eb", "#f97316", 7);
        let encoded = encode_gradient(&spec);
        assert_eq!(encoded, "2563EB_F97316_7");
        assert_eq!(decode_gradient(&encoded).unwrap(), spec);
    }

    #[test]
    fn gradient_decode_errors() {
        assert_eq!(
            decode_gradient("2563EB_F97316"),
            Err(CodecError::MalformedGradient("2563EB_F97316".into()))
        );
        assert_eq!(
            decode_gradient("2563EB_F97316_5_1"),
            Err(CodecError::MalformedGradient("2563EB_F97316_5_1".into()))
        );
        assert_eq!(
            decode_gradient("2563EB_orange_5"),
            Err(CodecError::InvalidColor("orange".into()))
        );
        assert_eq!(
            decode_gradient("2563EB_F97316_0"),
            Err(CodecError::InvalidSteps("0".into()))
        );
        assert_eq!(
            decode_gradient("2563EB_F97316_-2"),
            Err(CodecError::InvalidSteps("-2".into()))
        );
    }

    #[test]
    fn query_parses_known_keys() {
        let q = PaletteQuery::from_query("?colors=FF0000-00FF00&mode=triadic&utm_source=x").unwrap();
        assert_eq!(q.colors.as_deref(), Some(&["#FF0000".to_owned(), "#00FF00".to_owned()][..]));
        assert_eq!(q.mode, Some(HarmonyMode::Triadic));
        assert_eq!(q.gradient, None);
    }

    #[test]
    fn query_unknown_mode_is_random() {
        let q = PaletteQuery::from_query("mode=sepia").unwrap();
        assert_eq!(q.mode, Some(HarmonyMode::Random));
    }

    #[test]
    fn query_empty_is_default() {
        assert_eq!(PaletteQuery::from_query("").unwrap(), PaletteQuery::default());
        assert_eq!(PaletteQuery::from_query("?&&").unwrap(), PaletteQuery::default());
        assert_eq!(PaletteQuery::default().to_query(), "");
    }

    #[test]
    fn query_bad_colors_is_error() {
        assert_eq!(
            PaletteQuery::from_query("colors=red"),
            Err(CodecError::InvalidColor("red".into()))
        );
    }

    #[test]
    fn query_round_trip() {
        let q = PaletteQuery {
            colors: Some(vec!["#2563EB".into(), "#F97316".into()]),
            mode: Some(HarmonyMode::Gradient),
            gradient: Some(GradientSpec::default().with_steps(2)),
        };
        let text = q.to_query();
        assert_eq!(text, "colors=2563EB-F97316&mode=gradient&gradient=2563EB_F97316_2");
        assert_eq!(PaletteQuery::from_query(&text).unwrap(), q);
    }
}

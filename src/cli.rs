// SPDX-License-Identifier: MIT
//
// Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use crafter_harmony::{DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START, DEFAULT_GRADIENT_STEPS, HarmonyMode};
use crafter_palette::{
    DEFAULT_LENGTH, MAX_COLORS_ENV, Palette, PaletteLimits, PaletteRecord, parse_max_setting,
};

/// Harmony-driven color palettes.
#[derive(Debug, Parser)]
#[command(name = "color-crafter", version, about)]
pub struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Print swatches without ANSI colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a palette from a base color and a harmony mode.
    Generate(GenerateArgs),
    /// Interpolate between two colors in OKLCH.
    Gradient(GradientArgs),
    /// Show HSL, OKLCH, and label contrast for colors.
    Inspect {
        /// Colors as #RGB or #RRGGBB.
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Decode a shared query string (colors=…&mode=…&gradient=…).
    Decode {
        query: String,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base color. A pleasant random color when omitted.
    #[arg(long, short)]
    pub base: Option<String>,

    /// Harmony mode.
    #[arg(long, short, default_value_t = HarmonyMode::Random)]
    pub mode: HarmonyMode,

    /// Number of colors.
    #[arg(long, short = 'n', default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Gradient start, for gradient mode.
    #[arg(long, default_value = DEFAULT_GRADIENT_START)]
    pub start: String,

    /// Gradient end, for gradient mode.
    #[arg(long, default_value = DEFAULT_GRADIENT_END)]
    pub end: String,

    /// Existing palette to regenerate, as RRGGBB-RRGGBB-….
    #[arg(long)]
    pub from: Option<String>,

    /// Positions of --from to keep while regenerating, e.g. 0,2.
    #[arg(long, value_delimiter = ',', requires = "from")]
    pub lock: Vec<usize>,

    #[command(flatten)]
    pub record: RecordArgs,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Debug, Args)]
pub struct GradientArgs {
    #[arg(long, default_value = DEFAULT_GRADIENT_START)]
    pub start: String,

    #[arg(long, default_value = DEFAULT_GRADIENT_END)]
    pub end: String,

    #[arg(long, default_value_t = DEFAULT_GRADIENT_STEPS)]
    pub steps: usize,

    #[command(flatten)]
    pub record: RecordArgs,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Metadata for the JSON record.
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Palette name.
    #[arg(long, default_value = "Untitled")]
    pub name: String,

    /// Project the palette belongs to.
    #[arg(long)]
    pub project: Option<String>,

    /// Tag; repeat for several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl RecordArgs {
    /// Wrap `palette` in a record stamped `created_at`.
    pub fn record(&self, palette: &Palette, mode: HarmonyMode, created_at: u64) -> PaletteRecord {
        let record = PaletteRecord::new(self.name.as_str(), palette, mode, created_at)
            .with_tags(self.tags.iter().cloned());
        match &self.project {
            Some(project) => record.with_project(project.as_str()),
            None => record,
        }
    }
}

#[derive(Debug, Args)]
pub struct LimitArgs {
    /// Maximum palette length: a count, or 0/none/unbounded for no cap.
    #[arg(long, env = MAX_COLORS_ENV, value_parser = max_colors)]
    pub max: Option<MaxColors>,

    /// Allow palettes of any length. Overrides --max.
    #[arg(long)]
    pub unbounded: bool,
}

/// A parsed `--max` setting; `None` inside means no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxColors(pub Option<usize>);

fn max_colors(value: &str) -> Result<MaxColors, String> {
    parse_max_setting(value)
        .map(MaxColors)
        .ok_or_else(|| format!("'{value}' is not a count, 0, none, or unbounded"))
}

impl LimitArgs {
    /// --unbounded over --max (flag or environment) over the defaults.
    pub fn resolve(&self) -> PaletteLimits {
        let limits = PaletteLimits::default();
        if self.unbounded {
            limits.with_max(None)
        } else if let Some(MaxColors(max)) = self.max {
            limits.with_max(max)
        } else {
            limits
        }
    }
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Seed the generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

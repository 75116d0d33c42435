// SPDX-License-Identifier: MIT
//
// color-crafter — harmony-driven color palettes from the terminal.
//
// The binary is a thin shell over the library crates:
//
//   crafter-color   → hex parsing, HSL/OKLCH conversion, contrast
//   crafter-harmony → palette generation per harmony mode, gradients
//   crafter-palette → locking, limits, query-string codec, saved records
//
// Each subcommand builds a request, runs it against a generator seeded
// from --seed (or OS entropy), and renders the result as text or JSON:
//
//   args → Harmony → Palette::generate / regenerate → report → stdout
//
// Diagnostics go to stderr through tracing; set CRAFTER_LOG=debug to see
// when a base color or gradient anchor was replaced.

mod cli;
mod report;
mod swatch;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crafter_color::{normalize_hex, parse_hex, random_pleasant_hex};
use crafter_harmony::{GradientSpec, Harmony};
use crafter_palette::{Palette, PaletteQuery, decode_colors, now_millis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, Format, GenerateArgs, GradientArgs, RecordArgs, SeedArgs};
use report::{ColorFacts, DecodedQuery};

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "CRAFTER_LOG";

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("color-crafter: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Output settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
struct Output {
    format: Format,
    color: bool,
}

impl Output {
    fn new(cli: &Cli) -> Self {
        let color = !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal();
        Self {
            format: cli.format,
            color,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let out = Output::new(cli);
    let stdout = io::stdout();
    let mut w = stdout.lock();

    match &cli.command {
        Command::Generate(args) => generate(&mut w, args, out)?,
        Command::Gradient(args) => gradient(&mut w, args, out)?,
        Command::Inspect { colors } => inspect(&mut w, colors, out)?,
        Command::Decode { query } => decode(&mut w, query, out)?,
    }
    w.flush().context("writing output")
}

fn rng(seed: &SeedArgs) -> StdRng {
    seed.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn generate(w: &mut impl Write, args: &GenerateArgs, out: Output) -> Result<()> {
    if args.length == 0 && args.from.is_none() {
        bail!("--length must be at least 1");
    }
    let mut rng = rng(&args.seed);
    let limits = args.limits.resolve();

    let base = match &args.base {
        Some(base) => color_arg("--base", base)?,
        None => random_pleasant_hex(&mut rng),
    };
    let start = color_arg("--start", &args.start)?;
    let end = color_arg("--end", &args.end)?;
    debug!(%base, mode = %args.mode, length = args.length, "generate");

    let gradient = GradientSpec::new(&start, &end, args.length);
    let harmony = Harmony::new(&base, args.mode, args.length, &gradient);

    let palette = if let Some(from) = &args.from {
        let colors = decode_colors(from).context("reading --from")?;
        let mut palette = Palette::from_hexes(&colors, limits, &mut rng);
        for &index in &args.lock {
            palette
                .set_locked(index, true)
                .with_context(|| format!("locking position {index}"))?;
        }
        palette.regenerate(&harmony, &mut rng);
        palette
    } else {
        Palette::generate(&harmony, limits, &mut rng)
    };

    emit_palette(w, &palette, &harmony, &args.record, out)
}

fn gradient(w: &mut impl Write, args: &GradientArgs, out: Output) -> Result<()> {
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }
    let start = color_arg("--start", &args.start)?;
    let end = color_arg("--end", &args.end)?;
    let mut rng = rng(&args.seed);
    let harmony = Harmony::Gradient(GradientSpec::new(&start, &end, args.steps));
    let palette = Palette::generate(&harmony, args.limits.resolve(), &mut rng);
    emit_palette(w, &palette, &harmony, &args.record, out)
}

/// A color flag normalized to `#RRGGBB`, or an error naming the flag.
fn color_arg(flag: &str, input: &str) -> Result<String> {
    if parse_hex(input).is_none() {
        bail!("{flag}: '{input}' is not a valid hex color");
    }
    Ok(normalize_hex(input))
}

fn emit_palette(
    w: &mut impl Write,
    palette: &Palette,
    harmony: &Harmony,
    record: &RecordArgs,
    out: Output,
) -> Result<()> {
    match out.format {
        Format::Text => {
            let query = PaletteQuery::from_palette(palette, harmony);
            report::shared_palette(w, palette, &query, out.color)?;
        }
        Format::Json => {
            let record = record.record(palette, harmony.mode(), now_millis());
            report::json(w, &record)?;
        }
    }
    Ok(())
}

fn inspect(w: &mut impl Write, colors: &[String], out: Output) -> Result<()> {
    let facts = colors
        .iter()
        .map(|c| ColorFacts::new(c).with_context(|| format!("'{c}' is not a valid hex color")))
        .collect::<Result<Vec<_>>>()?;

    match out.format {
        Format::Text => report::inspect(w, &facts, out.color)?,
        Format::Json => report::json(w, &facts)?,
    }
    Ok(())
}

fn decode(w: &mut impl Write, query: &str, out: Output) -> Result<()> {
    let decoded = DecodedQuery::from(PaletteQuery::from_query(query)?);
    match out.format {
        Format::Text => report::decoded(w, &decoded, out.color)?,
        Format::Json => report::json(w, &decoded)?,
    }
    Ok(())
}

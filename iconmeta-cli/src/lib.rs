//! iconmeta CLI

use std::borrow::Cow;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use log::{info, LevelFilter};

use iconmeta_core::assemble::{build_catalogue, AssemblyReport};
use iconmeta_core::catalogue::{Catalogue, FontDescriptor};
use iconmeta_core::codepoint::{format_hex, parse_hex};
use iconmeta_core::doctable::{read_documentation, DocTable, EMBEDDED_DOCUMENTATION, EMBEDDED_SOURCE};
use iconmeta_core::font::FontFile;
use iconmeta_core::output::write_catalogue;
use iconmeta_core::stats::{
    category_breakdown, check_font, default_key_icons, range_coverage, read_catalogue,
    verify_key_icons, FontCheck, KeyIconCheck, KeyIconStatus, FONT_ICON_BAND, FONT_SAMPLE_BAND,
};

/// CLI entrypoint for iconmeta.
#[derive(Debug, Parser)]
#[command(
    name = "iconmeta",
    version,
    about = "Build and check icon font metadata catalogues"
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate documentation rows against a font and write the catalogue
    Generate(GenerateArgs),
    /// Show category and code point range counts of a catalogue
    Stats(StatsArgs),
    /// Check that key icons are present with their expected names
    Verify(VerifyArgs),
    /// Check key icons and code point coverage directly against a font's cmap
    CheckFont(CheckFontArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Icon font to validate against
    #[arg(long = "font", value_hint = ValueHint::FilePath)]
    font: PathBuf,

    /// Documentation table to read instead of the embedded Segoe Fluent Icons table
    #[arg(long = "doc", value_hint = ValueHint::FilePath)]
    doc: Option<PathBuf>,

    /// Catalogue destination
    #[arg(short = 'o', long = "output", default_value = "IconMetadata.json", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Override the font name recorded in the catalogue
    #[arg(long = "font-name")]
    font_name: Option<String>,

    /// Override the font version recorded in the catalogue
    #[arg(long = "font-version")]
    font_version: Option<String>,

    /// Override the copyright recorded in the catalogue
    #[arg(long = "copyright")]
    copyright: Option<String>,

    /// Override the provenance string recorded in the catalogue
    #[arg(long = "source")]
    source: Option<String>,
}

#[derive(Debug, Args)]
struct StatsArgs {
    /// Catalogue to summarise
    #[arg(value_hint = ValueHint::FilePath)]
    catalogue: PathBuf,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct VerifyArgs {
    /// Catalogue to check
    #[arg(value_hint = ValueHint::FilePath)]
    catalogue: PathBuf,

    /// Expected icons as HEX=Name (defaults to Forward, Back, Search, Home, Settings)
    #[arg(short = 'e', long = "expect", value_delimiter = ',', value_hint = ValueHint::Other)]
    expect: Vec<String>,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct CheckFontArgs {
    /// Icon font to inspect
    #[arg(long = "font", value_hint = ValueHint::FilePath)]
    font: PathBuf,

    /// Expected icons as HEX=Name (defaults to Forward, Back, Search, Home, Settings)
    #[arg(short = 'e', long = "expect", value_delimiter = ',', value_hint = ValueHint::Other)]
    expect: Vec<String>,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, out: &impl IsTerminal) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => out.is_terminal(),
        }
    }
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Stats(args) => run_stats(args),
        Command::Verify(args) => run_verify(args),
        Command::CheckFont(args) => run_check_font(args),
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter) {
    // Builder::new() ignores RUST_LOG; the flags are the only knob
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    info!("loading font: {}", args.font.display());
    let font = FontFile::load(&args.font)?;
    info!("found {} glyphs in font file", font.glyphs.len());

    let doc_text = load_documentation(args.doc.as_deref())?;
    let doc = DocTable::parse(&doc_text);
    info!("extracted {} icons from documentation", doc.len());

    let descriptor = build_descriptor(&args, &font);
    let (catalogue, report) = build_catalogue(&doc, &font.glyphs, descriptor);
    write_catalogue(&args.output, &catalogue)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&catalogue, &report, &args.output, &mut handle)?;
    Ok(())
}

fn load_documentation(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => Ok(Cow::Owned(read_documentation(path)?)),
        None => Ok(Cow::Borrowed(EMBEDDED_DOCUMENTATION)),
    }
}

fn build_descriptor(args: &GenerateArgs, font: &FontFile) -> FontDescriptor {
    let source = match &args.doc {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        None => EMBEDDED_SOURCE.to_string(),
    };

    let mut descriptor = FontDescriptor::from_font_info(&font.info, source);
    if let Some(name) = &args.font_name {
        descriptor.name = name.clone();
    }
    if let Some(version) = &args.font_version {
        descriptor.version = version.clone();
    }
    if let Some(copyright) = &args.copyright {
        descriptor.copyright = copyright.clone();
    }
    if let Some(source) = &args.source {
        descriptor.source = source.clone();
    }
    descriptor
}

fn write_summary(
    catalogue: &Catalogue,
    report: &AssemblyReport,
    output: &Path,
    mut w: impl Write,
) -> Result<()> {
    writeln!(w, "Total icons: {}", catalogue.icons.len())?;
    writeln!(
        w,
        "Skipped: {} missing from font, {} invalid",
        report.skipped_missing(),
        report.skipped_invalid()
    )?;
    writeln!(w, "Output: {}", output.display())?;
    writeln!(w)?;
    writeln!(w, "Category breakdown:")?;

    let mut counts = category_breakdown(catalogue);
    counts.retain(|c| c.count > 0);
    // largest first; ties keep priority order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    for row in counts {
        writeln!(w, "  {:<20}: {:>4} icons", row.definition.key, row.count)?;
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let catalogue = read_catalogue(&args.catalogue)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = args.color.enabled(&handle);
    write_stats(&catalogue, &mut handle, color)
}

fn write_stats(catalogue: &Catalogue, mut w: impl Write, color: bool) -> Result<()> {
    writeln!(w, "Total icons: {}", catalogue.icons.len())?;
    writeln!(w, "Total categories: {}", catalogue.categories.len())?;
    writeln!(w)?;

    let rows: Vec<(String, String, usize)> = category_breakdown(catalogue)
        .into_iter()
        .map(|c| (c.definition.name, c.definition.name_zh, c.count))
        .collect();
    let name_width = rows
        .iter()
        .map(|r| r.0.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 40);

    writeln!(w, "Categories:")?;
    for (name, name_zh, count) in rows {
        let padded = format!("{:<name_width$}", name);
        let rendered_name = apply_color(&padded, color, AnsiColor::Cyan);
        let rendered_count = apply_color(&format!("{count:>4}"), color, AnsiColor::Green);
        writeln!(w, "  {rendered_name}  {rendered_count}  {name_zh}")?;
    }

    writeln!(w)?;
    writeln!(w, "Range coverage:")?;
    let coverage = range_coverage(catalogue);
    let total: usize = coverage.iter().map(|r| r.count).sum();
    for range in &coverage {
        let label = apply_color(&format!("{:<12}", range.label()), color, AnsiColor::Cyan);
        writeln!(w, "  {label} {:>6}", range.count)?;
    }
    writeln!(w, "  {:<12} {:>6}", "TOTAL", total)?;
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<()> {
    let catalogue = read_catalogue(&args.catalogue)?;
    let expected = expectations_or_default(&args.expect)?;

    let checks = verify_key_icons(&catalogue, &expected);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = args.color.enabled(&handle);
    write_checks(&checks, &mut handle, color)?;

    let failed = checks.iter().filter(|c| !c.is_ok()).count();
    if failed > 0 {
        bail!("{failed} of {} key icons missing or mismatched", checks.len());
    }
    Ok(())
}

fn expectations_or_default(raw: &[String]) -> Result<Vec<(u32, String)>> {
    if raw.is_empty() {
        Ok(default_key_icons())
    } else {
        parse_expectations(raw)
    }
}

fn parse_expectations(raw: &[String]) -> Result<Vec<(u32, String)>> {
    raw.iter()
        .map(|item| -> Result<(u32, String)> {
            let (hex, name) = item
                .split_once('=')
                .ok_or_else(|| anyhow!("expected HEX=Name, got: {item}"))?;
            let hex = hex.trim().trim_start_matches("U+").trim_start_matches("u+");
            let code_point =
                parse_hex(hex).with_context(|| format!("invalid code point in: {item}"))?;
            let name = name.trim();
            if name.is_empty() {
                bail!("missing icon name in: {item}");
            }
            Ok((code_point, name.to_string()))
        })
        .collect()
}

fn write_checks(checks: &[KeyIconCheck], mut w: impl Write, color: bool) -> Result<()> {
    writeln!(
        w,
        "{:<8} {:<20} {:<20} {:<10}",
        "Unicode", "Expected Name", "Actual Name", "Status"
    )?;
    for check in checks {
        let (actual, status, tint) = match &check.status {
            KeyIconStatus::Found => (check.expected.as_str(), "OK", AnsiColor::Green),
            KeyIconStatus::Mismatch(actual) => (actual.as_str(), "MISMATCH", AnsiColor::Yellow),
            KeyIconStatus::Missing => ("NOT FOUND", "MISSING", AnsiColor::Yellow),
        };
        let code = apply_color(
            &format!("{:<8}", format_hex(check.code_point)),
            color,
            AnsiColor::Cyan,
        );
        let status = apply_color(status, color, tint);
        writeln!(w, "{code} {:<20} {:<20} {status}", check.expected, actual)?;
    }

    let ok = checks.iter().all(KeyIconCheck::is_ok);
    writeln!(w, "All key icons verified: {}", if ok { "YES" } else { "NO" })?;
    Ok(())
}

fn run_check_font(args: CheckFontArgs) -> Result<()> {
    let font = FontFile::load(&args.font)?;
    let expected = expectations_or_default(&args.expect)?;
    let check = check_font(&font.glyphs, &expected);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = args.color.enabled(&handle);
    write_font_check(&check, &mut handle, color)?;

    if !check.all_key_glyphs_present() {
        let missing = check
            .key_glyphs
            .iter()
            .filter(|key| key.glyph.is_none())
            .count();
        bail!(
            "{missing} of {} key icons have no glyph in {}",
            check.key_glyphs.len(),
            args.font.display()
        );
    }
    Ok(())
}

fn write_font_check(check: &FontCheck, mut w: impl Write, color: bool) -> Result<()> {
    writeln!(w, "Key icons:")?;
    for key in &check.key_glyphs {
        let code = apply_color(
            &format!("{:<8}", format_hex(key.code_point)),
            color,
            AnsiColor::Cyan,
        );
        let glyph = match key.glyph {
            Some(gid) => apply_color(&format!("glyph {}", gid.to_u32()), color, AnsiColor::Green),
            None => apply_color("MISSING", color, AnsiColor::Yellow),
        };
        writeln!(w, "  {code} {:<20} {glyph}", key.name)?;
    }

    let (sample_start, sample_end) = FONT_SAMPLE_BAND;
    writeln!(w)?;
    writeln!(
        w,
        "Sample of {} glyphs in {}-{}:",
        check.sample.len(),
        format_hex(sample_start),
        format_hex(sample_end - 1)
    )?;
    for (code_point, gid) in &check.sample {
        writeln!(w, "  {:<8} glyph {}", format_hex(*code_point), gid.to_u32())?;
    }

    let (band_start, band_end) = FONT_ICON_BAND;
    writeln!(w)?;
    writeln!(w, "Total glyphs in cmap: {}", check.total)?;
    writeln!(
        w,
        "Glyphs in {}-{}: {}",
        format_hex(band_start),
        format_hex(band_end - 1),
        check.in_icon_band
    )?;
    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

//! # CLI Module
//!
//! Argument parsing and the driver loop that composes the walker, the
//! header formatter, and the file updater.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::header::render_for_path;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{RunSummary, print_file_error, print_file_outcome, print_start_message, print_summary};
use crate::updater::apply_header;
use crate::{info_log, verbose_log};
use crate::walker::{collect_target_files, compile_ignore_patterns};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Prepend the header to every supported file under the project
  addheader HEADER.txt .

  # Report files missing the header without modifying anything
  addheader --dry-run HEADER.txt src/

  # Exclude generated sources
  addheader --ignore \"generated/**\" HEADER.txt .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// Path to the text file containing the raw header content
  pub header_file: PathBuf,

  /// Root directory of the project to process recursively
  pub root_dir: PathBuf,

  /// Dry run: report files missing the header without modifying them
  #[arg(long)]
  pub dry_run: bool,

  /// File patterns to ignore, relative to the root (supports glob patterns)
  #[arg(long, short = 'i', value_name = "GLOB")]
  pub ignore: Vec<String>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Runs the tool with the given arguments.
///
/// Exit behavior: a missing header file terminates with status 1 before any
/// traversal begins; per-file errors are reported and do not affect the exit
/// status in modify mode. In dry-run mode the process exits 1 when any file
/// is missing the header.
pub fn run(args: Cli) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Fatal tier: nothing under the root is touched if the header can't be read.
  if !args.header_file.exists() {
    eprintln!("ERROR: Header file {} not found", args.header_file.display());
    process::exit(1);
  }

  let raw_header = std::fs::read_to_string(&args.header_file)
    .with_context(|| format!("Failed to read header file: {}", args.header_file.display()))?;
  verbose_log!("Loaded header text from {}", args.header_file.display());

  let ignore_patterns = compile_ignore_patterns(&args.ignore)?;

  let root = args
    .root_dir
    .canonicalize()
    .unwrap_or_else(|_| args.root_dir.clone());
  debug!("Processing root: {}", root.display());

  if args.dry_run {
    info_log!("Dry run: no files will be modified");
  }

  let files = collect_target_files(&root, &ignore_patterns)?;
  print_start_message(files.len(), args.dry_run);

  let start_time = Instant::now();
  let mut summary = RunSummary::default();

  for path in &files {
    // The formatter decides the comment style; unsupported types never get
    // here because the walker's allow-list gates them, but the dispatch stays
    // permissive and skips silently if they ever do.
    let Some(header_block) = render_for_path(&raw_header, path) else {
      verbose_log!("No comment style for {}, skipping", path.display());
      continue;
    };

    match apply_header(path, &header_block, args.dry_run) {
      Ok(outcome) => {
        summary.tally(outcome);
        print_file_outcome(path, Some(&root), outcome);
      }
      Err(e) => {
        summary.tally_failure();
        print_file_error(path, Some(&root), &e);
      }
    }
  }

  print_summary(&summary, start_time.elapsed(), args.dry_run);

  if args.dry_run && summary.missing > 0 {
    process::exit(1);
  }

  Ok(())
}

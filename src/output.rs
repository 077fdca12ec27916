//! # Output Module
//!
//! Centralizes all user-facing output: one line per processed file and a
//! closing summary. Paths are displayed relative to the processed root so
//! the output reads the same wherever the tool is invoked from.

use std::path::Path;
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::updater::UpdateOutcome;

/// Symbols used in output
pub mod symbols {
  /// Header applied
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Error or missing header
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Skipped, header already present
  pub const SKIPPED: &str = "-";
}

/// Per-run tally of file outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Files rewritten with the header prepended
  pub applied: usize,
  /// Files that already carried the header
  pub skipped: usize,
  /// Files missing the header (dry run only)
  pub missing: usize,
  /// Files that failed to read or write
  pub failed: usize,
}

impl RunSummary {
  /// Records one updater outcome.
  pub const fn tally(&mut self, outcome: UpdateOutcome) {
    match outcome {
      UpdateOutcome::Applied => self.applied += 1,
      UpdateOutcome::AlreadyPresent => self.skipped += 1,
      UpdateOutcome::Missing => self.missing += 1,
    }
  }

  /// Records one per-file failure.
  pub const fn tally_failure(&mut self) {
    self.failed += 1;
  }

  /// Total number of files that produced an outcome line.
  pub const fn total(&self) -> usize {
    self.applied + self.skipped + self.missing + self.failed
  }
}

/// Renders a path relative to the processed root when possible.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  if let Some(root) = root {
    if let Ok(stripped) = path.strip_prefix(root) {
      return stripped.display().to_string();
    }
    if let Some(relative) = pathdiff::diff_paths(path, root) {
      return relative.display().to_string();
    }
  }
  path.display().to_string()
}

/// Prints the initial "Processing N files..." or "Checking N files..." line.
pub fn print_start_message(file_count: usize, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let verb = if dry_run { "Checking" } else { "Processing" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{verb} {file_count} {files_word}...");
}

/// Prints the outcome line for one file.
pub fn print_file_outcome(path: &Path, root: Option<&Path>, outcome: UpdateOutcome) {
  if is_quiet() {
    return;
  }

  let display_path = make_relative_path(path, root);
  match outcome {
    UpdateOutcome::Applied => println!(
      "{} updated: {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      display_path
    ),
    UpdateOutcome::AlreadyPresent => println!(
      "{} skipped (header already present): {}",
      symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      display_path
    ),
    UpdateOutcome::Missing => println!(
      "{} missing header: {}",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      display_path
    ),
  }
}

/// Prints the error line for one file. Errors are shown even in quiet mode.
pub fn print_file_error(path: &Path, root: Option<&Path>, error: &anyhow::Error) {
  let display_path = make_relative_path(path, root);
  println!(
    "{} error: {}: {:#}",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    display_path,
    error
  );
}

/// Prints the closing summary line with counts and elapsed time.
pub fn print_summary(summary: &RunSummary, elapsed: Duration, dry_run: bool) {
  if is_quiet() {
    return;
  }

  println!();
  let mut parts = Vec::new();
  if dry_run {
    parts.push(format!("{} missing", summary.missing));
  } else {
    parts.push(format!("{} updated", summary.applied));
  }
  parts.push(format!("{} skipped", summary.skipped));
  if summary.failed > 0 {
    parts.push(format!("{} failed", summary.failed));
  }

  println!(
    "{} files processed ({}) in {:.2?}",
    summary.total(),
    parts.join(", "),
    elapsed
  );
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_make_relative_path_strips_root() {
    let root = PathBuf::from("/work/project");
    let path = root.join("src/main.cpp");
    assert_eq!(make_relative_path(&path, Some(&root)), "src/main.cpp");
  }

  #[test]
  fn test_make_relative_path_without_root() {
    let path = PathBuf::from("/work/project/src/main.cpp");
    assert_eq!(make_relative_path(&path, None), "/work/project/src/main.cpp");
  }

  #[test]
  fn test_make_relative_path_outside_root() {
    let root = PathBuf::from("/work/project");
    let path = PathBuf::from("/work/other/file.py");
    assert_eq!(make_relative_path(&path, Some(&root)), "../other/file.py");
  }

  #[test]
  fn test_summary_tally() {
    let mut summary = RunSummary::default();
    summary.tally(UpdateOutcome::Applied);
    summary.tally(UpdateOutcome::Applied);
    summary.tally(UpdateOutcome::AlreadyPresent);
    summary.tally(UpdateOutcome::Missing);
    summary.tally_failure();

    assert_eq!(summary.applied, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.missing, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 5);
  }
}

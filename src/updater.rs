//! # Updater Module
//!
//! In-place file rewriting with the idempotence check. Reads the full
//! current content, compares its prefix against the header block (trailing
//! whitespace trimmed), and only then prepends and rewrites.
//!
//! Every error is scoped to the file it happened on; the caller decides
//! whether to continue with the next file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::trace;

/// Outcome of applying a header block to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
  /// The header was prepended and the file rewritten.
  Applied,
  /// The file already starts with the header; nothing was written.
  AlreadyPresent,
  /// Dry run only: the header is absent but no write was performed.
  Missing,
}

/// Prepends `header_block` to the file at `path` unless it is already there.
///
/// The file must be valid UTF-8; a decoding failure is an error for this
/// file, not for the run. In dry-run mode a file without the header reports
/// [`UpdateOutcome::Missing`] and is left untouched.
///
/// The write is a single `fs::write` call. There is no staging or backup;
/// a failure mid-write can leave the file inconsistent, an accepted risk for
/// a developer-invoked tool.
pub fn apply_header(path: &Path, header_block: &str, dry_run: bool) -> Result<UpdateOutcome> {
  let current = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

  if current.starts_with(header_block.trim_end()) {
    trace!("Header already present in {}", path.display());
    return Ok(UpdateOutcome::AlreadyPresent);
  }

  if dry_run {
    return Ok(UpdateOutcome::Missing);
  }

  let mut updated = String::with_capacity(header_block.len() + current.len());
  updated.push_str(header_block);
  updated.push_str(&current);

  fs::write(path, updated).with_context(|| format!("Failed to write file: {}", path.display()))?;

  Ok(UpdateOutcome::Applied)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  const BLOCK: &str = "/*\n * Copyright 2026\n */\n\n";

  #[test]
  fn test_apply_prepends_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    fs::write(&path, "int main(){}").unwrap();

    let outcome = apply_header(&path, BLOCK, false).unwrap();
    assert_eq!(outcome, UpdateOutcome::Applied);
    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "/*\n * Copyright 2026\n */\n\nint main(){}"
    );
  }

  #[test]
  fn test_second_application_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    fs::write(&path, "int main(){}").unwrap();

    apply_header(&path, BLOCK, false).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let outcome = apply_header(&path, BLOCK, false).unwrap();
    assert_eq!(outcome, UpdateOutcome::AlreadyPresent);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
  }

  #[test]
  fn test_dry_run_reports_missing_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setup.py");
    fs::write(&path, "print(1)").unwrap();

    let outcome = apply_header(&path, "# Copyright 2026\n\n", true).unwrap();
    assert_eq!(outcome, UpdateOutcome::Missing);
    assert_eq!(fs::read_to_string(&path).unwrap(), "print(1)");
  }

  #[test]
  fn test_dry_run_still_detects_present_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setup.py");
    fs::write(&path, "# Copyright 2026\n\nprint(1)").unwrap();

    let outcome = apply_header(&path, "# Copyright 2026\n\n", true).unwrap();
    assert_eq!(outcome, UpdateOutcome::AlreadyPresent);
  }

  #[test]
  fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.cpp");

    let result = apply_header(&path, BLOCK, false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to read file"));
  }

  #[test]
  fn test_non_utf8_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.c");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    assert!(apply_header(&path, BLOCK, false).is_err());
  }

  #[test]
  fn test_empty_file_gets_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.h");
    fs::write(&path, "").unwrap();

    let outcome = apply_header(&path, BLOCK, false).unwrap();
    assert_eq!(outcome, UpdateOutcome::Applied);
    assert_eq!(fs::read_to_string(&path).unwrap(), BLOCK);
  }
}

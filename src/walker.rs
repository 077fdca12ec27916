//! # Walker Module
//!
//! Recursive traversal of the target tree. Prunes hidden directories and
//! any directory named `build` at any depth, then keeps only files on the
//! fixed allow-list of extensions and filenames. Non-matching files are
//! never opened.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Extensions eligible for header insertion.
const TARGET_EXTENSIONS: &[&str] = &["py", "sh", "cmake", "h", "hpp", "cpp", "c", "cc", "template"];

/// Exact filenames eligible regardless of extension.
const TARGET_FILENAMES: &[&str] = &["CMakeLists.txt"];

/// Directory name excluded at any depth, alongside hidden directories.
const BUILD_DIR: &str = "build";

/// True for directories that must be pruned from the walk. The root itself
/// is never pruned, so a hidden root directory can still be processed.
fn is_excluded_dir(entry: &DirEntry) -> bool {
  entry.file_type().is_dir()
    && entry.depth() > 0
    && entry
      .file_name()
      .to_str()
      .is_some_and(|name| name.starts_with('.') || name == BUILD_DIR)
}

/// True if the file matches the allow-list by extension or exact filename.
pub fn is_target_file(path: &Path) -> bool {
  let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
  if TARGET_FILENAMES.contains(&file_name) {
    return true;
  }

  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| TARGET_EXTENSIONS.contains(&ext))
}

/// Compiles user-supplied ignore patterns into glob matchers.
///
/// An invalid pattern is a fatal error: a run with a half-applied exclusion
/// list could rewrite files the user meant to leave alone.
pub fn compile_ignore_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
  patterns
    .iter()
    .map(|pattern| glob::Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {pattern}")))
    .collect()
}

/// True if the root-relative path matches any ignore pattern.
fn is_ignored(path: &Path, root: &Path, ignore_patterns: &[glob::Pattern]) -> bool {
  if ignore_patterns.is_empty() {
    return false;
  }

  let relative = path.strip_prefix(root).unwrap_or(path);
  ignore_patterns.iter().any(|pattern| pattern.matches_path(relative))
}

/// Walks `root` and collects every allow-listed file, in filename order.
///
/// Entries that cannot be read (permissions, dangling symlinks) are reported
/// to stderr and skipped; they never abort the traversal.
pub fn collect_target_files(root: &Path, ignore_patterns: &[glob::Pattern]) -> Result<Vec<PathBuf>> {
  debug!("Scanning directory: {}", root.display());

  let mut files = Vec::new();
  let walk = WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|entry| !is_excluded_dir(entry));

  for entry in walk {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        eprintln!("Error reading directory entry: {e}");
        continue;
      }
    };

    if !entry.file_type().is_file() {
      continue;
    }

    let path = entry.into_path();
    if !is_target_file(&path) {
      continue;
    }
    if is_ignored(&path, root, ignore_patterns) {
      debug!("Ignoring {} (matched ignore pattern)", path.display());
      continue;
    }

    files.push(path);
  }

  debug!("Found {} matching files", files.len());

  Ok(files)
}

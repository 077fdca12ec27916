//! # addheader
//!
//! A tool that prepends a license/header comment block to source files in a
//! directory tree, skipping files that already carry it.
//!
//! `addheader` rewrites files in place. The header text is loaded once from
//! a user-supplied file, formatted per file type (line-oriented `#` comments
//! or block `/* ... */` comments), and prepended unless the file already
//! starts with it, so re-running the tool is a no-op.
//!
//! ## Features
//!
//! * Recursively scan a directory, excluding hidden directories and `build`
//! * Fixed allow-list of file types (Python, shell, CMake, C and C++)
//! * Idempotent: files already carrying the header are skipped
//! * Dry-run mode to report missing headers without modifying files
//! * Ignore patterns to exclude specific files or directories
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use addheader::header::render_for_path;
//! use addheader::updater::apply_header;
//!
//! fn main() -> anyhow::Result<()> {
//!     let raw_header = "Copyright 2026";
//!     let path = Path::new("src/main.cpp");
//!
//!     if let Some(block) = render_for_path(raw_header, path) {
//!         let outcome = apply_header(path, &block, false)?;
//!         println!("{outcome:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - Comment-style dispatch and header block formatting
//! * [`updater`] - In-place file rewriting with the idempotence check
//! * [`walker`] - Directory traversal and the file allow-list
//! * [`logging`] - Output-mode utilities for verbose/quiet runs

pub mod cli;
pub mod header;
pub mod logging;
pub mod output;
pub mod updater;
pub mod walker;

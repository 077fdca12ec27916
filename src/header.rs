//! # Header Module
//!
//! Turns raw header text into a comment block suited to a file's syntax
//! family. This is the only decision-making logic in the tool: a fixed
//! dispatch from file extension (or exact filename) to a [`CommentStyle`],
//! plus pure string formatting.
//!
//! Files outside the supported set resolve to no style at all, and the
//! caller skips them silently.

use std::path::Path;

/// Comment style families supported by the formatter.
///
/// Adding support for a new file type means adding its extension to
/// [`style_for_path`] and, if its comment syntax is new, a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
  /// Line-oriented `#` comments (Python, shell, CMake).
  Hash,
  /// Block `/* ... */` comments (C and C++ headers and sources).
  Block,
}

/// Resolves the comment style for a file, or `None` if the file type is
/// unsupported.
///
/// Exact filenames (currently just `CMakeLists.txt`) win over extensions.
pub fn style_for_path(path: &Path) -> Option<CommentStyle> {
  let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
  if file_name == "CMakeLists.txt" {
    return Some(CommentStyle::Hash);
  }

  let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
  match extension {
    "py" | "sh" | "cmake" | "template" => Some(CommentStyle::Hash),
    "h" | "hpp" | "cpp" | "c" | "cc" => Some(CommentStyle::Block),
    _ => None,
  }
}

/// Formats raw header text as a comment block in the given style.
///
/// The raw text is trimmed as a whole before splitting into lines. Lines
/// containing only whitespace become a bare comment marker. The block always
/// ends with one blank separator line.
///
/// Pure function: deterministic, no side effects.
pub fn format_header(raw_header: &str, style: CommentStyle) -> String {
  let lines = raw_header.trim().split('\n');

  match style {
    CommentStyle::Hash => {
      let body: Vec<String> = lines
        .map(|line| {
          if line.trim().is_empty() {
            "#".to_string()
          } else {
            format!("# {line}")
          }
        })
        .collect();
      format!("{}\n\n", body.join("\n"))
    }
    CommentStyle::Block => {
      let body: Vec<String> = lines
        .map(|line| {
          if line.trim().is_empty() {
            " *".to_string()
          } else {
            format!(" * {line}")
          }
        })
        .collect();
      format!("/*\n{}\n */\n\n", body.join("\n"))
    }
  }
}

/// Renders the header block for a specific file, or `None` if the file type
/// is unsupported.
pub fn render_for_path(raw_header: &str, path: &Path) -> Option<String> {
  style_for_path(path).map(|style| format_header(raw_header, style))
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_style_for_hash_extensions() {
    for name in ["setup.py", "run.sh", "toolchain.cmake", "config.h.template"] {
      assert_eq!(style_for_path(Path::new(name)), Some(CommentStyle::Hash), "{name}");
    }
  }

  #[test]
  fn test_style_for_block_extensions() {
    for name in ["engine.h", "matrix.hpp", "main.cpp", "vec.c", "particle.cc"] {
      assert_eq!(style_for_path(Path::new(name)), Some(CommentStyle::Block), "{name}");
    }
  }

  #[test]
  fn test_style_for_cmakelists_filename() {
    assert_eq!(
      style_for_path(Path::new("nested/dir/CMakeLists.txt")),
      Some(CommentStyle::Hash)
    );
  }

  #[test]
  fn test_style_for_unsupported_is_none() {
    assert_eq!(style_for_path(Path::new("README.md")), None);
    assert_eq!(style_for_path(Path::new("main.rs")), None);
    assert_eq!(style_for_path(Path::new("Makefile")), None);
    // Extension matching is exact, not case-insensitive
    assert_eq!(style_for_path(Path::new("MAIN.CPP")), None);
  }

  #[test]
  fn test_hash_format_single_line() {
    let block = format_header("Copyright 2026", CommentStyle::Hash);
    assert_eq!(block, "# Copyright 2026\n\n");
  }

  #[test]
  fn test_block_format_single_line() {
    let block = format_header("Copyright 2026", CommentStyle::Block);
    assert_eq!(block, "/*\n * Copyright 2026\n */\n\n");
  }

  #[test]
  fn test_hash_format_blank_lines_get_bare_marker() {
    let block = format_header("Line one\n\nLine two", CommentStyle::Hash);
    assert_eq!(block, "# Line one\n#\n# Line two\n\n");
  }

  #[test]
  fn test_block_format_blank_lines_get_bare_marker() {
    let block = format_header("Line one\n\nLine two", CommentStyle::Block);
    assert_eq!(block, "/*\n * Line one\n *\n * Line two\n */\n\n");
  }

  #[test]
  fn test_whitespace_only_lines_count_as_blank() {
    let block = format_header("a\n   \nb", CommentStyle::Hash);
    assert_eq!(block, "# a\n#\n# b\n\n");
  }

  #[test]
  fn test_surrounding_whitespace_is_trimmed() {
    let block = format_header("\n\nCopyright 2026\n\n", CommentStyle::Hash);
    assert_eq!(block, "# Copyright 2026\n\n");
  }

  #[test]
  fn test_render_for_path_dispatch() {
    let raw = "Copyright 2026";
    assert_eq!(
      render_for_path(raw, Path::new("main.cpp")).as_deref(),
      Some("/*\n * Copyright 2026\n */\n\n")
    );
    assert_eq!(
      render_for_path(raw, Path::new("setup.py")).as_deref(),
      Some("# Copyright 2026\n\n")
    );
    assert_eq!(render_for_path(raw, Path::new("notes.txt")), None);
  }
}

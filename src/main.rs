//! # addheader
//!
//! A tool that prepends a license/header comment block to source files.

use addheader::cli::{self, Cli};
use anyhow::Result;

fn main() -> Result<()> {
  let args = Cli::parse_args();

  cli::run(args)
}

//! Test-only helpers for config fixtures and in-process command runs.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;

use crate::cli::{Cli, Session, execute, render_text};

/// Write `contents` to `drills.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_config_fixture(contents: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("drills.toml");
    fs::write(&path, contents).expect("write config fixture");
    (temp, path)
}

/// Parse `args` (without the binary name) and run them in a default session.
///
/// Never reads a config file, so results do not depend on the working directory.
pub fn run_args(args: &[&str]) -> Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("drills").chain(args.iter().copied()))?;
    let mut session = Session::default();
    let value = execute(&cli.command, &mut session)?;
    Ok(render_text(&value))
}

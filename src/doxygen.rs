// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Launching the documentation tool.
//!
//! Doxygen is run with no arguments and reads the `Doxyfile` in its working
//! directory. The program can be replaced with `--doxygen PATH` or the
//! `DOXYGEN` environment variable.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Program name used when nothing else is configured (looked up on PATH).
pub const DEFAULT_PROGRAM: &str = "doxygen";

/// Environment variable naming the documentation tool.
pub const PROGRAM_ENV: &str = "DOXYGEN";

/// Configuration file the tool looks for in its working directory.
pub const CONFIG_FILE: &str = "Doxyfile";

/// Pick the program: explicit path, then `$DOXYGEN`, then `doxygen`.
pub fn resolve_program(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(PROGRAM_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_PROGRAM),
    }
}

/// True if `dir` holds a `Doxyfile`.
pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file()
}

/// Run `program` with no arguments in `working_dir` and wait for it.
///
/// Failing to launch is an error; the exit status is returned as-is for the
/// caller to report.
pub fn run(program: &Path, working_dir: &Path) -> Result<ExitStatus> {
    Command::new(program)
        .current_dir(working_dir)
        .status()
        .with_context(|| {
            format!(
                "failed to launch {} in {}",
                program.display(),
                working_dir.display()
            )
        })
}

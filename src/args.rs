// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Standard argument handling shared by both doxyreq tools
//!
//! Every option has a default, so running a tool with no arguments from its
//! conventional directory reproduces the fixed behavior of that tool.

use crate::driver::{DriverConfig, Variant};
use crate::doxygen;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

/// Options common to all doxyreq tools
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Directory holding the .cpp/.hpp sources (default depends on the tool)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory receiving the rewritten copies (default depends on the tool)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Documentation tool to run (default: $DOXYGEN, then doxygen on PATH)
    #[arg(long, value_name = "PATH")]
    pub doxygen: Option<PathBuf>,

    /// Show what would be rewritten; write nothing and do not run doxygen
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print every annotated line
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write console output to FILE
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl CommonArgs {
    /// Build a driver configuration, resolving relative paths against `base`.
    pub fn to_config(&self, variant: Variant, base: &Path) -> DriverConfig {
        let source = resolve(base, self.source.as_deref(), variant.default_source_dir());
        let staging = resolve(base, self.staging.as_deref(), variant.default_staging_dir());
        let program = doxygen::resolve_program(self.doxygen.as_deref());

        let mut config = DriverConfig::new(variant, source, staging, program);
        if variant == Variant::RunDoxygen {
            // Doxygen runs where the tool was invoked, next to the Doxyfile,
            // wherever the staging directory was moved to.
            config.tool_dir = base.to_path_buf();
        }
        config.dry_run = self.dry_run;
        config.verbose = self.verbose;
        config.quiet = self.json;
        config
    }

    /// Same as [`to_config`](Self::to_config) relative to the current directory.
    pub fn to_config_here(&self, variant: Variant) -> Result<DriverConfig> {
        let current_dir = std::env::current_dir()?;
        Ok(self.to_config(variant, &current_dir))
    }
}

fn resolve(base: &Path, given: Option<&Path>, default: &str) -> PathBuf {
    match given {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => base.join(path),
        None => base.join(default),
    }
}

/// Format a count with comma separators, e.g. 156036 -> "156,036"
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

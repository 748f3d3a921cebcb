// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Stage annotated copies of a source directory and run doxygen on them.
//!
//! A run has four steps:
//! 1. Find the `.cpp`/`.hpp` files directly in the source directory
//! 2. Ensure the staging directory exists and write a rewritten copy of each
//! 3. Run the documentation tool with no arguments in the tool directory
//! 4. Remove the staging directory, for variants that clean up
//!
//! All paths are explicit; the process working directory never changes.

use crate::args::format_number;
use crate::rewrite::{self, RewriteOutcome};
use crate::{doxygen, elog, log, sources, staging};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The two tool layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Run from the source directory; stage into `docs/` and run doxygen there.
    MakeDocs,
    /// Run from `docs/`; stage `../src` into `src/`, run doxygen, remove `src/`.
    RunDoxygen,
}

impl Variant {
    pub fn tool_name(self) -> &'static str {
        match self {
            Variant::MakeDocs => "doxyreq-make-docs",
            Variant::RunDoxygen => "doxyreq-run-doxygen",
        }
    }

    pub fn default_source_dir(self) -> &'static str {
        match self {
            Variant::MakeDocs => ".",
            Variant::RunDoxygen => "../src",
        }
    }

    pub fn default_staging_dir(self) -> &'static str {
        match self {
            Variant::MakeDocs => "docs",
            Variant::RunDoxygen => "src",
        }
    }

    /// Whether the staging directory is removed after doxygen returns.
    pub fn removes_staging(self) -> bool {
        matches!(self, Variant::RunDoxygen)
    }
}

/// Everything a run needs, with absolute or caller-relative paths
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub variant: Variant,
    pub source_dir: PathBuf,
    pub staging_dir: PathBuf,
    /// Working directory for the documentation tool
    pub tool_dir: PathBuf,
    pub program: PathBuf,
    pub cleanup: bool,
    pub dry_run: bool,
    pub verbose: bool,
    /// Suppress per-file console output
    pub quiet: bool,
}

impl DriverConfig {
    /// Configuration with the variant's tool directory and cleanup rule.
    ///
    /// `make-docs` runs doxygen inside the staging directory. `run-doxygen`
    /// defaults to the parent of the staging directory, which is the
    /// invocation directory for the default `src/` layout; callers that know
    /// the invocation directory set `tool_dir` to it.
    pub fn new(variant: Variant, source_dir: PathBuf, staging_dir: PathBuf, program: PathBuf) -> Self {
        let tool_dir = match variant {
            Variant::MakeDocs => staging_dir.clone(),
            Variant::RunDoxygen => staging_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        Self {
            variant,
            source_dir,
            staging_dir,
            tool_dir,
            program,
            cleanup: variant.removes_staging(),
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }
}

/// One staged file
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub lines: usize,
    pub annotated: usize,
}

/// How the documentation tool finished
#[derive(Debug, Clone, Serialize)]
pub struct ToolRun {
    pub program: PathBuf,
    pub working_dir: PathBuf,
    /// None when the tool was killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Report of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub variant: Variant,
    pub source_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileSummary>,
    pub lines: usize,
    pub annotated: usize,
    pub tool: Option<ToolRun>,
    pub staging_removed: bool,
}

impl RunSummary {
    fn new(config: &DriverConfig) -> Self {
        Self {
            variant: config.variant,
            source_dir: config.source_dir.clone(),
            staging_dir: config.staging_dir.clone(),
            dry_run: config.dry_run,
            files: Vec::new(),
            lines: 0,
            annotated: 0,
            tool: None,
            staging_removed: false,
        }
    }

    fn record(&mut self, outcome: &RewriteOutcome) {
        self.lines += outcome.rewrite.lines;
        self.annotated += outcome.rewrite.annotated;
        self.files.push(FileSummary {
            source: outcome.source.clone(),
            destination: outcome.destination.clone(),
            lines: outcome.rewrite.lines,
            annotated: outcome.rewrite.annotated,
        });
    }
}

/// True if `inner` is `outer` or lies somewhere below it. Both must exist.
fn contains_dir(outer: &Path, inner: &Path) -> bool {
    match (outer.canonicalize(), inner.canonicalize()) {
        (Ok(outer), Ok(inner)) => inner.starts_with(outer),
        _ => false,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run one full stage-and-document pass.
pub fn run(config: &DriverConfig) -> Result<RunSummary> {
    let mut summary = RunSummary::new(config);

    let files = sources::find_source_files(&config.source_dir)?;
    if !config.quiet {
        log!(
            "Scanning {} files in {}...",
            format_number(files.len()),
            config.source_dir.display()
        );
        log!("");
    }

    if !config.dry_run {
        staging::ensure_dir(&config.staging_dir)?;
    }
    if contains_dir(&config.staging_dir, &config.source_dir) {
        anyhow::bail!(
            "Staging directory {} contains the source directory {}",
            config.staging_dir.display(),
            config.source_dir.display()
        );
    }

    for file in &files {
        let outcome = if config.dry_run {
            rewrite::preview_file(file, &config.staging_dir)?
        } else {
            rewrite::rewrite_file(file, &config.staging_dir)?
        };

        if !config.quiet {
            report_file(&outcome, config);
        }
        summary.record(&outcome);
    }

    if config.dry_run {
        return Ok(summary);
    }

    if !doxygen::has_config(&config.tool_dir) {
        elog!(
            "Warning: no {} in {}",
            doxygen::CONFIG_FILE,
            config.tool_dir.display()
        );
    }

    if !config.quiet {
        log!("");
        log!("Running {} in {}", config.program.display(), config.tool_dir.display());
    }
    let status = doxygen::run(&config.program, &config.tool_dir)?;
    if !status.success() {
        elog!("Warning: {} exited with {}", config.program.display(), status);
    }
    summary.tool = Some(ToolRun {
        program: config.program.clone(),
        working_dir: config.tool_dir.clone(),
        exit_code: status.code(),
        success: status.success(),
    });

    if config.cleanup {
        staging::remove_dir(&config.staging_dir)?;
        summary.staging_removed = true;
    }

    Ok(summary)
}

fn report_file(outcome: &RewriteOutcome, config: &DriverConfig) {
    let rewrite = &outcome.rewrite;
    if config.dry_run {
        log!(
            "  {} -> {}: {} of {} lines would be annotated",
            display_name(&outcome.source),
            outcome.destination.display(),
            rewrite.annotated,
            format_number(rewrite.lines)
        );
    } else {
        log!(
            "  {}: {} of {} lines annotated",
            display_name(&outcome.source),
            rewrite.annotated,
            format_number(rewrite.lines)
        );
    }

    if config.verbose && rewrite.annotated > 0 {
        let lines: Vec<&str> = rewrite.text.split_inclusive('\n').collect();
        for &idx in &rewrite.annotated_lines {
            if let Some(line) = lines.get(idx) {
                log!("    Line {}: {}", idx + 1, line.trim_end());
            }
        }
    }
}

/// Print the tool title and mode.
pub fn print_banner(title: &str, config: &DriverConfig) {
    log!("{title}");
    log!("{}", "=".repeat(title.len()));
    log!("");
    if config.dry_run {
        log!("Mode: DRY RUN (nothing written, doxygen not run)");
    } else if config.cleanup {
        log!("Mode: STAGE, RUN DOXYGEN, REMOVE STAGING");
    } else {
        log!("Mode: STAGE AND RUN DOXYGEN");
    }
    log!("");
}

/// Print the closing report, as text or JSON.
pub fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    log!("");
    log!("Summary");
    log!("-------");
    log!("Files staged:     {}", format_number(summary.files.len()));
    log!("Lines copied:     {}", format_number(summary.lines));
    log!("Lines annotated:  {}", format_number(summary.annotated));
    match &summary.tool {
        Some(tool) => {
            let status = match tool.exit_code {
                Some(code) => code.to_string(),
                None => "killed by signal".to_string(),
            };
            log!("Doxygen exit:     {status}");
        }
        None => log!("Doxygen exit:     not run"),
    }
    if summary.staging_removed {
        log!("Staging removed:  {}", summary.staging_dir.display());
    } else if !summary.dry_run {
        log!("Staging kept:     {}", summary.staging_dir.display());
    }

    if summary.dry_run && summary.annotated > 0 {
        log!("");
        log!("Run without --dry-run to stage files and run doxygen.");
    }
    Ok(())
}

// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Requires-clause annotation for Doxygen.
//!
//! A C++ line whose first token is a bare `requires` is invisible to Doxygen.
//! Prefixing it with `///@requires ` turns it into a doc comment that Doxygen
//! files under the `@requires` section, while the original text stays on the
//! line. Lines already inside a comment are left alone.
//!
//! The transform is line preserving: output has the same lines, in the same
//! order, with the same terminators.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix written in front of an uncommented `requires` line.
pub const REQUIRES_PREFIX: &str = "///@requires ";

/// Keyword that must be the first token of a line for it to be annotated.
pub const REQUIRES_KEYWORD: &str = "requires";

/// Substrings that mark a line as already commented.
pub const COMMENT_MARKERS: [&str; 2] = ["///", "//"];

/// How a single line is treated by the rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// First token is not `requires`
    Plain,
    /// First token is `requires` but the line already has a comment marker
    Commented,
    /// Bare `requires` line that gets the prefix
    Annotated,
}

/// Result of rewriting a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub lines: usize,
    pub annotated: usize,
    /// Zero-based indices of the annotated lines
    pub annotated_lines: Vec<usize>,
}

/// Result of rewriting one file into a staging directory
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rewrite: Rewrite,
}

/// First token of a line after stripping, splitting on single spaces.
fn first_token(line: &str) -> &str {
    line.trim().split(' ').next().unwrap_or("")
}

fn has_comment_marker(line: &str) -> bool {
    COMMENT_MARKERS.iter().any(|marker| line.contains(marker))
}

pub fn classify_line(line: &str) -> LineKind {
    if first_token(line) != REQUIRES_KEYWORD {
        LineKind::Plain
    } else if has_comment_marker(line) {
        LineKind::Commented
    } else {
        LineKind::Annotated
    }
}

/// Rewrite one line (terminator included, if any).
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
    match classify_line(line) {
        LineKind::Annotated => Cow::Owned(format!("{REQUIRES_PREFIX}{line}")),
        LineKind::Plain | LineKind::Commented => Cow::Borrowed(line),
    }
}

/// Rewrite every line of `source`.
///
/// Lines are split after each `\n`, so `\r\n` endings and a missing final
/// newline survive unchanged.
pub fn rewrite_source(source: &str) -> Rewrite {
    let mut text = String::with_capacity(source.len());
    let mut lines = 0;
    let mut annotated_lines = Vec::new();

    for (idx, line) in source.split_inclusive('\n').enumerate() {
        lines += 1;
        let new_line = rewrite_line(line);
        if matches!(new_line, Cow::Owned(_)) {
            annotated_lines.push(idx);
        }
        text.push_str(&new_line);
    }

    Rewrite {
        text,
        lines,
        annotated: annotated_lines.len(),
        annotated_lines,
    }
}

/// Where `source` lands inside `out_dir` (base name only).
pub fn destination_for(source: &Path, out_dir: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .with_context(|| format!("no file name in {}", source.display()))?;
    Ok(out_dir.join(name))
}

/// Compute the rewrite of `source` without writing anything.
pub fn preview_file(source: &Path, out_dir: &Path) -> Result<RewriteOutcome> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    Ok(RewriteOutcome {
        source: source.to_path_buf(),
        destination: destination_for(source, out_dir)?,
        rewrite: rewrite_source(&content),
    })
}

/// Rewrite `source` into `out_dir`, keeping its base name.
///
/// The whole file is read before the copy is written. An existing copy is
/// overwritten.
pub fn rewrite_file(source: &Path, out_dir: &Path) -> Result<RewriteOutcome> {
    let outcome = preview_file(source, out_dir)?;
    fs::write(&outcome.destination, &outcome.rewrite.text)
        .with_context(|| format!("failed to write {}", outcome.destination.display()))?;
    Ok(outcome)
}

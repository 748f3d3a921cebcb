// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Staging directory lifecycle

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Make sure `dir` exists. An existing directory is success.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create staging directory {}", dir.display()))
}

/// Remove `dir` and everything in it. A missing directory is success.
pub fn remove_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    fs::remove_dir_all(dir)
        .with_context(|| format!("failed to remove staging directory {}", dir.display()))
}

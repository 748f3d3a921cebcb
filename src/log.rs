// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Console output teed into an optional log file.
//!
//! Every tool prints through [`log!`](crate::log!). When `--log FILE` is given,
//! [`init_log`] opens the file and the same lines are appended there.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[doc(hidden)]
pub static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Open `path` for logging and write the run header.
///
/// Parent directories are created as needed. The file is truncated so each run
/// starts with a fresh log.
pub fn init_log(path: &Path, tool: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    writeln!(file, "{tool}")?;
    writeln!(file, "Started: {}", chrono::Local::now())?;
    writeln!(file)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    Ok(path.to_path_buf())
}

/// Append one line to the log file, if one is open.
#[doc(hidden)]
pub fn write_line(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = writeln!(file, "{msg}");
        }
    }
}

/// Print a line to stdout and to the log file.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("{}", msg);
        $crate::log::write_line(&msg);
    }};
}

/// Print a line to stderr and to the log file.
#[macro_export]
macro_rules! elog {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        eprintln!("{}", msg);
        $crate::log::write_line(&msg);
    }};
}

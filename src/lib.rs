// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Doxyreq - Doxygen preprocessing for C++ sources
//!
//! Copies `.cpp`/`.hpp` files into a staging directory, annotating bare
//! `requires` clauses with `///@requires` so Doxygen documents them, then
//! runs doxygen on the staged copies.

pub mod args;
pub mod doxygen;
pub mod driver;
pub mod log;
pub mod rewrite;
pub mod sources;
pub mod staging;

// Re-export commonly used items
pub use args::{format_number, CommonArgs};
pub use driver::{DriverConfig, RunSummary, Variant};
pub use rewrite::{rewrite_file, rewrite_line, rewrite_source, REQUIRES_PREFIX};
pub use sources::{find_source_files, is_source_file};

// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Make docs: stage annotated sources into docs/ and run doxygen there
//!
//! Run from the source directory. Every .cpp/.hpp file is copied into docs/
//! with bare `requires` lines prefixed by `///@requires `, then doxygen runs
//! inside docs/ using the Doxyfile found there. The staged copies are kept.
//!
//! Usage:
//!   doxyreq-make-docs                     # Stage ./ into ./docs, run doxygen
//!   doxyreq-make-docs -n -v               # Show what would be annotated
//!   doxyreq-make-docs -s src -o build/doc # Custom directories
//!
//! Binary: doxyreq-make-docs

use anyhow::Result;
use clap::Parser;
use doxyreq::{driver, log, log::init_log, CommonArgs, Variant};

#[derive(Parser)]
#[command(name = "doxyreq-make-docs")]
#[command(about = "Stage annotated C++ sources into docs/ and run doxygen there")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = Variant::MakeDocs;

    if let Some(ref path) = args.common.log {
        let log_path = init_log(path, variant.tool_name())?;
        if !args.common.json {
            log!("Logging to: {}", log_path.display());
        }
    }

    let config = args.common.to_config_here(variant)?;

    if !args.common.json {
        driver::print_banner("Doxygen Requires Annotation", &config);
    }

    let summary = driver::run(&config)?;
    driver::print_summary(&summary, args.common.json)
}

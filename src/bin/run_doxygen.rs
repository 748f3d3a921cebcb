// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Run doxygen: stage ../src into src/, run doxygen, remove src/
//!
//! Run from the docs directory, next to the Doxyfile. The .cpp/.hpp files of
//! ../src are copied into a temporary src/ with bare `requires` lines
//! annotated, doxygen runs in the current directory, and src/ is removed once
//! it returns.
//!
//! Usage:
//!   doxyreq-run-doxygen                   # Stage, document, clean up
//!   doxyreq-run-doxygen --keep-staging    # Leave src/ for inspection
//!   doxyreq-run-doxygen --json            # Machine-readable summary
//!
//! Binary: doxyreq-run-doxygen

use anyhow::Result;
use clap::Parser;
use doxyreq::{driver, log, log::init_log, CommonArgs, Variant};

#[derive(Parser)]
#[command(name = "doxyreq-run-doxygen")]
#[command(about = "Stage annotated ../src into src/, run doxygen, then remove src/")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Leave the staging directory in place after doxygen returns
    #[arg(long)]
    keep_staging: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = Variant::RunDoxygen;

    if let Some(ref path) = args.common.log {
        let log_path = init_log(path, variant.tool_name())?;
        if !args.common.json {
            log!("Logging to: {}", log_path.display());
        }
    }

    let mut config = args.common.to_config_here(variant)?;
    if args.keep_staging {
        config.cleanup = false;
    }

    if !args.common.json {
        driver::print_banner("Doxygen Requires Annotation", &config);
    }

    let summary = driver::run(&config)?;
    driver::print_summary(&summary, args.common.json)
}

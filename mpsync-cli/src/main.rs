// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Sync a local directory with a MicroPython board through mpremote.
//!
//! Usage:
//!   mpsync upload_path --path ./app
//!   mpsync upload_path --path ./app --force_upload
//!   mpsync --device /dev/ttyUSB0 list_files
//!   mpsync soft_reset

mod cli;
mod commands;
mod logging;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init_logging(&args.log_level);
    cli::run(args)
}

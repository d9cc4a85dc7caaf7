// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::commands;
use crate::transport::{MpremoteTransport, DEFAULT_TOOL};

const SEPARATOR: &str = "===================================================================";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "mpsync")]
#[command(about = "Manage files and sessions on a MicroPython board using mpremote")]
pub struct Cli {
    /// Device tool to invoke
    #[arg(long, env = "MPSYNC_TOOL", default_value = DEFAULT_TOOL, global = true)]
    pub tool: String,

    /// Device to connect to (e.g., /dev/ttyUSB0); mpremote picks one if unset
    #[arg(short, long, env = "MPSYNC_DEVICE", global = true)]
    pub device: Option<String>,

    /// Log filter for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long, env = "MPSYNC_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Local directory to upload (required for upload_path)
    #[arg(long, value_name = "DIR", global = true)]
    pub path: Option<PathBuf>,

    /// Upload all files regardless of modification time
    #[arg(long = "force_upload", alias = "force-upload", global = true)]
    pub force_upload: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
#[command(rename_all = "snake_case")]
pub enum Commands {
    /// Delete every file on the device
    DeleteAll,

    /// Upload files under --path modified since the last upload
    UploadPath,

    /// Soft reset the device
    SoftReset,

    /// Open an interactive REPL on the device
    Terminal,

    /// Recursively list files on the device
    ListFiles,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    if cli.command == Commands::UploadPath && cli.path.is_none() {
        bail!("--path <DIR> is required for upload_path");
    }

    let mut transport = MpremoteTransport::new(cli.tool, cli.device);

    println!("\n{}\n", SEPARATOR);

    match cli.command {
        Commands::DeleteAll => commands::delete_all(&mut transport)?,
        Commands::UploadPath => {
            let path = cli.path.context("--path <DIR> is required for upload_path")?;
            commands::upload_path(&mut transport, &path, cli.force_upload)?
        }
        Commands::SoftReset => commands::soft_reset(&mut transport)?,
        Commands::Terminal => commands::terminal(&mut transport)?,
        Commands::ListFiles => commands::list_files(&mut transport)?,
    }

    println!("\n{}\n", SEPARATOR);
    Ok(())
}

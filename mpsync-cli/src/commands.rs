// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations: console output around the sync operations.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use mpsync_common::sync::{self, UploadOutcome};
use mpsync_common::{MarkerStore, Transport};

/// Remove every file on the device.
pub fn delete_all(transport: &mut impl Transport) -> Result<()> {
    println!("Deleting all files on device...");
    sync::delete_all(transport).context("Failed to delete files on device")?;
    println!("All files removed from device.");
    Ok(())
}

/// Upload files under `path` modified since the last upload.
pub fn upload_path(transport: &mut impl Transport, path: &Path, force: bool) -> Result<()> {
    let markers = MarkerStore::default();
    let plan = sync::plan_upload(&markers, path, force)
        .with_context(|| format!("Cannot upload {}", path.display()))?;

    println!("Scanning for modified files in '{}'...", plan.root.display());
    println!();

    if plan.is_empty() {
        println!("No files were modified since the last upload.");
        return Ok(());
    }

    let pb = ProgressBar::new(plan.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files",
            )?
            .progress_chars("#>-"),
    );

    let result = sync::execute_plan(transport, &markers, &plan, |candidate| {
        pb.suspend(|| println!("Uploaded: {}", candidate.relative));
        pb.inc(1);
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            pb.abandon();
            return Err(err).context("Upload aborted");
        }
    };
    pb.finish_and_clear();

    if let UploadOutcome::Uploaded { files, .. } = outcome {
        println!();
        println!("Upload complete ({} files).", files);
    }
    Ok(())
}

/// Soft reset the device.
pub fn soft_reset(transport: &mut impl Transport) -> Result<()> {
    println!("Performing soft reset on device...");
    sync::soft_reset(transport).context("Soft reset failed")?;
    println!("Soft reset sent.");
    Ok(())
}

/// Hand the terminal over to the device REPL.
pub fn terminal(transport: &mut impl Transport) -> Result<()> {
    println!("Opening REPL terminal. Press Ctrl-D to exit.");
    sync::terminal(transport).context("REPL session failed")?;
    Ok(())
}

/// Print the device filesystem, one block per directory.
pub fn list_files(transport: &mut impl Transport) -> Result<()> {
    let tree = sync::list_files(transport).context("Failed to list files on device")?;
    match tree {
        Some(tree) => {
            print!("{}", tree.render());
            println!();
            println!("{} files in {} directories.", tree.file_count(), tree.dir_count());
        }
        None => println!("No files found on device."),
    }
    Ok(())
}

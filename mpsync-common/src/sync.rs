// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Device operations: delete, upload, reset, terminal and listing.
//!
//! These functions never print; the caller reports progress through the
//! returned values and callbacks.

use std::path::Path;

use crate::error::Result;
use crate::listing::RemoteDir;
use crate::marker::MarkerStore;
use crate::protocol::{remote_path, Request, DEVICE_ROOT};
use crate::scan::{Candidate, UploadPlan};
use crate::transport::{invoke, Policy, Transport};

/// Result of an upload run.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// No file changed since the last upload; the device was not contacted.
    NothingToDo,
    /// Files were copied and the marker moved forward.
    Uploaded { files: usize, marker: f64 },
}

/// Recursively remove everything on the device.
pub fn delete_all<T: Transport + ?Sized>(transport: &mut T) -> Result<()> {
    invoke(
        transport,
        &Request::RemoveAll {
            path: DEVICE_ROOT.to_string(),
        },
        Policy::Fatal,
    )?;
    Ok(())
}

/// Soft reset the device.
pub fn soft_reset<T: Transport + ?Sized>(transport: &mut T) -> Result<()> {
    invoke(transport, &Request::Reset, Policy::Fatal)?;
    Ok(())
}

/// Attach an interactive REPL; blocks until the user leaves it.
pub fn terminal<T: Transport + ?Sized>(transport: &mut T) -> Result<()> {
    invoke(transport, &Request::Repl, Policy::Fatal)?;
    Ok(())
}

/// List the whole device filesystem, `None` if the device is empty.
///
/// Fails if the device root itself cannot be listed.
pub fn list_files<T: Transport + ?Sized>(transport: &mut T) -> Result<Option<RemoteDir>> {
    RemoteDir::fetch(transport, DEVICE_ROOT)
}

/// Scan `root` for files to upload without touching the device.
pub fn plan_upload(markers: &MarkerStore, root: &Path, force: bool) -> Result<UploadPlan> {
    let root = UploadPlan::resolve_root(root)?;
    let last_upload = markers.load(&root)?;
    let mut plan = UploadPlan::scan(&root, last_upload, force)?;
    plan.files.retain(|candidate| candidate.relative != markers.file_name());
    Ok(plan)
}

/// Upload files under `root` that changed since the last upload.
///
/// Directories are created best-effort (they may already exist); any failed
/// copy aborts the run and leaves the marker untouched. `on_copied` is called
/// after each successful copy.
pub fn upload_path<T, F>(
    transport: &mut T,
    markers: &MarkerStore,
    root: &Path,
    force: bool,
    on_copied: F,
) -> Result<UploadOutcome>
where
    T: Transport + ?Sized,
    F: FnMut(&Candidate),
{
    let plan = plan_upload(markers, root, force)?;
    execute_plan(transport, markers, &plan, on_copied)
}

/// Send a previously computed plan to the device.
pub fn execute_plan<T, F>(
    transport: &mut T,
    markers: &MarkerStore,
    plan: &UploadPlan,
    mut on_copied: F,
) -> Result<UploadOutcome>
where
    T: Transport + ?Sized,
    F: FnMut(&Candidate),
{
    if plan.is_empty() {
        return Ok(UploadOutcome::NothingToDo);
    }

    for dir in plan.dirs() {
        let request = Request::MakeDir {
            path: remote_path(&dir),
        };
        invoke(transport, &request, Policy::BestEffort)?;
    }

    for candidate in &plan.files {
        let request = Request::Copy {
            local: candidate.local.clone(),
            remote: remote_path(&candidate.relative),
        };
        invoke(transport, &request, Policy::Fatal)?;
        tracing::info!(file = %candidate.relative, "uploaded");
        on_copied(candidate);
    }

    let marker = markers.touch(&plan.root)?;

    Ok(UploadOutcome::Uploaded {
        files: plan.len(),
        marker,
    })
}

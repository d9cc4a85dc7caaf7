// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Remote directory tree built from recursive `fs ls` requests.

use std::fmt::Write;

use crate::error::{Result, SyncError};
use crate::protocol::{join_remote, parse_listing, Request};
use crate::transport::{invoke, Policy, Transport};

/// One remote directory with its files and (listable) subdirectories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDir {
    pub path: String,
    pub files: Vec<String>,
    pub subdirs: Vec<RemoteDir>,
}

impl RemoteDir {
    /// List `path` and everything below it.
    ///
    /// Returns `Ok(None)` when `path` has no entries. A failure on `path`
    /// itself is returned as an error; a failing subdirectory is reported
    /// and only prunes that branch, unless the tool could not be started.
    pub fn fetch<T: Transport + ?Sized>(
        transport: &mut T,
        path: &str,
    ) -> Result<Option<RemoteDir>> {
        let request = Request::List {
            path: path.to_string(),
        };
        let output = invoke(transport, &request, Policy::Fatal)?.unwrap_or_default();

        let listing = parse_listing(&output);
        if listing.is_empty() {
            return Ok(None);
        }

        let mut subdirs = Vec::with_capacity(listing.subdirs.len());
        for name in &listing.subdirs {
            let child = join_remote(path, name);
            match RemoteDir::fetch(&mut *transport, &child) {
                Ok(Some(dir)) => subdirs.push(dir),
                Ok(None) => {}
                Err(err @ SyncError::ToolUnavailable { .. }) => return Err(err),
                Err(err) => {
                    tracing::warn!(path = %child, error = %err, "listing failed, skipping branch");
                }
            }
        }

        Ok(Some(RemoteDir {
            path: path.to_string(),
            files: listing.files,
            subdirs,
        }))
    }

    /// Number of files in this directory and below.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.subdirs.iter().map(RemoteDir::file_count).sum::<usize>()
    }

    /// Number of directories in the tree, including this one.
    pub fn dir_count(&self) -> usize {
        1 + self.subdirs.iter().map(RemoteDir::dir_count).sum::<usize>()
    }

    /// Render the tree, one block per directory in pre-order.
    ///
    /// Each block is a blank line, the directory path with a trailing `/`,
    /// then its files indented past the directory name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        let base = self.path.trim_end_matches('/');
        let indent = " ".repeat(base.len() + 1);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}/", base);
        for file in &self.files {
            let _ = writeln!(out, "{}{}", indent, file);
        }

        for dir in &self.subdirs {
            dir.render_into(out);
        }
    }
}

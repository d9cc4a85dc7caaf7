// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Local scan: which files an upload has to send.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SyncError};
use crate::marker::epoch_secs;
use crate::protocol::MARKER_FILE_NAME;

/// File name suffixes that are never uploaded.
pub const IGNORED_SUFFIXES: &[&str] = &[
    ".txt",
    ".md",
    ".pyc",
    ".log",
    ".bak",
    ".bat",
    ".sh",
    ".ini",
    ".cfg",
    ".config",
    ".DS_Store",
    ".git",
    ".gitignore",
    ".gitattributes",
    ".pdf",
    ".docx",
    ".xlsx",
    ".pptx",
    ".zip",
    ".tar",
    ".tar.gz",
    ".rar",
];

/// True if a file (or directory) with this name is excluded from sync.
pub fn is_ignored(file_name: &str) -> bool {
    file_name == MARKER_FILE_NAME
        || IGNORED_SUFFIXES
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
}

/// A local file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute (or root-joined) local path.
    pub local: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative: String,
}

impl Candidate {
    /// Relative parent directory, `None` for files at the top of the root.
    pub fn parent(&self) -> Option<&str> {
        self.relative.rsplit_once('/').map(|(dir, _)| dir)
    }
}

/// Files to upload from one root, in relative path order.
#[derive(Debug, Clone, Default)]
pub struct UploadPlan {
    pub root: PathBuf,
    pub files: Vec<Candidate>,
}

impl UploadPlan {
    /// Check that `root` is a directory and return its canonical form.
    pub fn resolve_root(root: &Path) -> Result<PathBuf> {
        if !root.is_dir() {
            return Err(SyncError::InvalidInput(format!(
                "directory not found at {}",
                root.display()
            )));
        }
        root.canonicalize().map_err(|e| SyncError::io(root, e))
    }

    /// Walk `root` and select files modified after `last_upload`, or every
    /// file when `force` is set.
    ///
    /// Symlinks to files are uploaded as regular files; symlinked
    /// directories are not descended into.
    pub fn scan(root: &Path, last_upload: f64, force: bool) -> Result<Self> {
        let root = Self::resolve_root(root)?;
        let mut files = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_ignored_entry(e));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&root, e))?;
            let is_file = if entry.path_is_symlink() {
                entry.path().is_file()
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                continue;
            }

            if !force {
                let modified = fs::metadata(entry.path())
                    .and_then(|meta| meta.modified())
                    .map_err(|e| SyncError::io(entry.path(), e))?;
                if epoch_secs(modified) <= last_upload {
                    continue;
                }
            }

            let Some(relative) = relative_posix(&root, entry.path()) else {
                tracing::warn!(
                    path = %entry.path().display(),
                    "skipping file with a non UTF-8 name"
                );
                continue;
            };
            files.push(Candidate {
                local: entry.into_path(),
                relative,
            });
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        tracing::debug!(root = %root.display(), count = files.len(), force, "scan complete");

        Ok(Self { root, files })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Relative directories that must exist on the device, each once.
    ///
    /// Includes every ancestor of every candidate (the device's mkdir is not
    /// recursive), ordered so a parent always precedes its children.
    pub fn dirs(&self) -> Vec<String> {
        let mut dirs = BTreeSet::new();
        for file in &self.files {
            let mut current = file.parent();
            while let Some(dir) = current {
                if !dirs.insert(dir.to_string()) {
                    break;
                }
                current = dir.rsplit_once('/').map(|(parent, _)| parent);
            }
        }
        dirs.into_iter().collect()
    }
}

fn is_ignored_entry(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map_or(false, is_ignored)
}

fn relative_posix(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    Some(parts?.join("/"))
}

fn walk_error(root: &Path, err: walkdir::Error) -> SyncError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
    SyncError::io(path, source)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload marker store.
//!
//! One timestamp per synchronized root, kept as text (fractional epoch
//! seconds) in a sentinel file at the top of that root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, SyncError};
use crate::protocol::MARKER_FILE_NAME;

/// Marker store keyed by root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStore {
    file_name: String,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new(MARKER_FILE_NAME)
    }
}

impl MarkerStore {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Location of the marker for `root`.
    pub fn path_for(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }

    /// Last upload time for `root`, or `0.0` if it was never uploaded.
    pub fn load(&self, root: &Path) -> Result<f64> {
        let path = self.path_for(root);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0.0),
            Err(e) => return Err(SyncError::io(path, e)),
        };

        contents
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|ts| ts.is_finite())
            .ok_or(SyncError::MarkerCorrupt { path, contents })
    }

    /// Overwrite the marker for `root`.
    pub fn save(&self, root: &Path, timestamp: f64) -> Result<()> {
        let path = self.path_for(root);
        fs::write(&path, timestamp.to_string()).map_err(|e| SyncError::io(path, e))
    }

    /// Store the current time for `root` and return it.
    pub fn touch(&self, root: &Path) -> Result<f64> {
        let now = now_epoch();
        self.save(root, now)?;
        Ok(now)
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn now_epoch() -> f64 {
    epoch_secs(SystemTime::now())
}

/// Convert a `SystemTime` to fractional epoch seconds (pre-epoch clamps to 0).
pub fn epoch_secs(time: SystemTime) -> f64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

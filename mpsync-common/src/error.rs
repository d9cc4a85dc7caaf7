// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types shared by all operations.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The device tool ran but exited with a failure status.
    #[error("device command failed ({status}): {command}{}", stderr_suffix(.stderr))]
    ToolFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The device tool could not be started at all.
    #[error("failed to run '{program}': {source}")]
    ToolUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload marker {} is corrupt: {contents:?}", .path.display())]
    MarkerCorrupt { path: PathBuf, contents: String },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures reported by (or while starting) the device tool.
    pub fn is_tool_failure(&self) -> bool {
        matches!(
            self,
            SyncError::ToolFailed { .. } | SyncError::ToolUnavailable { .. }
        )
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use filetime::FileTime;

use mpsync_common::{Request, Result, SyncError, Transport};

/// Transport that records every request and answers from canned replies.
#[derive(Default)]
pub struct RecordingTransport {
    pub requests: Vec<Request>,
    /// `fs ls` output per remote path; unknown paths fail.
    pub listings: HashMap<String, String>,
    /// Requests that should fail.
    pub failing: Vec<Request>,
    /// Behave as if the tool is not installed.
    pub unavailable: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, path: &str, output: &str) -> Self {
        self.listings.insert(path.to_string(), output.to_string());
        self
    }

    pub fn failing_on(mut self, request: Request) -> Self {
        self.failing.push(request);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn mkdirs(&self) -> Vec<String> {
        self.requests
            .iter()
            .filter_map(|r| match r {
                Request::MakeDir { path } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn copies(&self) -> Vec<String> {
        self.requests
            .iter()
            .filter_map(|r| match r {
                Request::Copy { remote, .. } => Some(remote.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn execute(&mut self, request: &Request) -> Result<String> {
        self.requests.push(request.clone());

        if self.unavailable {
            return Err(SyncError::ToolUnavailable {
                program: "mpremote".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        if self.failing.contains(request) {
            return Err(failure(request));
        }

        match request {
            Request::List { path } => self
                .listings
                .get(path)
                .cloned()
                .ok_or_else(|| failure(request)),
            _ => Ok(String::new()),
        }
    }
}

fn failure(request: &Request) -> SyncError {
    SyncError::ToolFailed {
        command: format!("mpremote {:?}", request.args()),
        status: "exit status: 1".to_string(),
        stderr: String::new(),
    }
}

/// Create `relative` under `root` with some content and a fixed mtime.
pub fn write_file(root: &Path, relative: &str, mtime: f64) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"print('hello')\n").unwrap();
    set_mtime(&path, mtime);
}

pub fn set_mtime(path: &Path, mtime: f64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs_f64(mtime);
    filetime::set_file_mtime(path, FileTime::from_system_time(time)).unwrap();
}

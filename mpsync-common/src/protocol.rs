// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Device request vocabulary and parsing of the tool's listing output.

use std::ffi::OsString;
use std::path::PathBuf;

// --- Device layout constants ---

/// Top of the remote filesystem as understood by `mpremote`.
pub const DEVICE_ROOT: &str = ":/";

/// Sentinel file holding the last upload time, at the top of a synced root.
pub const MARKER_FILE_NAME: &str = "last_upload_time.txt";

/// Join a relative POSIX path onto the device root.
///
/// `remote_path("sub/b.py")` gives `:/sub/b.py`.
pub fn remote_path(relative: &str) -> String {
    join_remote(DEVICE_ROOT, relative)
}

/// Join `name` onto a remote directory path.
pub fn join_remote(dir: &str, name: &str) -> String {
    format!(
        "{}/{}",
        dir.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}

// --- Requests ---

/// One interaction with the device, mapped onto a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Recursively remove everything below `path`.
    RemoveAll { path: String },
    /// Create a single directory (not recursive).
    MakeDir { path: String },
    /// Copy a local file to a remote path.
    Copy { local: PathBuf, remote: String },
    /// List the immediate entries of a remote directory.
    List { path: String },
    /// Soft reset the board.
    Reset,
    /// Attach an interactive REPL to the current terminal.
    Repl,
}

impl Request {
    /// Arguments passed to the device tool for this request.
    pub fn args(&self) -> Vec<OsString> {
        match self {
            Request::RemoveAll { path } => os_args(["fs", "rm", "-r", path.as_str()]),
            Request::MakeDir { path } => os_args(["fs", "mkdir", path.as_str()]),
            Request::Copy { local, remote } => {
                let mut args = os_args(["fs", "cp"]);
                args.push(local.as_os_str().to_os_string());
                args.push(OsString::from(remote));
                args
            }
            Request::List { path } => os_args(["fs", "ls", path.as_str()]),
            Request::Reset => os_args(["reset"]),
            Request::Repl => os_args(["repl"]),
        }
    }

    /// The request takes over the terminal until the user leaves it.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Request::Repl)
    }

    /// The request's standard output is the reply.
    pub fn captures_output(&self) -> bool {
        matches!(self, Request::List { .. })
    }
}

fn os_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Vec<OsString> {
    args.into_iter().map(OsString::from).collect()
}

// --- Listing output ---

/// Entries of one remote directory, in the order the tool printed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<String>,
    pub subdirs: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirs.is_empty()
    }
}

/// Parse the output of `fs ls`.
///
/// The first line is a header (`ls :/`) and is discarded. For every other
/// line the last whitespace-separated token is the entry name; a trailing
/// `/` marks a directory.
pub fn parse_listing(output: &str) -> Listing {
    let mut listing = Listing::default();

    for line in output.trim().lines().skip(1) {
        let Some(name) = line.split_whitespace().last() else {
            continue;
        };
        match name.strip_suffix('/') {
            Some(dir) => listing.subdirs.push(dir.to_string()),
            None => listing.files.push(name.to_string()),
        }
    }

    listing
}

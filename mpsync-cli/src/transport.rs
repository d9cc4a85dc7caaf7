// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Process transport: runs `mpremote` for each device request.

use std::ffi::OsString;
use std::process::{Command, Output, Stdio};

use mpsync_common::{Request, Result, SyncError, Transport};

/// Default device tool.
pub const DEFAULT_TOOL: &str = "mpremote";

/// Transport that shells out to `mpremote` (or a compatible tool).
pub struct MpremoteTransport {
    program: String,
    device: Option<String>,
}

impl MpremoteTransport {
    /// Create a transport for `program`, optionally pinned to one device.
    pub fn new(program: impl Into<String>, device: Option<String>) -> Self {
        Self {
            program: program.into(),
            device,
        }
    }

    /// Full argument list, including the `connect` prefix when a device is set.
    pub fn args(&self, request: &Request) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(device) = &self.device {
            args.push(OsString::from("connect"));
            args.push(OsString::from(device));
        }
        args.extend(request.args());
        args
    }

    /// Human-readable command line for diagnostics.
    pub fn command_line(&self, request: &Request) -> String {
        let mut line = self.program.clone();
        for arg in self.args(request) {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    fn command(&self, request: &Request) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(request));

        if request.is_interactive() {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else if request.captures_output() {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        } else {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::piped());
        }
        cmd
    }

    fn check(&self, request: &Request, output: Output) -> Result<String> {
        if !output.status.success() {
            return Err(SyncError::ToolFailed {
                command: self.command_line(request),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Transport for MpremoteTransport {
    fn execute(&mut self, request: &Request) -> Result<String> {
        let command_line = self.command_line(request);
        tracing::debug!(command = %command_line, "running device tool");

        let mut cmd = self.command(request);
        let spawn_err = |source: std::io::Error| SyncError::ToolUnavailable {
            program: self.program.clone(),
            source,
        };

        if request.is_interactive() {
            let status = cmd.status().map_err(spawn_err)?;
            if !status.success() {
                return Err(SyncError::ToolFailed {
                    command: command_line,
                    status: status.to_string(),
                    stderr: String::new(),
                });
            }
            return Ok(String::new());
        }

        let output = cmd.output().map_err(spawn_err)?;
        self.check(request, output)
    }
}

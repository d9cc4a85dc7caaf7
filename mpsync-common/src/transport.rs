// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shared invocation policy for device requests.
//!
//! Every device interaction goes through [`invoke`]. Failures are fatal by
//! default and propagate to the top-level dispatch, which decides to exit;
//! [`Policy::BestEffort`] swallows them instead.

use crate::error::Result;
use crate::protocol::Request;

/// Something that can carry a [`Request`] to the device.
pub trait Transport {
    /// Execute a request to completion.
    ///
    /// Returns captured standard output for requests that capture it
    /// ([`Request::captures_output`]) and an empty string otherwise.
    fn execute(&mut self, request: &Request) -> Result<String>;
}

/// What to do when a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Propagate the error.
    Fatal,
    /// Ignore the error and return `None`.
    BestEffort,
}

/// Run a request under the given failure policy.
pub fn invoke<T: Transport + ?Sized>(
    transport: &mut T,
    request: &Request,
    policy: Policy,
) -> Result<Option<String>> {
    tracing::debug!(?request, ?policy, "invoking device request");

    match transport.execute(request) {
        Ok(output) => Ok(Some(output)),
        Err(err) if policy == Policy::BestEffort => {
            tracing::debug!(error = %err, "ignoring best-effort request failure");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

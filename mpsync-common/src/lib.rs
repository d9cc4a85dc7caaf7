// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for mpsync.
//!
//! The host binary only supplies a [`Transport`] that talks to the real
//! `mpremote` tool; everything else lives here so it can be exercised with a
//! recording transport in tests:
//! - [`protocol`]: device requests and listing output parsing
//! - [`transport`]: the shared invocation policy
//! - [`marker`]: per-root upload timestamp store
//! - [`scan`]: candidate selection for incremental uploads
//! - [`listing`]: remote directory tree
//! - [`sync`]: the five device operations

pub mod error;
pub mod listing;
pub mod marker;
pub mod protocol;
pub mod scan;
pub mod sync;
pub mod transport;

// Re-export commonly used types
pub use error::{Result, SyncError};
pub use listing::RemoteDir;
pub use marker::MarkerStore;
pub use protocol::{Listing, Request, DEVICE_ROOT, MARKER_FILE_NAME};
pub use scan::{Candidate, UploadPlan, IGNORED_SUFFIXES};
pub use sync::UploadOutcome;
pub use transport::{invoke, Policy, Transport};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the upload marker store.

use std::fs;

use mpsync_common::marker::now_epoch;
use mpsync_common::{MarkerStore, SyncError, MARKER_FILE_NAME};

#[test]
fn test_default_file_name() {
    assert_eq!(MarkerStore::default().file_name(), MARKER_FILE_NAME);
    assert_eq!(MARKER_FILE_NAME, "last_upload_time.txt");
}

#[test]
fn test_missing_marker_reads_as_epoch() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(MarkerStore::default().load(dir.path()).unwrap(), 0.0);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = MarkerStore::default();

    store.save(dir.path(), 1712345678.25).unwrap();
    assert_eq!(store.load(dir.path()).unwrap(), 1712345678.25);
    assert!(store.path_for(dir.path()).is_file());
}

#[test]
fn test_load_accepts_surrounding_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MARKER_FILE_NAME), "1700000000.5\n").unwrap();

    assert_eq!(MarkerStore::default().load(dir.path()).unwrap(), 1700000000.5);
}

#[test]
fn test_corrupt_marker_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MARKER_FILE_NAME), "yesterday").unwrap();

    let err = MarkerStore::default().load(dir.path()).unwrap_err();
    assert!(matches!(err, SyncError::MarkerCorrupt { .. }));
}

#[test]
fn test_touch_stores_current_time() {
    let dir = tempfile::tempdir().unwrap();
    let store = MarkerStore::new(".stamp");
    let before = now_epoch();

    let stored = store.touch(dir.path()).unwrap();
    assert!(stored >= before);
    assert_eq!(store.load(dir.path()).unwrap(), stored);
    assert!(dir.path().join(".stamp").is_file());
}

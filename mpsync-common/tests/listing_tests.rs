// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for listing output parsing and the remote directory tree.

mod support;

use mpsync_common::protocol::parse_listing;
use mpsync_common::{sync, Listing, RemoteDir, Request, SyncError};
use support::RecordingTransport;

// --- parse_listing ---

#[test]
fn test_parse_listing_splits_files_and_dirs() {
    let output = "ls :/\n         139 boot.py\n           0 lib/\n        2048 main.py\n";
    let listing = parse_listing(output);

    assert_eq!(listing.files, ["boot.py", "main.py"]);
    assert_eq!(listing.subdirs, ["lib"]);
}

#[test]
fn test_parse_listing_header_only_is_empty() {
    assert!(parse_listing("ls :/\n").is_empty());
    assert!(parse_listing("").is_empty());
}

#[test]
fn test_parse_listing_skips_blank_lines() {
    let listing = parse_listing("ls :/lib\n\n   12 a.py\n   \n");
    assert_eq!(
        listing,
        Listing {
            files: vec!["a.py".into()],
            subdirs: vec![],
        }
    );
}

// --- RemoteDir ---

#[test]
fn test_fetch_two_level_tree() {
    let mut transport = RecordingTransport::new()
        .with_listing(":/", "ls :/\n  10 main.py\n   0 lib/\n")
        .with_listing(":/lib", "ls :/lib\n  20 util.py\n");

    let tree = sync::list_files(&mut transport).unwrap().unwrap();

    assert_eq!(tree.path, ":/");
    assert_eq!(tree.files, ["main.py"]);
    assert_eq!(tree.subdirs.len(), 1);
    assert_eq!(tree.subdirs[0].path, ":/lib");
    assert_eq!(tree.subdirs[0].files, ["util.py"]);
    assert_eq!(tree.file_count(), 2);
    assert_eq!(tree.dir_count(), 2);

    assert_eq!(tree.render(), "\n:/\n  main.py\n\n:/lib/\n      util.py\n");
}

#[test]
fn test_fetch_recurses_in_listing_order() {
    let mut transport = RecordingTransport::new()
        .with_listing(":/", "ls :/\n   0 b/\n   0 a/\n")
        .with_listing(":/b", "ls :/b\n  1 x.py\n")
        .with_listing(":/a", "ls :/a\n  1 y.py\n");

    let tree = sync::list_files(&mut transport).unwrap().unwrap();
    let order: Vec<&str> = tree.subdirs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(order, [":/b", ":/a"]);
}

#[test]
fn test_failing_branch_is_pruned() {
    let mut transport = RecordingTransport::new()
        .with_listing(":/", "ls :/\n  10 main.py\n   0 broken/\n   0 lib/\n")
        .with_listing(":/lib", "ls :/lib\n  20 util.py\n");

    let tree = sync::list_files(&mut transport).unwrap().unwrap();

    let paths: Vec<&str> = tree.subdirs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, [":/lib"]);
    assert!(transport.requests.contains(&Request::List {
        path: ":/broken".into()
    }));
}

#[test]
fn test_failing_root_listing_is_an_error() {
    let mut transport = RecordingTransport::new();

    let err = sync::list_files(&mut transport).unwrap_err();
    assert!(err.is_tool_failure());
    assert_eq!(transport.requests.len(), 1);
}

#[test]
fn test_empty_device_lists_nothing() {
    let mut transport = RecordingTransport::new().with_listing(":/", "ls :/\n");

    assert!(sync::list_files(&mut transport).unwrap().is_none());
}

#[test]
fn test_missing_tool_fails_listing() {
    let mut transport = RecordingTransport::new().unavailable();

    let err = sync::list_files(&mut transport).unwrap_err();
    assert!(matches!(err, SyncError::ToolUnavailable { .. }));
}

#[test]
fn test_empty_subdirectory_is_dropped() {
    let mut transport = RecordingTransport::new()
        .with_listing(":/", "ls :/\n  10 main.py\n   0 empty/\n")
        .with_listing(":/empty", "ls :/empty\n");

    let tree = sync::list_files(&mut transport).unwrap().unwrap();
    assert!(tree.subdirs.is_empty());
    assert_eq!(tree.files, ["main.py"]);
}

#[test]
fn test_render_nested_indent() {
    let tree = RemoteDir {
        path: ":/".into(),
        files: vec![],
        subdirs: vec![RemoteDir {
            path: ":/lib".into(),
            files: vec![],
            subdirs: vec![RemoteDir {
                path: ":/lib/net".into(),
                files: vec!["http.py".into()],
                subdirs: vec![],
            }],
        }],
    };

    assert_eq!(
        tree.render(),
        "\n:/\n\n:/lib/\n\n:/lib/net/\n          http.py\n"
    );
}

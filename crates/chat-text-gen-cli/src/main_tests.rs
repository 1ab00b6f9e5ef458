// crates/chat-text-gen-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Output Helper Tests
// Description: Unit tests for replacing the generated output file.
// Purpose: Ensure output replacement never leaves a partial destination.
// Dependencies: chat-text-gen-cli main helpers, tempfile
// ============================================================================

//! ## Overview
//! Validates `write_generated` swaps the destination in one rename, cleans up
//! its temporary file, and leaves the destination untouched on failure.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::write_generated;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn write_generated_replaces_existing_output() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("ChatMessages.hpp");
    fs::write(&path, "// a much longer previous header than the new one\n").expect("seed");
    write_generated(&path, "// new\n").expect("write generated");
    assert_eq!(fs::read_to_string(&path).expect("read"), "// new\n");
    assert_eq!(entry_names(dir.path()), vec!["ChatMessages.hpp".to_string()]);
}

#[test]
fn write_generated_creates_missing_output() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("Fresh.hpp");
    write_generated(&path, "#pragma once\n").expect("write generated");
    assert_eq!(fs::read_to_string(&path).expect("read"), "#pragma once\n");
}

#[test]
fn failed_replace_keeps_destination_and_removes_temp_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("Occupied.hpp");
    fs::create_dir(&path).expect("create blocking dir");
    fs::write(path.join("keep.txt"), "kept").expect("seed blocking dir");

    let result = write_generated(&path, "// new\n");

    assert!(result.is_err());
    assert!(path.is_dir());
    assert_eq!(fs::read_to_string(path.join("keep.txt")).expect("read"), "kept");
    assert_eq!(entry_names(dir.path()), vec!["Occupied.hpp".to_string()]);
}

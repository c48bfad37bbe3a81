// tests/core/file.rs
use content_addresser::core::is_single_block;
use content_addresser::{compute_cid, compute_cid_file, verify_file, CoreError};
use std::fs;
use tempfile::tempdir;

use crate::common::setup;

#[test]
fn file_cid_matches_in_memory_cid() {
    setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("certificate.pdf");
    let content = b"%PDF-1.7\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n";
    fs::write(&path, content).unwrap();

    let cid = compute_cid_file(&path).unwrap();
    assert_eq!(cid.to_string(), compute_cid(content));
}

#[test]
fn empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    assert_eq!(
        compute_cid_file(&path).unwrap().to_string(),
        "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n"
    );
}

#[test]
fn verify_file_detects_tampering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("diploma.pdf");
    fs::write(&path, b"Diploma: Jane Doe, 2024").unwrap();
    let pinned = compute_cid_file(&path).unwrap().to_string();

    assert!(verify_file(&path, &pinned).unwrap());

    fs::write(&path, b"Diploma: Jane Doe, 2025").unwrap();
    assert!(!verify_file(&path, &pinned).unwrap());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");
    assert!(matches!(compute_cid_file(&missing), Err(CoreError::Io(_))));
}

#[test]
fn single_block_threshold() {
    assert!(is_single_block(0));
    assert!(is_single_block(262_144));
    assert!(!is_single_block(262_145));
}

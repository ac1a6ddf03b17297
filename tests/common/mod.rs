//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use propstore::Entry;
use tempfile::TempDir;

/// Path of the sample file exercising every grammar rule
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/messages.properties")
}

/// Copy the fixture into a fresh temp dir so tests may modify it
pub fn setup_temp_fixture() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("messages.properties");
    fs::copy(fixture_path(), &path).unwrap();
    (temp_dir, path)
}

pub fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.properties");
    (temp_dir, path)
}

pub fn by_key(entries: Vec<Entry>) -> HashMap<String, Entry> {
    entries.into_iter().map(|e| (e.key.clone(), e)).collect()
}

/// Assert the content of the fixture, however it was obtained
pub fn check_fixture_entries(map: &HashMap<String, Entry>) {
    assert_eq!(map.len(), 8);

    assert_eq!(map["wikipedia"].value, "wikipedia.com");
    assert_eq!(map["wikipedia"].comments, vec!["Comments before everything"]);

    assert_eq!(map["google"].value, "google.com");
    assert_eq!(map["google"].comments, vec!["Another comment before, test with spaces"]);

    assert_eq!(map["yahoo"].value, "yahoo.com");
    assert!(map["yahoo"].comments.is_empty());

    assert_eq!(map["pinterest"].value, "pinterest.com");
    assert!(map["pinterest"].comments.is_empty());

    assert_eq!(map["facebook"].value, "\nfacebook.com \\");
    assert_eq!(map["facebook"].comments, vec!["Multi-line setting"]);

    assert_eq!(map["a-we:ird=key"].value, "\na-we:ird=key.com");
    assert_eq!(map["a-we:ird=key"].comments, vec!["Very weird formatted key"]);

    assert_eq!(map["move-setting"].value, "移動設定");
    assert_eq!(map["move-setting"].comments, vec!["Other languages text"]);

    assert_eq!(map["hello"].value, "こんにちは");
    assert!(map["hello"].comments.is_empty());
}

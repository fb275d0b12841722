//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to a config file inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write temp config");
    (temp_dir, path)
}

/// Collect a writer's bytes as a string.
pub fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("Output is not UTF-8")
}

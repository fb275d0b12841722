//! Unit tests for config module

use markfmt::{Config, Options};
use tempfile::TempDir;

use crate::helpers::temp_config;

#[test]
fn default_options_emit_colors_and_reset() {
    let options = Options::default();
    assert!(!options.strip);
    assert!(!options.escape);
    assert!(options.sanitize);
    assert!(!options.reset_on_start);
}

#[test]
fn missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_file_gives_defaults() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn partial_output_section_keeps_other_defaults() {
    let (_dir, path) = temp_config("[output]\nescape = true\n");
    let config = Config::load_from(&path).unwrap();
    assert!(config.output.escape);
    assert!(config.output.sanitize);
    assert!(!config.output.strip);
}

#[test]
fn invalid_toml_reports_path() {
    let (_dir, path) = temp_config("[output\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn save_then_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.output.reset_on_start = true;
    config.output.sanitize = false;
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn no_color_forces_strip_only_when_set() {
    let mut config = Config::default();
    config.apply_no_color(None);
    assert!(!config.output.strip);
    config.apply_no_color(Some(""));
    assert!(!config.output.strip);
    config.apply_no_color(Some("1"));
    assert!(config.output.strip);
}

#[test]
fn config_path_ends_with_markfmt_config() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/markfmt/config.toml"));
}

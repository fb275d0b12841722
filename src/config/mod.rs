//! Configuration management for markfmt
//!
//! Options are layered: built-in defaults, then the TOML config file, then
//! the `NO_COLOR` convention, then command-line flags (applied by the binary).

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/markfmt/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/markfmt)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Apply the `NO_COLOR` convention: any non-empty value means strip.
    pub fn apply_no_color(&mut self, no_color: Option<&str>) {
        if no_color.is_some_and(|value| !value.is_empty()) {
            self.output.strip = true;
        }
    }
}

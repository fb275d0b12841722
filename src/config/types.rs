//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: Options,
}

/// Output options consumed by the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Drop escape sequences, keep only literal text
    #[serde(default)]
    pub strip: bool,
    /// Interpret backslash escapes (`\n`, `\t`, ...)
    #[serde(default)]
    pub escape: bool,
    /// Write a full reset at the end of every stream
    #[serde(default = "default_sanitize")]
    pub sanitize: bool,
    /// Write a full reset before anything else
    #[serde(default)]
    pub reset_on_start: bool,
}

pub fn default_sanitize() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip: false,
            escape: false,
            sanitize: default_sanitize(),
            reset_on_start: false,
        }
    }
}

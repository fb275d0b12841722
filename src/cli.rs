//! CLI definitions for markfmt
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};
use clap_complete::Shell as CompletionShell;

use crate::config::Options;

/// Version string: crate version plus the git SHA for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string: crate version plus the git SHA for dev builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles.
///
/// - Green: headers, usage, flag names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "markfmt")]
#[command(about = "Translate {options--text--} markup into ANSI terminal formatting")]
#[command(long_about = "markfmt reads markup from its arguments or from stdin and writes it
to stdout with ANSI SGR escape sequences.

A tag looks like {options--text--}: the options between '{' and '--' select
colors and attributes, and '--}' restores the previous formatting. Tags do
not have to balance, and malformed tags are printed as they are.

EXAMPLES:
    markfmt '{r*--error--}: disk full'      Bold red 'error'
    echo '{;y--note--}' | markfmt           Yellow background, current fg
    markfmt --strip < notes.txt             Remove all markup
    markfmt --legend                        Show every option")]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Text to format; each argument is formatted separately. Reads stdin when empty.
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Strip markup instead of emitting escape sequences
    #[arg(long, short)]
    pub strip: bool,

    /// Interpret backslash escapes (\n, \t, \\, \a, \b, \r, \f, \v)
    #[arg(long, short)]
    pub escape: bool,

    /// Do not write a final reset sequence
    #[arg(long)]
    pub no_sanitize: bool,

    /// Write a reset sequence before any output
    #[arg(long)]
    pub reset_first: bool,

    /// Show the markup legend and exit
    #[arg(long, short)]
    pub legend: bool,

    /// Use this config file instead of ~/.config/markfmt/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions (internal use)
    #[arg(long, value_enum, hide = true)]
    pub completions: Option<CompletionShell>,
}

impl Cli {
    /// Apply command-line flags on top of options from the config file.
    pub fn apply_to(&self, options: &mut Options) {
        if self.strip {
            options.strip = true;
        }
        if self.escape {
            options.escape = true;
        }
        if self.no_sanitize {
            options.sanitize = false;
        }
        if self.reset_first {
            options.reset_on_start = true;
        }
    }
}

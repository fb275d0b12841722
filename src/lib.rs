//! markfmt library
//!
//! Streaming translator from `{options--text--}` markup to ANSI SGR escape
//! sequences.

pub mod automaton;
pub mod cli;
pub mod config;
pub mod format;
pub mod legend;
pub mod sink;
pub mod stream;

pub use automaton::{render, Automaton, State, TagError};
pub use config::{Config, Options};
pub use format::{Attribute, Color, FormatMask, FormatStack};
pub use sink::Sink;

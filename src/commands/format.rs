//! Format command handler: markup from arguments or stdin to stdout.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use markfmt::stream::{format_reader, format_texts};
use markfmt::Options;

use super::ignore_broken_pipe;

/// Format each positional argument with its own automaton.
#[cfg(not(tarpaulin_include))]
pub fn handle_texts(texts: &[String], options: Options) -> Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    ignore_broken_pipe(format_texts(out, texts, options).map(drop))
        .context("Failed to write formatted text")
}

/// Stream stdin through a single automaton.
#[cfg(not(tarpaulin_include))]
pub fn handle_stdin(options: Options) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ignore_broken_pipe(format_reader(stdin.lock(), stdout.lock(), options).map(drop))
        .context("Failed to format stdin")
}

//! Legend command handler

use std::io;

use anyhow::{Context, Result};

use markfmt::legend::write_legend;
use markfmt::Options;

use super::ignore_broken_pipe;

/// Print the markup legend, rendered with the resolved options.
#[cfg(not(tarpaulin_include))]
pub fn handle(options: Options) -> Result<()> {
    let stdout = io::stdout();
    ignore_broken_pipe(write_legend(stdout.lock(), options).map(drop))
        .context("Failed to write legend")
}

//! Command handlers for the markfmt CLI.
//!
//! Each submodule handles one mode of the binary.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod format;
pub mod legend;

use std::io;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use markfmt::cli::Cli;
use markfmt::{Config, Options};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Layer defaults, config file, `NO_COLOR` and flags into the final options.
pub fn resolve_options(cli: &Cli) -> Result<Options> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_no_color(std::env::var("NO_COLOR").ok().as_deref());
    cli.apply_to(&mut config.output);
    debug!(options = ?config.output, "resolved options");
    Ok(config.output)
}

/// Treat a closed stdout (e.g. `markfmt < big.txt | head`) as a normal exit.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

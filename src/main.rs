//! markfmt - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use markfmt::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        return commands::completions::handle::<Cli>(shell);
    }

    let options = commands::resolve_options(&cli)?;

    if cli.legend {
        return commands::legend::handle(options);
    }

    if cli.texts.is_empty() {
        commands::format::handle_stdin(options)
    } else {
        commands::format::handle_texts(&cli.texts, options)
    }
}

//! codemd: Flatten a directory tree into a single markdown file

use clap::Parser;
use codemd_cli::{Cli, commands, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    commands::flatten::run(&cli.root, &cli.output)?;
    Ok(())
}

//! Command line definition shared between main and library

use std::path::PathBuf;

use clap::Parser;
use codemd_core::DEFAULT_OUTPUT;

#[derive(Debug, Parser)]
#[command(name = "codemd")]
#[command(author, version, about = "Flatten a directory tree into one markdown file", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to flatten
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Markdown file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

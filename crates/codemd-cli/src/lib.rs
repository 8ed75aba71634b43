//! codemd-cli library
//!
//! Exposes the CLI definition, logging setup and commands so they can be
//! exercised from tests.

pub mod commands;
pub mod logging;
pub mod types;

pub use types::Cli;

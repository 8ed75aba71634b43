//! CLI commands

pub mod flatten;

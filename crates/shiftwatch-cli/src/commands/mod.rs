//! CLI subcommand implementations

pub mod check;
pub mod completions;
pub mod config;

//! CLI subcommand implementations.

pub mod get;
pub mod list;
pub mod snapshot;

//! The `list` subcommand: prints the leaderboard registry.

use anyhow::Result;
use clap::Args;
use thefinals_lib::types::Leaderboard;

use crate::output::{print_leaderboards_json, print_leaderboards_table, OutputFormat};

#[derive(Args)]
pub struct ListArgs {}

pub fn run(_args: &ListArgs, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_leaderboards_table(&Leaderboard::ALL),
        OutputFormat::Json => print_leaderboards_json(&Leaderboard::ALL),
    }
    Ok(())
}

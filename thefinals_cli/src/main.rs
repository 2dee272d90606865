mod commands;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use thefinals_lib::{CachedClient, StaticPolicy};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "thefinals")]
#[command(about = "Query THE FINALS leaderboards from the community API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Directory holding historical board snapshots
    #[arg(long, default_value = "./snapshots", global = true)]
    snapshot_dir: PathBuf,

    /// Snapshot store policy: disabled, disk, lazy or eager
    #[arg(long, default_value = "lazy", global = true)]
    cache_policy: StaticPolicy,

    /// Live cache TTL in seconds; 0 disables live caching
    #[arg(long, default_value = "300", global = true)]
    ttl: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a leaderboard and print its players
    Get(commands::get::GetArgs),
    /// List the known leaderboards and their platforms
    List(commands::list::ListArgs),
    /// Prefetch every historical board into the snapshot store
    Snapshot(commands::snapshot::SnapshotArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("thefinals=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let snapshot_dir = match &cli.command {
        Commands::Snapshot(args) => args.dir.clone().unwrap_or_else(|| cli.snapshot_dir.clone()),
        _ => cli.snapshot_dir.clone(),
    };
    let client = CachedClient::new(cli.cache_policy, Duration::from_secs(cli.ttl), snapshot_dir);

    match &cli.command {
        Commands::Get(args) => commands::get::run(args, &client, &format).await?,
        Commands::List(args) => commands::list::run(args, &format)?,
        Commands::Snapshot(args) => commands::snapshot::run(args, &client).await?,
    }

    Ok(())
}

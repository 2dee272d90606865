//! The `snapshot` subcommand: prefetches historical boards into the store.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use thefinals_lib::snapshots::snapshot_key;
use thefinals_lib::{snapshot_targets, CachedClient};

#[derive(Args)]
pub struct SnapshotArgs {
    /// Store directory; overrides the global --snapshot-dir
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub async fn run(_args: &SnapshotArgs, client: &CachedClient) -> Result<()> {
    let targets = snapshot_targets();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} ({eta}) {msg}",
        )
        .unwrap(),
    );

    let mut failed = 0usize;
    for (leaderboard, platform) in targets {
        let key = snapshot_key(leaderboard, platform);
        pb.set_message(key.clone());
        if let Err(e) = client.fetch_snapshot(leaderboard, platform).await {
            failed += 1;
            pb.println(format!("{}: {}", key, e));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    if failed > 0 {
        eprintln!("{} boards failed to download", failed);
    }

    Ok(())
}

//! The `get` subcommand: fetches one leaderboard and prints its players.

use anyhow::{Context, Result};
use clap::Args;
use thefinals_lib::types::{Leaderboard, LeaderboardResult, Platform};
use thefinals_lib::{raw_filter, CachedClient, FilterSet};

use crate::output::{parse_filter_literal, print_json, print_players_table, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Leaderboard identifier, e.g. s8 or s3worldtour
    pub leaderboard: String,

    /// Platform for the early split boards: crossplay, steam, xbox, psn
    #[arg(long)]
    pub platform: Option<String>,

    /// Field filter of the form `field[__op]=value`; repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Keep only players whose display or platform name contains this value
    #[arg(long)]
    pub name: Option<String>,

    /// Keep only players with a matching club tag
    #[arg(long)]
    pub club_tag: Option<String>,

    /// Match the club tag exactly instead of as a substring
    #[arg(long, requires = "club_tag")]
    pub exact: bool,

    /// Skip the caches and fetch straight from the API
    #[arg(long)]
    pub ignore_cache: bool,
}

pub async fn run(args: &GetArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let leaderboard: Leaderboard = args.leaderboard.parse()?;
    let platform = args
        .platform
        .as_deref()
        .map(str::parse::<Platform>)
        .transpose()?;
    let platform = leaderboard.resolve_platform(platform)?;

    let mut filters = FilterSet::new();
    for pair in &args.filters {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("--filter `{}` is not of the form field=value", pair))?;
        filters.insert(key, parse_filter_literal(value));
    }

    let result = if args.name.is_some() || args.club_tag.is_some() {
        // Name and club-tag narrowing mirrors the server: it runs on the
        // raw payload, before the typed build.
        let raw = client
            .get_raw(leaderboard, platform, args.ignore_cache)
            .await?;
        let narrowed = raw_filter(
            &raw,
            args.name.as_deref(),
            args.club_tag.as_deref(),
            args.exact,
        );
        let result = LeaderboardResult::from_raw(leaderboard, platform, &narrowed)?;
        if filters.is_empty() {
            result
        } else {
            result.filter(&filters)?
        }
    } else {
        let filters = if filters.is_empty() {
            None
        } else {
            Some(&filters)
        };
        client
            .get_leaderboard(leaderboard, platform, args.ignore_cache, filters)
            .await?
    };

    match format {
        OutputFormat::Table => print_players_table(&result),
        OutputFormat::Json => print_json(&result),
    }

    Ok(())
}

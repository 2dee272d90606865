use serde::Serialize;
use tabled::{Table, Tabled};
use thefinals_lib::types::{Leaderboard, LeaderboardResult};
use thefinals_lib::FilterValue;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Rank")]
    rank: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "Score")]
    score: String,
}

#[derive(Tabled, Serialize)]
struct LeaderboardRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Platforms")]
    platforms: String,
    #[tabled(rename = "Live")]
    live: bool,
}

// -- Row builders --

fn build_player_rows(result: &LeaderboardResult) -> Vec<PlayerRow> {
    result
        .players
        .iter()
        .map(|p| PlayerRow {
            rank: p.rank(),
            name: p.identity().best_name().unwrap_or("-").to_string(),
            league: p
                .league()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
            score: p
                .score()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_leaderboard_rows(boards: &[Leaderboard]) -> Vec<LeaderboardRow> {
    boards
        .iter()
        .map(|lb| LeaderboardRow {
            id: lb.to_string(),
            platforms: {
                let platforms = lb.platforms();
                if platforms.is_empty() {
                    "-".to_string()
                } else {
                    platforms
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                }
            },
            live: Leaderboard::CURRENT_SEASON.contains(lb),
        })
        .collect()
}

// -- Table output --

pub fn print_players_table(result: &LeaderboardResult) {
    println!("{}", Table::new(build_player_rows(result)));
}

pub fn print_leaderboards_table(boards: &[Leaderboard]) {
    println!("{}", Table::new(build_leaderboard_rows(boards)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_leaderboards_json(boards: &[Leaderboard]) {
    print_json(&build_leaderboard_rows(boards));
}

/// Coerces a `--filter` literal into the closest typed value: booleans and
/// numbers when they parse as such, a string otherwise.
pub fn parse_filter_literal(raw: &str) -> FilterValue {
    if let Ok(b) = raw.parse::<bool>() {
        return FilterValue::from(b);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return FilterValue::from(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return FilterValue::from(x);
    }
    FilterValue::from(raw)
}

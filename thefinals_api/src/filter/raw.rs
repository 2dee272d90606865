//! Name and club-tag filtering over raw payloads.
//!
//! Mirrors the filtering the upstream service performs server-side, so a
//! cached raw snapshot can answer the same queries the live API would.
//! Operates on the payload before any typed parsing.

use serde_json::{Map, Value};

fn match_wild(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn match_exact(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase() == needle.to_lowercase()
}

/// Filters a raw leaderboard payload by player name and/or club tag.
///
/// `name` matches case-insensitively as a substring against any of the
/// four display-name keys; `club_tag` matches the `clubTag` key, as a
/// substring or exactly depending on `exact_club_tag`. Empty strings count
/// as no filter. The output carries a rebuilt `meta` block, a recomputed
/// `count`, and the surviving players under `data`.
///
/// Filter echoes follow the upstream service: `nameFilter` is recorded
/// whenever a name filter ran, but `clubTagFilter` only when at least one
/// surviving player object actually carries a `clubTag` key.
pub fn raw_filter(
    payload: &Value,
    name: Option<&str>,
    club_tag: Option<&str>,
    exact_club_tag: bool,
) -> Value {
    let mut meta = Map::new();
    if let Some(source) = payload.get("meta").and_then(Value::as_object) {
        for key in ["leaderboardVersion", "dataSource"] {
            if let Some(value) = source.get(key) {
                meta.insert(key.to_string(), value.clone());
            }
        }
    }

    let mut players: Vec<Value> = payload
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        players.retain(|player| {
            ["name", "steamName", "psnName", "xboxName"].iter().any(|key| {
                player
                    .get(key)
                    .and_then(Value::as_str)
                    .is_some_and(|value| match_wild(value, name))
            })
        });
        meta.insert("nameFilter".to_string(), Value::String(name.to_string()));
    }

    if let Some(tag) = club_tag.filter(|t| !t.is_empty()) {
        players.retain(|player| {
            player
                .get("clubTag")
                .and_then(Value::as_str)
                .is_some_and(|value| {
                    if exact_club_tag {
                        match_exact(value, tag)
                    } else {
                        match_wild(value, tag)
                    }
                })
        });
        let any_tagged = players
            .iter()
            .any(|player| player.get("clubTag").is_some());
        if any_tagged {
            meta.insert("clubTagFilter".to_string(), Value::String(tag.to_string()));
        }
    }

    let mut out = Map::new();
    out.insert("meta".to_string(), Value::Object(meta));
    out.insert("count".to_string(), Value::from(players.len()));
    out.insert("data".to_string(), Value::Array(players));
    Value::Object(out)
}

//! The validated container for one leaderboard fetch.

use serde::Serialize;
use serde_json::Value;

use super::leaderboard::{Leaderboard, Platform};
use super::player::PlayerRecord;
use crate::filter::{self, FilterSet};
use crate::Error;

/// A leaderboard snapshot with its players parsed into typed records.
///
/// Serializes back to the wire layout: the player list goes out under
/// `data`, records as flat camelCase objects.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResult {
    pub leaderboard: Leaderboard,
    pub platform: Option<Platform>,
    /// Filter expressions this envelope was produced with, if any.
    pub filters: Option<FilterSet>,
    /// Players in upstream rank order. Never re-sorted locally.
    #[serde(rename = "data")]
    pub players: Vec<PlayerRecord>,
}

impl LeaderboardResult {
    /// Builds an envelope from a raw API payload.
    ///
    /// The payload's `meta.leaderboardVersion` and `meta.leaderboardPlatform`
    /// override the requested leaderboard and platform when present (a blank
    /// platform counts as absent), and the record shape is chosen from the
    /// overridden identifier. Any single bad record fails the whole build,
    /// citing the record's position.
    pub fn from_raw(
        leaderboard: Leaderboard,
        platform: Option<Platform>,
        raw: &Value,
    ) -> Result<LeaderboardResult, Error> {
        let mut leaderboard = leaderboard;
        let mut platform = platform;

        if let Some(meta) = raw.get("meta").and_then(Value::as_object) {
            if let Some(value) = meta.get("leaderboardVersion") {
                leaderboard = value
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| Error::Validation {
                        leaderboard,
                        detail: format!("invalid meta.leaderboardVersion: {}", value),
                    })?;
            }
            if let Some(value) = meta.get("leaderboardPlatform") {
                platform = match value {
                    Value::Null => None,
                    Value::String(s) if s.trim().is_empty() => None,
                    Value::String(s) => Some(s.parse().map_err(|_| Error::Validation {
                        leaderboard,
                        detail: format!("invalid meta.leaderboardPlatform: {}", value),
                    })?),
                    other => {
                        return Err(Error::Validation {
                            leaderboard,
                            detail: format!("invalid meta.leaderboardPlatform: {}", other),
                        })
                    }
                };
            }
        }

        let raw_players = raw
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Validation {
                leaderboard,
                detail: "payload has no `data` array".to_string(),
            })?;

        let shape = leaderboard.shape();
        let mut players = Vec::with_capacity(raw_players.len());
        for (index, raw_player) in raw_players.iter().enumerate() {
            players.push(
                shape
                    .parse(raw_player)
                    .map_err(|e| Error::InvalidRecord {
                        leaderboard,
                        index,
                        detail: e.to_string(),
                    })?,
            );
        }

        Ok(LeaderboardResult {
            leaderboard,
            platform,
            filters: None,
            players,
        })
    }

    /// Returns a new envelope containing the players that satisfy every
    /// expression in `filters`, with the expressions recorded on it. The
    /// source envelope is left untouched.
    pub fn filter(&self, filters: &FilterSet) -> Result<LeaderboardResult, Error> {
        Ok(LeaderboardResult {
            leaderboard: self.leaderboard,
            platform: self.platform,
            filters: Some(filters.clone()),
            players: filter::apply(&self.players, filters)?,
        })
    }
}

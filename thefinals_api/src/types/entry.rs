//! Player-record payloads, grouped by structure rather than season.
//!
//! Each leaderboard serves one of the payload shapes below; the
//! [`PlayerRecord`](super::PlayerRecord) union tags which leaderboard an
//! entry came from. Wire keys are camelCase; the snake_case field names are
//! also accepted on input.

use serde::{Deserialize, Serialize};

use super::league::{LeagueNumber, RankedLeague};
use crate::filter::FieldValue;

/// Display names shared by every record shape.
///
/// All four are independently nullable: at least one historical open-beta
/// record has no name at all, and blank strings are normalized to null
/// before parsing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: Option<String>,
    #[serde(alias = "steam_name")]
    pub steam_name: Option<String>,
    #[serde(alias = "xbox_name")]
    pub xbox_name: Option<String>,
    #[serde(alias = "psn_name")]
    pub psn_name: Option<String>,
}

impl Identity {
    /// First non-null display name, preferring the platform-agnostic one.
    pub fn best_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.steam_name.as_deref())
            .or(self.psn_name.as_deref())
            .or(self.xbox_name.as_deref())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::text(&self.name)),
            "steam_name" => Some(FieldValue::text(&self.steam_name)),
            "xbox_name" => Some(FieldValue::text(&self.xbox_name)),
            "psn_name" => Some(FieldValue::text(&self.psn_name)),
            _ => None,
        }
    }
}

/// Field access shared by every record payload.
///
/// `field` is the evaluator's view of a record: it maps a semantic
/// snake_case field name to that field's primitive value, returning `None`
/// for names the shape does not carry (which the evaluator treats as a
/// pass, not a rejection). Enumerated fields come back already unwrapped
/// to their primitive value.
pub trait RecordEntry {
    fn identity(&self) -> &Identity;

    /// Upstream-assigned 1-based rank. Never recomputed locally.
    fn rank(&self) -> u32;

    fn club_tag(&self) -> Option<&str> {
        None
    }

    fn league(&self) -> Option<RankedLeague> {
        None
    }

    /// Derived score for the shape, or `None` where the season kept no
    /// single score column.
    fn score(&self) -> Option<i64>;

    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Closed beta 1 ranked entry. The only shape carrying XP and level.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cb1RankedEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub league: RankedLeague,
    pub fame: i64,
    pub xp: i64,
    pub level: i64,
    pub cashouts: i64,
}

impl RecordEntry for Cb1RankedEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn league(&self) -> Option<RankedLeague> {
        Some(self.league)
    }

    fn score(&self) -> Option<i64> {
        Some(self.fame)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "league" => Some(FieldValue::str(self.league.as_str())),
            "fame" => Some(FieldValue::int(self.fame)),
            "xp" => Some(FieldValue::int(self.xp)),
            "level" => Some(FieldValue::int(self.level)),
            "cashouts" => Some(FieldValue::int(self.cashouts)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Fame-scored ranked entry (closed beta 2, open beta, season 1).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FameRankedEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub league: RankedLeague,
    pub fame: i64,
    pub cashouts: i64,
}

impl RecordEntry for FameRankedEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn league(&self) -> Option<RankedLeague> {
        Some(self.league)
    }

    fn score(&self) -> Option<i64> {
        Some(self.fame)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "league" => Some(FieldValue::str(self.league.as_str())),
            "fame" => Some(FieldValue::int(self.fame)),
            "cashouts" => Some(FieldValue::int(self.cashouts)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Season 2 ranked entry: rank movement and numeric league, but no score
/// column at all that season.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Season2RankedEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub league: RankedLeague,
    /// Rank places gained (positive) or lost (negative) since the last
    /// upstream refresh.
    pub change: i64,
    #[serde(alias = "league_number")]
    pub league_number: LeagueNumber,
}

impl RecordEntry for Season2RankedEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn league(&self) -> Option<RankedLeague> {
        Some(self.league)
    }

    fn score(&self) -> Option<i64> {
        None
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "league" => Some(FieldValue::str(self.league.as_str())),
            "change" => Some(FieldValue::int(self.change)),
            "league_number" => Some(FieldValue::int(self.league_number.as_u8())),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Rank-score ranked entry (seasons 3 and 4, pre-club-tag).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub league: RankedLeague,
    pub change: i64,
    #[serde(alias = "league_number")]
    pub league_number: LeagueNumber,
    #[serde(alias = "rank_score")]
    pub rank_score: i64,
}

impl RecordEntry for RankedEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn league(&self) -> Option<RankedLeague> {
        Some(self.league)
    }

    fn score(&self) -> Option<i64> {
        Some(self.rank_score)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "league" => Some(FieldValue::str(self.league.as_str())),
            "change" => Some(FieldValue::int(self.change)),
            "league_number" => Some(FieldValue::int(self.league_number.as_u8())),
            "rank_score" => Some(FieldValue::int(self.rank_score)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Rank-score ranked entry with a club tag (season 5 onward).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaggedRankedEntry {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(alias = "club_tag")]
    pub club_tag: Option<String>,
    pub rank: u32,
    pub league: RankedLeague,
    pub change: i64,
    #[serde(alias = "league_number")]
    pub league_number: LeagueNumber,
    #[serde(alias = "rank_score")]
    pub rank_score: i64,
}

impl RecordEntry for TaggedRankedEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn club_tag(&self) -> Option<&str> {
        self.club_tag.as_deref()
    }

    fn league(&self) -> Option<RankedLeague> {
        Some(self.league)
    }

    fn score(&self) -> Option<i64> {
        Some(self.rank_score)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "club_tag" => Some(FieldValue::text(&self.club_tag)),
            "rank" => Some(FieldValue::int(self.rank)),
            "league" => Some(FieldValue::str(self.league.as_str())),
            "change" => Some(FieldValue::int(self.change)),
            "league_number" => Some(FieldValue::int(self.league_number.as_u8())),
            "rank_score" => Some(FieldValue::int(self.rank_score)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// World tour entry (seasons 3 and 4): score is total cashouts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorldTourEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub cashouts: i64,
}

impl RecordEntry for WorldTourEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn score(&self) -> Option<i64> {
        Some(self.cashouts)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "cashouts" => Some(FieldValue::int(self.cashouts)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// World tour entry with a club tag (season 5 onward).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaggedWorldTourEntry {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(alias = "club_tag")]
    pub club_tag: Option<String>,
    pub rank: u32,
    pub cashouts: i64,
}

impl RecordEntry for TaggedWorldTourEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn club_tag(&self) -> Option<&str> {
        self.club_tag.as_deref()
    }

    fn score(&self) -> Option<i64> {
        Some(self.cashouts)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "club_tag" => Some(FieldValue::text(&self.club_tag)),
            "rank" => Some(FieldValue::int(self.rank)),
            "cashouts" => Some(FieldValue::int(self.cashouts)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Sponsor-event entry (season 4): score is the fan count.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SponsorEntry {
    #[serde(flatten)]
    pub identity: Identity,
    pub rank: u32,
    pub fans: i64,
    pub sponsor: String,
}

impl RecordEntry for SponsorEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn score(&self) -> Option<i64> {
        Some(self.fans)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "rank" => Some(FieldValue::int(self.rank)),
            "fans" => Some(FieldValue::int(self.fans)),
            "sponsor" => Some(FieldValue::str(&self.sponsor)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Sponsor-event entry with a club tag (season 5 onward).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaggedSponsorEntry {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(alias = "club_tag")]
    pub club_tag: Option<String>,
    pub rank: u32,
    pub fans: i64,
    pub sponsor: String,
}

impl RecordEntry for TaggedSponsorEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn club_tag(&self) -> Option<&str> {
        self.club_tag.as_deref()
    }

    fn score(&self) -> Option<i64> {
        Some(self.fans)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "club_tag" => Some(FieldValue::text(&self.club_tag)),
            "rank" => Some(FieldValue::int(self.rank)),
            "fans" => Some(FieldValue::int(self.fans)),
            "sponsor" => Some(FieldValue::str(&self.sponsor)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

/// Points-scored event entry: terminal attack, power shift, quick cash,
/// bank-it, team deathmatch, heavy hitters, blast off, cash ball and
/// head-to-head all share this structure. Every mode that uses it shipped
/// with club tags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuickPlayEntry {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(alias = "club_tag")]
    pub club_tag: Option<String>,
    pub rank: u32,
    pub points: i64,
}

impl RecordEntry for QuickPlayEntry {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn club_tag(&self) -> Option<&str> {
        self.club_tag.as_deref()
    }

    fn score(&self) -> Option<i64> {
        Some(self.points)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "club_tag" => Some(FieldValue::text(&self.club_tag)),
            "rank" => Some(FieldValue::int(self.rank)),
            "points" => Some(FieldValue::int(self.points)),
            "score" => Some(FieldValue::maybe_int(self.score())),
            _ => self.identity.field(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QuickPlayEntry, RecordEntry, TaggedRankedEntry};
    use crate::filter::FieldValue;

    #[test]
    fn accepts_camel_case_and_snake_case_keys() {
        let camel: QuickPlayEntry = serde_json::from_value(serde_json::json!({
            "name": "ivy", "steamName": "ivy_s", "xboxName": null, "psnName": null,
            "clubTag": "OG", "rank": 1, "points": 500
        }))
        .unwrap();
        let snake: QuickPlayEntry = serde_json::from_value(serde_json::json!({
            "name": "ivy", "steam_name": "ivy_s", "xbox_name": null, "psn_name": null,
            "club_tag": "OG", "rank": 1, "points": 500
        }))
        .unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.club_tag.as_deref(), Some("OG"));
    }

    #[test]
    fn serializes_with_wire_keys() {
        let entry: QuickPlayEntry = serde_json::from_value(serde_json::json!({
            "name": "ivy", "steamName": "ivy_s", "xboxName": null, "psnName": null,
            "clubTag": "OG", "rank": 1, "points": 500
        }))
        .unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["clubTag"], "OG");
        assert_eq!(value["steamName"], "ivy_s");
        assert!(value.get("club_tag").is_none());
    }

    #[test]
    fn field_accessor_unwraps_enums_and_nulls() {
        let entry: TaggedRankedEntry = serde_json::from_value(serde_json::json!({
            "name": "ash", "steamName": null, "xboxName": null, "psnName": null,
            "clubTag": null, "rank": 3, "league": "Ruby", "change": -2,
            "leagueNumber": 21, "rankScore": 48213
        }))
        .unwrap();
        assert_eq!(entry.field("league"), Some(FieldValue::Str("Ruby".into())));
        assert_eq!(entry.field("league_number"), Some(FieldValue::Int(21)));
        assert_eq!(entry.field("change"), Some(FieldValue::Int(-2)));
        assert_eq!(entry.field("club_tag"), Some(FieldValue::Null));
        assert_eq!(entry.field("score"), Some(FieldValue::Int(48213)));
        assert_eq!(entry.field("sponsor"), None);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result = serde_json::from_value::<QuickPlayEntry>(serde_json::json!({
            "name": "ivy", "steamName": null, "xboxName": null, "psnName": null,
            "clubTag": null, "rank": 1
        }));
        assert!(result.unwrap_err().to_string().contains("points"));
    }
}

//! The closed union of player-record shapes and per-shape parsing.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::entry::{
    Cb1RankedEntry, FameRankedEntry, Identity, QuickPlayEntry, RankedEntry, RecordEntry,
    Season2RankedEntry, SponsorEntry, TaggedRankedEntry, TaggedSponsorEntry, TaggedWorldTourEntry,
    WorldTourEntry,
};
use super::league::RankedLeague;
use crate::filter::FieldValue;

/// One validated leaderboard row.
///
/// The variant is the leaderboard the row came from; several variants share
/// a payload structure today but are kept distinct because the upstream
/// schema is free to diverge per mode in future seasons. Serializes
/// untagged, i.e. back to the flat wire object.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PlayerRecord {
    Cb1Ranked(Cb1RankedEntry),
    Cb2Ranked(FameRankedEntry),
    ObRanked(FameRankedEntry),
    Season1Ranked(FameRankedEntry),
    Season2Ranked(Season2RankedEntry),
    Season3Ranked(RankedEntry),
    Season3WorldTour(WorldTourEntry),
    Season4Ranked(RankedEntry),
    Season4WorldTour(WorldTourEntry),
    Season4Sponsor(SponsorEntry),
    Season5Ranked(TaggedRankedEntry),
    Season5Sponsor(TaggedSponsorEntry),
    Season5WorldTour(TaggedWorldTourEntry),
    Season5TerminalAttack(QuickPlayEntry),
    Season5PowerShift(QuickPlayEntry),
    Season5QuickCash(QuickPlayEntry),
    Season5BankIt(QuickPlayEntry),
    Season6Ranked(TaggedRankedEntry),
    Season6Sponsor(TaggedSponsorEntry),
    Season6WorldTour(TaggedWorldTourEntry),
    Season6TerminalAttack(QuickPlayEntry),
    Season6PowerShift(QuickPlayEntry),
    Season6QuickCash(QuickPlayEntry),
    Season6TeamDeathmatch(QuickPlayEntry),
    Season6HeavyHitters(QuickPlayEntry),
    Season7Ranked(TaggedRankedEntry),
    Season7Sponsor(TaggedSponsorEntry),
    Season7WorldTour(TaggedWorldTourEntry),
    Season7TerminalAttack(QuickPlayEntry),
    Season7PowerShift(QuickPlayEntry),
    Season7QuickCash(QuickPlayEntry),
    Season7TeamDeathmatch(QuickPlayEntry),
    Season7BlastOff(QuickPlayEntry),
    Season7CashBall(QuickPlayEntry),
    Season8Ranked(TaggedRankedEntry),
    Season8Sponsor(TaggedSponsorEntry),
    Season8WorldTour(TaggedWorldTourEntry),
    Season8Head2Head(QuickPlayEntry),
    Season8PowerShift(QuickPlayEntry),
    Season8QuickCash(QuickPlayEntry),
    Season8TeamDeathmatch(QuickPlayEntry),
}

impl PlayerRecord {
    fn entry(&self) -> &dyn RecordEntry {
        match self {
            PlayerRecord::Cb1Ranked(e) => e,
            PlayerRecord::Cb2Ranked(e) => e,
            PlayerRecord::ObRanked(e) => e,
            PlayerRecord::Season1Ranked(e) => e,
            PlayerRecord::Season2Ranked(e) => e,
            PlayerRecord::Season3Ranked(e) => e,
            PlayerRecord::Season3WorldTour(e) => e,
            PlayerRecord::Season4Ranked(e) => e,
            PlayerRecord::Season4WorldTour(e) => e,
            PlayerRecord::Season4Sponsor(e) => e,
            PlayerRecord::Season5Ranked(e) => e,
            PlayerRecord::Season5Sponsor(e) => e,
            PlayerRecord::Season5WorldTour(e) => e,
            PlayerRecord::Season5TerminalAttack(e) => e,
            PlayerRecord::Season5PowerShift(e) => e,
            PlayerRecord::Season5QuickCash(e) => e,
            PlayerRecord::Season5BankIt(e) => e,
            PlayerRecord::Season6Ranked(e) => e,
            PlayerRecord::Season6Sponsor(e) => e,
            PlayerRecord::Season6WorldTour(e) => e,
            PlayerRecord::Season6TerminalAttack(e) => e,
            PlayerRecord::Season6PowerShift(e) => e,
            PlayerRecord::Season6QuickCash(e) => e,
            PlayerRecord::Season6TeamDeathmatch(e) => e,
            PlayerRecord::Season6HeavyHitters(e) => e,
            PlayerRecord::Season7Ranked(e) => e,
            PlayerRecord::Season7Sponsor(e) => e,
            PlayerRecord::Season7WorldTour(e) => e,
            PlayerRecord::Season7TerminalAttack(e) => e,
            PlayerRecord::Season7PowerShift(e) => e,
            PlayerRecord::Season7QuickCash(e) => e,
            PlayerRecord::Season7TeamDeathmatch(e) => e,
            PlayerRecord::Season7BlastOff(e) => e,
            PlayerRecord::Season7CashBall(e) => e,
            PlayerRecord::Season8Ranked(e) => e,
            PlayerRecord::Season8Sponsor(e) => e,
            PlayerRecord::Season8WorldTour(e) => e,
            PlayerRecord::Season8Head2Head(e) => e,
            PlayerRecord::Season8PowerShift(e) => e,
            PlayerRecord::Season8QuickCash(e) => e,
            PlayerRecord::Season8TeamDeathmatch(e) => e,
        }
    }

    pub fn identity(&self) -> &Identity {
        self.entry().identity()
    }

    /// Upstream-assigned 1-based rank.
    pub fn rank(&self) -> u32 {
        self.entry().rank()
    }

    /// Club tag, for shapes that carry one.
    pub fn club_tag(&self) -> Option<&str> {
        self.entry().club_tag()
    }

    /// League tier, for ranked shapes.
    pub fn league(&self) -> Option<RankedLeague> {
        self.entry().league()
    }

    /// Derived score: fame, rank score, cashouts, fans or points depending
    /// on the shape. Season 2 ranked rows have no score.
    pub fn score(&self) -> Option<i64> {
        self.entry().score()
    }

    /// Evaluator access to a field by its semantic snake_case name.
    /// `None` means the shape has no such field.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        self.entry().field(name)
    }
}

/// Replaces blank or whitespace-only string values with null.
///
/// Applies to the map's direct members only; nested objects normalize
/// themselves when they are parsed.
fn scrub_blank_strings(map: &mut serde_json::Map<String, Value>) {
    for value in map.values_mut() {
        if let Value::String(s) = value {
            if s.trim().is_empty() {
                *value = Value::Null;
            }
        }
    }
}

fn parse_entry<T: DeserializeOwned>(raw: &Value) -> Result<T, serde_json::Error> {
    let mut value = raw.clone();
    if let Some(map) = value.as_object_mut() {
        scrub_blank_strings(map);
    }
    serde_json::from_value(value)
}

/// Record shape served by a leaderboard.
///
/// `s3` and `s3original` share [`RecordShape::Season3Ranked`]; every other
/// leaderboard has a shape of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    Cb1Ranked,
    Cb2Ranked,
    ObRanked,
    Season1Ranked,
    Season2Ranked,
    Season3Ranked,
    Season3WorldTour,
    Season4Ranked,
    Season4WorldTour,
    Season4Sponsor,
    Season5Ranked,
    Season5Sponsor,
    Season5WorldTour,
    Season5TerminalAttack,
    Season5PowerShift,
    Season5QuickCash,
    Season5BankIt,
    Season6Ranked,
    Season6Sponsor,
    Season6WorldTour,
    Season6TerminalAttack,
    Season6PowerShift,
    Season6QuickCash,
    Season6TeamDeathmatch,
    Season6HeavyHitters,
    Season7Ranked,
    Season7Sponsor,
    Season7WorldTour,
    Season7TerminalAttack,
    Season7PowerShift,
    Season7QuickCash,
    Season7TeamDeathmatch,
    Season7BlastOff,
    Season7CashBall,
    Season8Ranked,
    Season8Sponsor,
    Season8WorldTour,
    Season8Head2Head,
    Season8PowerShift,
    Season8QuickCash,
    Season8TeamDeathmatch,
}

impl RecordShape {
    /// Parses one raw player object into this shape.
    ///
    /// Blank strings are normalized to null first, then the object is
    /// validated structurally; the league field in particular only admits
    /// the closed set of league names.
    pub fn parse(&self, raw: &Value) -> Result<PlayerRecord, serde_json::Error> {
        match self {
            RecordShape::Cb1Ranked => Ok(PlayerRecord::Cb1Ranked(parse_entry(raw)?)),
            RecordShape::Cb2Ranked => Ok(PlayerRecord::Cb2Ranked(parse_entry(raw)?)),
            RecordShape::ObRanked => Ok(PlayerRecord::ObRanked(parse_entry(raw)?)),
            RecordShape::Season1Ranked => Ok(PlayerRecord::Season1Ranked(parse_entry(raw)?)),
            RecordShape::Season2Ranked => Ok(PlayerRecord::Season2Ranked(parse_entry(raw)?)),
            RecordShape::Season3Ranked => Ok(PlayerRecord::Season3Ranked(parse_entry(raw)?)),
            RecordShape::Season3WorldTour => Ok(PlayerRecord::Season3WorldTour(parse_entry(raw)?)),
            RecordShape::Season4Ranked => Ok(PlayerRecord::Season4Ranked(parse_entry(raw)?)),
            RecordShape::Season4WorldTour => Ok(PlayerRecord::Season4WorldTour(parse_entry(raw)?)),
            RecordShape::Season4Sponsor => Ok(PlayerRecord::Season4Sponsor(parse_entry(raw)?)),
            RecordShape::Season5Ranked => Ok(PlayerRecord::Season5Ranked(parse_entry(raw)?)),
            RecordShape::Season5Sponsor => Ok(PlayerRecord::Season5Sponsor(parse_entry(raw)?)),
            RecordShape::Season5WorldTour => Ok(PlayerRecord::Season5WorldTour(parse_entry(raw)?)),
            RecordShape::Season5TerminalAttack => {
                Ok(PlayerRecord::Season5TerminalAttack(parse_entry(raw)?))
            }
            RecordShape::Season5PowerShift => Ok(PlayerRecord::Season5PowerShift(parse_entry(raw)?)),
            RecordShape::Season5QuickCash => Ok(PlayerRecord::Season5QuickCash(parse_entry(raw)?)),
            RecordShape::Season5BankIt => Ok(PlayerRecord::Season5BankIt(parse_entry(raw)?)),
            RecordShape::Season6Ranked => Ok(PlayerRecord::Season6Ranked(parse_entry(raw)?)),
            RecordShape::Season6Sponsor => Ok(PlayerRecord::Season6Sponsor(parse_entry(raw)?)),
            RecordShape::Season6WorldTour => Ok(PlayerRecord::Season6WorldTour(parse_entry(raw)?)),
            RecordShape::Season6TerminalAttack => {
                Ok(PlayerRecord::Season6TerminalAttack(parse_entry(raw)?))
            }
            RecordShape::Season6PowerShift => Ok(PlayerRecord::Season6PowerShift(parse_entry(raw)?)),
            RecordShape::Season6QuickCash => Ok(PlayerRecord::Season6QuickCash(parse_entry(raw)?)),
            RecordShape::Season6TeamDeathmatch => {
                Ok(PlayerRecord::Season6TeamDeathmatch(parse_entry(raw)?))
            }
            RecordShape::Season6HeavyHitters => {
                Ok(PlayerRecord::Season6HeavyHitters(parse_entry(raw)?))
            }
            RecordShape::Season7Ranked => Ok(PlayerRecord::Season7Ranked(parse_entry(raw)?)),
            RecordShape::Season7Sponsor => Ok(PlayerRecord::Season7Sponsor(parse_entry(raw)?)),
            RecordShape::Season7WorldTour => Ok(PlayerRecord::Season7WorldTour(parse_entry(raw)?)),
            RecordShape::Season7TerminalAttack => {
                Ok(PlayerRecord::Season7TerminalAttack(parse_entry(raw)?))
            }
            RecordShape::Season7PowerShift => Ok(PlayerRecord::Season7PowerShift(parse_entry(raw)?)),
            RecordShape::Season7QuickCash => Ok(PlayerRecord::Season7QuickCash(parse_entry(raw)?)),
            RecordShape::Season7TeamDeathmatch => {
                Ok(PlayerRecord::Season7TeamDeathmatch(parse_entry(raw)?))
            }
            RecordShape::Season7BlastOff => Ok(PlayerRecord::Season7BlastOff(parse_entry(raw)?)),
            RecordShape::Season7CashBall => Ok(PlayerRecord::Season7CashBall(parse_entry(raw)?)),
            RecordShape::Season8Ranked => Ok(PlayerRecord::Season8Ranked(parse_entry(raw)?)),
            RecordShape::Season8Sponsor => Ok(PlayerRecord::Season8Sponsor(parse_entry(raw)?)),
            RecordShape::Season8WorldTour => Ok(PlayerRecord::Season8WorldTour(parse_entry(raw)?)),
            RecordShape::Season8Head2Head => Ok(PlayerRecord::Season8Head2Head(parse_entry(raw)?)),
            RecordShape::Season8PowerShift => Ok(PlayerRecord::Season8PowerShift(parse_entry(raw)?)),
            RecordShape::Season8QuickCash => Ok(PlayerRecord::Season8QuickCash(parse_entry(raw)?)),
            RecordShape::Season8TeamDeathmatch => {
                Ok(PlayerRecord::Season8TeamDeathmatch(parse_entry(raw)?))
            }
        }
    }
}

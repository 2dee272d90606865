//! The registry of known leaderboards and platforms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::RecordShape;
use crate::Error;

/// A season or event leaderboard served by the upstream API.
///
/// Identifiers are the upstream path segments (`s8`, `s7worldtour`, ...).
/// Every identifier maps to exactly one record shape and one set of valid
/// platforms.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Leaderboard {
    Cb1,
    Cb2,
    Ob,
    S1,
    S2,
    S3,
    S3Original,
    S3WorldTour,
    S4,
    S4WorldTour,
    S4Sponsor,
    S5,
    S5Sponsor,
    S5WorldTour,
    S5TerminalAttack,
    S5PowerShift,
    S5QuickCash,
    S5BankIt,
    S6,
    S6Sponsor,
    S6WorldTour,
    S6TerminalAttack,
    S6PowerShift,
    S6QuickCash,
    S6TeamDeathmatch,
    S6HeavyHitters,
    S7,
    S7Sponsor,
    S7WorldTour,
    S7TerminalAttack,
    S7PowerShift,
    S7QuickCash,
    S7TeamDeathmatch,
    S7BlastOff,
    S7CashBall,
    S8,
    S8Sponsor,
    S8WorldTour,
    S8Head2Head,
    S8PowerShift,
    S8QuickCash,
    S8TeamDeathmatch,
}

/// Platform split offered by the early leaderboards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Crossplay,
    Steam,
    Xbox,
    Psn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Crossplay,
        Platform::Steam,
        Platform::Xbox,
        Platform::Psn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Crossplay => "crossplay",
            Platform::Steam => "steam",
            Platform::Xbox => "xbox",
            Platform::Psn => "psn",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crossplay" => Ok(Platform::Crossplay),
            "steam" => Ok(Platform::Steam),
            "xbox" => Ok(Platform::Xbox),
            "psn" => Ok(Platform::Psn),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}

impl Leaderboard {
    /// Every known leaderboard, oldest first.
    pub const ALL: [Leaderboard; 42] = [
        Leaderboard::Cb1,
        Leaderboard::Cb2,
        Leaderboard::Ob,
        Leaderboard::S1,
        Leaderboard::S2,
        Leaderboard::S3,
        Leaderboard::S3Original,
        Leaderboard::S3WorldTour,
        Leaderboard::S4,
        Leaderboard::S4WorldTour,
        Leaderboard::S4Sponsor,
        Leaderboard::S5,
        Leaderboard::S5Sponsor,
        Leaderboard::S5WorldTour,
        Leaderboard::S5TerminalAttack,
        Leaderboard::S5PowerShift,
        Leaderboard::S5QuickCash,
        Leaderboard::S5BankIt,
        Leaderboard::S6,
        Leaderboard::S6Sponsor,
        Leaderboard::S6WorldTour,
        Leaderboard::S6TerminalAttack,
        Leaderboard::S6PowerShift,
        Leaderboard::S6QuickCash,
        Leaderboard::S6TeamDeathmatch,
        Leaderboard::S6HeavyHitters,
        Leaderboard::S7,
        Leaderboard::S7Sponsor,
        Leaderboard::S7WorldTour,
        Leaderboard::S7TerminalAttack,
        Leaderboard::S7PowerShift,
        Leaderboard::S7QuickCash,
        Leaderboard::S7TeamDeathmatch,
        Leaderboard::S7BlastOff,
        Leaderboard::S7CashBall,
        Leaderboard::S8,
        Leaderboard::S8Sponsor,
        Leaderboard::S8WorldTour,
        Leaderboard::S8Head2Head,
        Leaderboard::S8PowerShift,
        Leaderboard::S8QuickCash,
        Leaderboard::S8TeamDeathmatch,
    ];

    /// Leaderboards still being updated upstream. Everything else is a
    /// frozen historical snapshot.
    pub const CURRENT_SEASON: [Leaderboard; 7] = [
        Leaderboard::S8,
        Leaderboard::S8Sponsor,
        Leaderboard::S8WorldTour,
        Leaderboard::S8Head2Head,
        Leaderboard::S8PowerShift,
        Leaderboard::S8QuickCash,
        Leaderboard::S8TeamDeathmatch,
    ];

    /// Returns the upstream identifier, e.g. `"s7worldtour"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Leaderboard::Cb1 => "cb1",
            Leaderboard::Cb2 => "cb2",
            Leaderboard::Ob => "ob",
            Leaderboard::S1 => "s1",
            Leaderboard::S2 => "s2",
            Leaderboard::S3 => "s3",
            Leaderboard::S3Original => "s3original",
            Leaderboard::S3WorldTour => "s3worldtour",
            Leaderboard::S4 => "s4",
            Leaderboard::S4WorldTour => "s4worldtour",
            Leaderboard::S4Sponsor => "s4sponsor",
            Leaderboard::S5 => "s5",
            Leaderboard::S5Sponsor => "s5sponsor",
            Leaderboard::S5WorldTour => "s5worldtour",
            Leaderboard::S5TerminalAttack => "s5terminalattack",
            Leaderboard::S5PowerShift => "s5powershift",
            Leaderboard::S5QuickCash => "s5quickcash",
            Leaderboard::S5BankIt => "s5bankit",
            Leaderboard::S6 => "s6",
            Leaderboard::S6Sponsor => "s6sponsor",
            Leaderboard::S6WorldTour => "s6worldtour",
            Leaderboard::S6TerminalAttack => "s6terminalattack",
            Leaderboard::S6PowerShift => "s6powershift",
            Leaderboard::S6QuickCash => "s6quickcash",
            Leaderboard::S6TeamDeathmatch => "s6teamdeathmatch",
            Leaderboard::S6HeavyHitters => "s6heavyhitters",
            Leaderboard::S7 => "s7",
            Leaderboard::S7Sponsor => "s7sponsor",
            Leaderboard::S7WorldTour => "s7worldtour",
            Leaderboard::S7TerminalAttack => "s7terminalattack",
            Leaderboard::S7PowerShift => "s7powershift",
            Leaderboard::S7QuickCash => "s7quickcash",
            Leaderboard::S7TeamDeathmatch => "s7teamdeathmatch",
            Leaderboard::S7BlastOff => "s7blastoff",
            Leaderboard::S7CashBall => "s7cashball",
            Leaderboard::S8 => "s8",
            Leaderboard::S8Sponsor => "s8sponsor",
            Leaderboard::S8WorldTour => "s8worldtour",
            Leaderboard::S8Head2Head => "s8head2head",
            Leaderboard::S8PowerShift => "s8powershift",
            Leaderboard::S8QuickCash => "s8quickcash",
            Leaderboard::S8TeamDeathmatch => "s8teamdeathmatch",
        }
    }

    /// Record shape served by this leaderboard.
    pub fn shape(&self) -> RecordShape {
        match self {
            Leaderboard::Cb1 => RecordShape::Cb1Ranked,
            Leaderboard::Cb2 => RecordShape::Cb2Ranked,
            Leaderboard::Ob => RecordShape::ObRanked,
            Leaderboard::S1 => RecordShape::Season1Ranked,
            Leaderboard::S2 => RecordShape::Season2Ranked,
            Leaderboard::S3 => RecordShape::Season3Ranked,
            Leaderboard::S3Original => RecordShape::Season3Ranked,
            Leaderboard::S3WorldTour => RecordShape::Season3WorldTour,
            Leaderboard::S4 => RecordShape::Season4Ranked,
            Leaderboard::S4WorldTour => RecordShape::Season4WorldTour,
            Leaderboard::S4Sponsor => RecordShape::Season4Sponsor,
            Leaderboard::S5 => RecordShape::Season5Ranked,
            Leaderboard::S5Sponsor => RecordShape::Season5Sponsor,
            Leaderboard::S5WorldTour => RecordShape::Season5WorldTour,
            Leaderboard::S5TerminalAttack => RecordShape::Season5TerminalAttack,
            Leaderboard::S5PowerShift => RecordShape::Season5PowerShift,
            Leaderboard::S5QuickCash => RecordShape::Season5QuickCash,
            Leaderboard::S5BankIt => RecordShape::Season5BankIt,
            Leaderboard::S6 => RecordShape::Season6Ranked,
            Leaderboard::S6Sponsor => RecordShape::Season6Sponsor,
            Leaderboard::S6WorldTour => RecordShape::Season6WorldTour,
            Leaderboard::S6TerminalAttack => RecordShape::Season6TerminalAttack,
            Leaderboard::S6PowerShift => RecordShape::Season6PowerShift,
            Leaderboard::S6QuickCash => RecordShape::Season6QuickCash,
            Leaderboard::S6TeamDeathmatch => RecordShape::Season6TeamDeathmatch,
            Leaderboard::S6HeavyHitters => RecordShape::Season6HeavyHitters,
            Leaderboard::S7 => RecordShape::Season7Ranked,
            Leaderboard::S7Sponsor => RecordShape::Season7Sponsor,
            Leaderboard::S7WorldTour => RecordShape::Season7WorldTour,
            Leaderboard::S7TerminalAttack => RecordShape::Season7TerminalAttack,
            Leaderboard::S7PowerShift => RecordShape::Season7PowerShift,
            Leaderboard::S7QuickCash => RecordShape::Season7QuickCash,
            Leaderboard::S7TeamDeathmatch => RecordShape::Season7TeamDeathmatch,
            Leaderboard::S7BlastOff => RecordShape::Season7BlastOff,
            Leaderboard::S7CashBall => RecordShape::Season7CashBall,
            Leaderboard::S8 => RecordShape::Season8Ranked,
            Leaderboard::S8Sponsor => RecordShape::Season8Sponsor,
            Leaderboard::S8WorldTour => RecordShape::Season8WorldTour,
            Leaderboard::S8Head2Head => RecordShape::Season8Head2Head,
            Leaderboard::S8PowerShift => RecordShape::Season8PowerShift,
            Leaderboard::S8QuickCash => RecordShape::Season8QuickCash,
            Leaderboard::S8TeamDeathmatch => RecordShape::Season8TeamDeathmatch,
        }
    }

    /// Platforms the upstream API serves for this leaderboard.
    ///
    /// Empty for the closed betas, the full split for `ob`/`s1`/`s2`, and
    /// crossplay only from season 3 onward.
    pub fn platforms(&self) -> &'static [Platform] {
        match self {
            Leaderboard::Cb1 | Leaderboard::Cb2 => &[],
            Leaderboard::Ob | Leaderboard::S1 | Leaderboard::S2 => &Platform::ALL,
            _ => &[Platform::Crossplay],
        }
    }

    /// Resolves the platform to use for a request against this leaderboard.
    ///
    /// Closed betas have no platform concept and resolve to `None`; the
    /// early split boards require an explicit choice; everything later
    /// forces crossplay regardless of what was asked for.
    pub fn resolve_platform(&self, requested: Option<Platform>) -> Result<Option<Platform>, Error> {
        match self {
            Leaderboard::Cb1 | Leaderboard::Cb2 => Ok(None),
            Leaderboard::Ob | Leaderboard::S1 | Leaderboard::S2 => match requested {
                Some(platform) => Ok(Some(platform)),
                None => Err(Error::PlatformRequired { leaderboard: *self }),
            },
            _ => Ok(Some(Platform::Crossplay)),
        }
    }

    /// Request path for this leaderboard, relative to the API base URL.
    pub fn api_path(&self, platform: Option<Platform>) -> String {
        match platform {
            Some(platform) => format!("/v1/leaderboard/{}/{}", self.as_str(), platform.as_str()),
            None => format!("/v1/leaderboard/{}", self.as_str()),
        }
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Leaderboard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Leaderboard::ALL
            .iter()
            .find(|lb| lb.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownLeaderboard(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Leaderboard, Platform};
    use crate::Error;

    #[test]
    fn identifiers_round_trip() {
        for lb in Leaderboard::ALL {
            assert_eq!(lb.as_str().parse::<Leaderboard>().unwrap(), lb);
            let json = serde_json::to_string(&lb).unwrap();
            assert_eq!(json, format!("\"{}\"", lb.as_str()));
            assert_eq!(serde_json::from_str::<Leaderboard>(&json).unwrap(), lb);
        }
        assert!(matches!(
            "s9".parse::<Leaderboard>(),
            Err(Error::UnknownLeaderboard(_))
        ));
    }

    #[test]
    fn platform_resolution_matches_the_valid_set() {
        for lb in Leaderboard::ALL {
            match lb.platforms() {
                [] => {
                    assert_eq!(lb.resolve_platform(None).unwrap(), None);
                    // A requested platform is ignored, not rejected.
                    assert_eq!(lb.resolve_platform(Some(Platform::Steam)).unwrap(), None);
                }
                [Platform::Crossplay] => {
                    assert_eq!(
                        lb.resolve_platform(Some(Platform::Xbox)).unwrap(),
                        Some(Platform::Crossplay)
                    );
                    assert_eq!(
                        lb.resolve_platform(None).unwrap(),
                        Some(Platform::Crossplay)
                    );
                }
                _ => {
                    assert!(matches!(
                        lb.resolve_platform(None),
                        Err(Error::PlatformRequired { .. })
                    ));
                    assert_eq!(
                        lb.resolve_platform(Some(Platform::Psn)).unwrap(),
                        Some(Platform::Psn)
                    );
                }
            }
        }
    }

    #[test]
    fn shared_season_3_shape() {
        assert_eq!(Leaderboard::S3.shape(), Leaderboard::S3Original.shape());
        assert_ne!(Leaderboard::S3.shape(), Leaderboard::S4.shape());
    }

    #[test]
    fn api_paths() {
        assert_eq!(Leaderboard::Cb1.api_path(None), "/v1/leaderboard/cb1");
        assert_eq!(
            Leaderboard::Ob.api_path(Some(Platform::Steam)),
            "/v1/leaderboard/ob/steam"
        );
        assert_eq!(
            Leaderboard::S8.api_path(Some(Platform::Crossplay)),
            "/v1/leaderboard/s8/crossplay"
        );
    }

    #[test]
    fn current_season_is_live_only() {
        for lb in Leaderboard::CURRENT_SEASON {
            assert!(lb.as_str().starts_with("s8"));
            assert!(Leaderboard::ALL.contains(&lb));
        }
    }
}

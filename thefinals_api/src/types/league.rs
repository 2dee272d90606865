use serde::{de, Deserialize, Serialize};

/// Ranked league tier.
///
/// Closed set of upstream league names, declared in ladder order. The
/// unsegmented tiers (`Bronze`, `Silver`, ...) come from the beta and
/// season-1 era before tiers were split into numbered sub-tiers; each one
/// sorts below its own numbered sub-tiers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankedLeague {
    Bronze,
    #[serde(rename = "Bronze 4")]
    Bronze4,
    #[serde(rename = "Bronze 3")]
    Bronze3,
    #[serde(rename = "Bronze 2")]
    Bronze2,
    #[serde(rename = "Bronze 1")]
    Bronze1,
    Silver,
    #[serde(rename = "Silver 4")]
    Silver4,
    #[serde(rename = "Silver 3")]
    Silver3,
    #[serde(rename = "Silver 2")]
    Silver2,
    #[serde(rename = "Silver 1")]
    Silver1,
    Gold,
    #[serde(rename = "Gold 4")]
    Gold4,
    #[serde(rename = "Gold 3")]
    Gold3,
    #[serde(rename = "Gold 2")]
    Gold2,
    #[serde(rename = "Gold 1")]
    Gold1,
    Platinum,
    #[serde(rename = "Platinum 4")]
    Platinum4,
    #[serde(rename = "Platinum 3")]
    Platinum3,
    #[serde(rename = "Platinum 2")]
    Platinum2,
    #[serde(rename = "Platinum 1")]
    Platinum1,
    Diamond,
    #[serde(rename = "Diamond 4")]
    Diamond4,
    #[serde(rename = "Diamond 3")]
    Diamond3,
    #[serde(rename = "Diamond 2")]
    Diamond2,
    #[serde(rename = "Diamond 1")]
    Diamond1,
    Ruby,
}

impl RankedLeague {
    /// Returns the upstream league name, e.g. `"Bronze 4"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankedLeague::Bronze => "Bronze",
            RankedLeague::Bronze4 => "Bronze 4",
            RankedLeague::Bronze3 => "Bronze 3",
            RankedLeague::Bronze2 => "Bronze 2",
            RankedLeague::Bronze1 => "Bronze 1",
            RankedLeague::Silver => "Silver",
            RankedLeague::Silver4 => "Silver 4",
            RankedLeague::Silver3 => "Silver 3",
            RankedLeague::Silver2 => "Silver 2",
            RankedLeague::Silver1 => "Silver 1",
            RankedLeague::Gold => "Gold",
            RankedLeague::Gold4 => "Gold 4",
            RankedLeague::Gold3 => "Gold 3",
            RankedLeague::Gold2 => "Gold 2",
            RankedLeague::Gold1 => "Gold 1",
            RankedLeague::Platinum => "Platinum",
            RankedLeague::Platinum4 => "Platinum 4",
            RankedLeague::Platinum3 => "Platinum 3",
            RankedLeague::Platinum2 => "Platinum 2",
            RankedLeague::Platinum1 => "Platinum 1",
            RankedLeague::Diamond => "Diamond",
            RankedLeague::Diamond4 => "Diamond 4",
            RankedLeague::Diamond3 => "Diamond 3",
            RankedLeague::Diamond2 => "Diamond 2",
            RankedLeague::Diamond1 => "Diamond 1",
            RankedLeague::Ruby => "Ruby",
        }
    }
}

impl std::fmt::Display for RankedLeague {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric league tier used by season 2 and later ranked leaderboards.
///
/// Serialized as a plain integer (1 = Bronze 4, 21 = Ruby). Unlike
/// [`RankedLeague`] there are no unsegmented tiers here; the upstream API
/// introduced this field together with the four-way tier split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeagueNumber {
    Bronze4 = 1,
    Bronze3 = 2,
    Bronze2 = 3,
    Bronze1 = 4,
    Silver4 = 5,
    Silver3 = 6,
    Silver2 = 7,
    Silver1 = 8,
    Gold4 = 9,
    Gold3 = 10,
    Gold2 = 11,
    Gold1 = 12,
    Platinum4 = 13,
    Platinum3 = 14,
    Platinum2 = 15,
    Platinum1 = 16,
    Diamond4 = 17,
    Diamond3 = 18,
    Diamond2 = 19,
    Diamond1 = 20,
    Ruby = 21,
}

impl LeagueNumber {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    fn from_u64(n: u64) -> Option<LeagueNumber> {
        Some(match n {
            1 => LeagueNumber::Bronze4,
            2 => LeagueNumber::Bronze3,
            3 => LeagueNumber::Bronze2,
            4 => LeagueNumber::Bronze1,
            5 => LeagueNumber::Silver4,
            6 => LeagueNumber::Silver3,
            7 => LeagueNumber::Silver2,
            8 => LeagueNumber::Silver1,
            9 => LeagueNumber::Gold4,
            10 => LeagueNumber::Gold3,
            11 => LeagueNumber::Gold2,
            12 => LeagueNumber::Gold1,
            13 => LeagueNumber::Platinum4,
            14 => LeagueNumber::Platinum3,
            15 => LeagueNumber::Platinum2,
            16 => LeagueNumber::Platinum1,
            17 => LeagueNumber::Diamond4,
            18 => LeagueNumber::Diamond3,
            19 => LeagueNumber::Diamond2,
            20 => LeagueNumber::Diamond1,
            21 => LeagueNumber::Ruby,
            _ => return None,
        })
    }
}

impl std::fmt::Display for LeagueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl Serialize for LeagueNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for LeagueNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = u64::deserialize(deserializer)?;
        LeagueNumber::from_u64(n)
            .ok_or_else(|| de::Error::custom(format!("invalid league number: {}", n)))
    }
}

#[cfg(test)]
mod tests {
    use super::{LeagueNumber, RankedLeague};

    #[test]
    fn league_wire_names_round_trip() {
        let json = serde_json::to_string(&RankedLeague::Bronze4).unwrap();
        assert_eq!(json, "\"Bronze 4\"");
        let back: RankedLeague = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RankedLeague::Bronze4);

        let ruby: RankedLeague = serde_json::from_str("\"Ruby\"").unwrap();
        assert_eq!(ruby, RankedLeague::Ruby);
    }

    #[test]
    fn unknown_league_name_is_rejected() {
        let err = serde_json::from_str::<RankedLeague>("\"Emerald\"").unwrap_err();
        assert!(err.to_string().contains("Emerald"));
    }

    #[test]
    fn league_ladder_order() {
        assert!(RankedLeague::Bronze < RankedLeague::Bronze4);
        assert!(RankedLeague::Bronze4 < RankedLeague::Bronze1);
        assert!(RankedLeague::Bronze1 < RankedLeague::Silver);
        assert!(RankedLeague::Diamond1 < RankedLeague::Ruby);
    }

    #[test]
    fn league_number_round_trip() {
        let json = serde_json::to_string(&LeagueNumber::Ruby).unwrap();
        assert_eq!(json, "21");
        let back: LeagueNumber = serde_json::from_str("1").unwrap();
        assert_eq!(back, LeagueNumber::Bronze4);
    }

    #[test]
    fn league_number_out_of_range() {
        let err = serde_json::from_str::<LeagueNumber>("22").unwrap_err();
        assert!(err.to_string().contains("invalid league number: 22"));
    }
}

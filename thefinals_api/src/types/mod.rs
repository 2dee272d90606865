mod leaderboard;
pub use self::leaderboard::{Leaderboard, Platform};

mod league;
pub use self::league::{LeagueNumber, RankedLeague};

mod entry;
pub use self::entry::{
    Cb1RankedEntry, FameRankedEntry, Identity, QuickPlayEntry, RankedEntry, RecordEntry,
    Season2RankedEntry, SponsorEntry, TaggedRankedEntry, TaggedSponsorEntry, TaggedWorldTourEntry,
    WorldTourEntry,
};

mod player;
pub use self::player::{PlayerRecord, RecordShape};

mod result;
pub use self::result::LeaderboardResult;

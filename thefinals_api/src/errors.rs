//! Error types for the API client.

use crate::types::Leaderboard;

/// Errors that can occur when resolving, fetching, or validating a
/// leaderboard.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Leaderboard identifier outside the known set.
    #[error("Unknown leaderboard: {0}")]
    UnknownLeaderboard(String),
    /// Platform name outside the known set.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
    /// The leaderboard needs an explicit platform and none was given.
    #[error("Platform must be provided for {leaderboard}")]
    PlatformRequired { leaderboard: Leaderboard },
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The payload does not match the envelope contract.
    #[error("Invalid {leaderboard} payload: {detail}")]
    Validation {
        leaderboard: Leaderboard,
        detail: String,
    },
    /// One player object failed to parse into the leaderboard's record
    /// shape. The whole build fails; there are no partial envelopes.
    #[error("Invalid record at index {index} of {leaderboard}: {detail}")]
    InvalidRecord {
        leaderboard: Leaderboard,
        index: usize,
        detail: String,
    },
    /// A filter expression named an operator outside the fixed table.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
}

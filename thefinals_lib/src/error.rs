//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding snapshot-store and serialization failures.
#[derive(Debug)]
pub enum TheFinalsError {
    /// An error from the underlying API client or the typed build.
    Api(thefinals_api::Error),
    /// A snapshot store read or write failed.
    Store(std::io::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for TheFinalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Store(e) => write!(f, "Snapshot store error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for TheFinalsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Serialization(e) => Some(e),
        }
    }
}

impl From<thefinals_api::Error> for TheFinalsError {
    fn from(e: thefinals_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for TheFinalsError {
    fn from(e: std::io::Error) -> Self {
        Self::Store(e)
    }
}

impl From<serde_json::Error> for TheFinalsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

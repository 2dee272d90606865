//! HTTP client for the THE FINALS leaderboard API.

use std::time::Duration;

use serde_json::Value;

use crate::{
    types::{Leaderboard, LeaderboardResult, Platform},
    Error,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the community leaderboard API.
///
/// The API is public and read-only; requests carry no credentials. Each
/// request builds a fresh `reqwest::Client` with a 10-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.the-finals-leaderboard.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production leaderboard API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.the-finals-leaderboard.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_api_url, path);
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches a leaderboard's raw JSON payload without typed parsing.
    ///
    /// The platform is resolved against the leaderboard's valid set first,
    /// so e.g. `s8` always fetches crossplay and `ob` without a platform is
    /// rejected before any request is made.
    pub async fn get_raw(
        &self,
        leaderboard: Leaderboard,
        platform: Option<Platform>,
    ) -> Result<Value, Error> {
        let platform = leaderboard.resolve_platform(platform)?;
        self.get_json(&leaderboard.api_path(platform)).await
    }

    /// Fetches a leaderboard and parses it into a typed envelope.
    pub async fn get_leaderboard(
        &self,
        leaderboard: Leaderboard,
        platform: Option<Platform>,
    ) -> Result<LeaderboardResult, Error> {
        let platform = leaderboard.resolve_platform(platform)?;
        let raw = self.get_json(&leaderboard.api_path(platform)).await?;
        LeaderboardResult::from_raw(leaderboard, platform, &raw)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

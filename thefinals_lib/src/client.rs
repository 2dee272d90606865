//! Caching wrapper around the API client.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde_json::Value;

use thefinals_api::types::{Leaderboard, LeaderboardResult, Platform};
use thefinals_api::{Client, FilterSet};

use crate::cache::MemoryCache;
use crate::error::TheFinalsError;
use crate::snapshots::{snapshot_key, SnapshotStore};

/// Default expiry for live leaderboard payloads.
pub const DEFAULT_LIVE_TTL: Duration = Duration::from_secs(300);

/// How the client uses the on-disk snapshot store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaticPolicy {
    /// Never touch the snapshot store.
    Disabled,
    /// Read snapshots from disk on every miss, without pinning them in
    /// memory.
    Disk,
    /// Read snapshots from disk on first miss and pin them in the memory
    /// cache.
    #[default]
    Lazy,
    /// Pin every stored snapshot into the memory cache at construction.
    Eager,
}

impl StaticPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaticPolicy::Disabled => "disabled",
            StaticPolicy::Disk => "disk",
            StaticPolicy::Lazy => "lazy",
            StaticPolicy::Eager => "eager",
        }
    }
}

impl fmt::Display for StaticPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StaticPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(StaticPolicy::Disabled),
            "disk" => Ok(StaticPolicy::Disk),
            "lazy" => Ok(StaticPolicy::Lazy),
            "eager" => Ok(StaticPolicy::Eager),
            other => Err(format!("unknown static caching policy: {}", other)),
        }
    }
}

/// API client wrapper that adds an in-memory TTL cache and an on-disk
/// snapshot store.
///
/// Cache hits bypass the network entirely. Live fetches expire after the
/// configured TTL; snapshots loaded from the store are pinned without
/// expiry, which is sound because historical boards never change upstream.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
    store: SnapshotStore,
    policy: StaticPolicy,
    live_ttl: Duration,
}

impl CachedClient {
    /// Creates a new cached client using the production API URL.
    pub fn new(
        policy: StaticPolicy,
        live_ttl: Duration,
        snapshot_dir: impl Into<PathBuf>,
    ) -> Self {
        Self::build(Client::new(), policy, live_ttl, snapshot_dir)
    }

    /// Creates a new cached client with a custom base URL. Used for testing.
    pub fn with_base_url(
        base_url: &str,
        policy: StaticPolicy,
        live_ttl: Duration,
        snapshot_dir: impl Into<PathBuf>,
    ) -> Self {
        Self::build(Client::with_base_url(base_url), policy, live_ttl, snapshot_dir)
    }

    fn build(
        inner: Client,
        policy: StaticPolicy,
        live_ttl: Duration,
        snapshot_dir: impl Into<PathBuf>,
    ) -> Self {
        let client = Self {
            inner,
            cache: MemoryCache::new(live_ttl),
            store: SnapshotStore::new(snapshot_dir),
            policy,
            live_ttl,
        };
        if client.policy == StaticPolicy::Eager {
            client.preload_static();
        }
        client
    }

    /// Pins every stored snapshot into the memory cache. Unreadable
    /// snapshots are skipped, not fatal.
    fn preload_static(&self) {
        let keys = match self.store.list() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Failed to list snapshot store: {}", e);
                return;
            }
        };
        for key in keys {
            match self.store.load(&key) {
                Ok(Some(body)) => self.cache.set_static(key, body),
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to preload snapshot {}: {}", key, e),
            }
        }
    }

    /// Looks up a payload in the memory cache, falling back to the snapshot
    /// store as the policy allows. Store hits are pinned under the lazy
    /// policy and re-read every time under the disk policy.
    fn lookup_cached(&self, key: &str) -> Result<Option<String>, TheFinalsError> {
        if self.policy == StaticPolicy::Disabled && self.live_ttl.is_zero() {
            return Ok(None);
        }

        if let Some(body) = self.cache.get(key) {
            tracing::debug!("Memory cache hit for {}", key);
            return Ok(Some(body));
        }

        if self.policy == StaticPolicy::Disabled {
            return Ok(None);
        }

        match self.store.load(key)? {
            Some(body) => {
                tracing::info!("Loaded snapshot {} from store", key);
                if self.policy == StaticPolicy::Lazy {
                    self.cache.set_static(key.to_string(), body.clone());
                }
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    /// Fetches the raw payload for a board, consulting the caches first
    /// unless `ignore_cache` is set. Live fetches are cached when the TTL
    /// is non-zero.
    pub async fn get_raw(
        &self,
        leaderboard: Leaderboard,
        platform: Option<Platform>,
        ignore_cache: bool,
    ) -> Result<Value, TheFinalsError> {
        let platform = leaderboard.resolve_platform(platform)?;
        let key = snapshot_key(leaderboard, platform);

        if !ignore_cache {
            if let Some(body) = self.lookup_cached(&key)? {
                return Ok(serde_json::from_str(&body)?);
            }
        }

        let raw = self.inner.get_raw(leaderboard, platform).await?;
        tracing::info!("Fetched {} from the API", key);
        if !self.live_ttl.is_zero() {
            self.cache.set(key, raw.to_string());
        }
        Ok(raw)
    }

    /// Fetches a board and builds the typed envelope, applying `filters`
    /// to the player list when given.
    pub async fn get_leaderboard(
        &self,
        leaderboard: Leaderboard,
        platform: Option<Platform>,
        ignore_cache: bool,
        filters: Option<&FilterSet>,
    ) -> Result<LeaderboardResult, TheFinalsError> {
        let platform = leaderboard.resolve_platform(platform)?;
        let raw = self.get_raw(leaderboard, platform, ignore_cache).await?;
        let result = LeaderboardResult::from_raw(leaderboard, platform, &raw)?;
        match filters {
            Some(filters) if !filters.is_empty() => Ok(result.filter(filters)?),
            _ => Ok(result),
        }
    }

    /// Fetches one board straight from the API and saves it into the
    /// snapshot store, bypassing every cache.
    pub async fn fetch_snapshot(
        &self,
        leaderboard: Leaderboard,
        platform: Option<Platform>,
    ) -> Result<(), TheFinalsError> {
        let platform = leaderboard.resolve_platform(platform)?;
        let raw = self.inner.get_raw(leaderboard, platform).await?;
        self.store.save(&snapshot_key(leaderboard, platform), &raw)?;
        Ok(())
    }

    /// Fetches every historical board into the snapshot store.
    pub async fn fetch_snapshots(&self) -> Result<(), TheFinalsError> {
        for (leaderboard, platform) in snapshot_targets() {
            self.fetch_snapshot(leaderboard, platform).await?;
        }
        Ok(())
    }

    /// Removes all entries from the in-memory cache. The snapshot store is
    /// left untouched.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

/// Every `(leaderboard, platform)` pair worth snapshotting: all boards
/// except the current season, expanded over their valid platforms.
pub fn snapshot_targets() -> Vec<(Leaderboard, Option<Platform>)> {
    let mut targets = Vec::new();
    for leaderboard in Leaderboard::ALL {
        if Leaderboard::CURRENT_SEASON.contains(&leaderboard) {
            continue;
        }
        let platforms = leaderboard.platforms();
        if platforms.is_empty() {
            targets.push((leaderboard, None));
        } else {
            for &platform in platforms {
                targets.push((leaderboard, Some(platform)));
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_from_str() {
        assert_eq!("disabled".parse(), Ok(StaticPolicy::Disabled));
        assert_eq!("disk".parse(), Ok(StaticPolicy::Disk));
        assert_eq!("lazy".parse(), Ok(StaticPolicy::Lazy));
        assert_eq!("eager".parse(), Ok(StaticPolicy::Eager));
        assert!("aggressive".parse::<StaticPolicy>().is_err());
    }

    #[test]
    fn policy_defaults_to_lazy() {
        assert_eq!(StaticPolicy::default(), StaticPolicy::Lazy);
        assert_eq!(StaticPolicy::default().as_str(), "lazy");
    }

    #[test]
    fn snapshot_targets_cover_every_historical_board() {
        let targets = snapshot_targets();

        // 2 betas + 3 split boards x 4 platforms + 30 crossplay boards.
        assert_eq!(targets.len(), 44);
        assert!(targets.contains(&(Leaderboard::Cb1, None)));
        assert!(targets.contains(&(Leaderboard::Ob, Some(Platform::Psn))));
        assert!(targets.contains(&(Leaderboard::S3, Some(Platform::Crossplay))));
        for platform in Platform::ALL {
            assert!(targets.contains(&(Leaderboard::S2, Some(platform))));
        }
    }

    #[test]
    fn snapshot_targets_skip_the_current_season() {
        for (leaderboard, _) in snapshot_targets() {
            assert!(!Leaderboard::CURRENT_SEASON.contains(&leaderboard));
        }
    }
}

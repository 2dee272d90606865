//! Library layer for THE FINALS leaderboards: cached API client, snapshot
//! store, and static caching policies.
//!
//! Wraps the `thefinals_api` crate with an in-memory TTL cache for live
//! boards and an on-disk snapshot store for historical ones.

pub mod cache;
pub mod client;
pub mod error;
pub mod snapshots;

pub use thefinals_api;
pub use thefinals_api::types;
pub use thefinals_api::{raw_filter, FilterSet, FilterValue};

pub use cache::MemoryCache;
pub use client::{snapshot_targets, CachedClient, StaticPolicy, DEFAULT_LIVE_TTL};
pub use error::TheFinalsError;
pub use snapshots::{snapshot_key, SnapshotStore};

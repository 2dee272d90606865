//! On-disk store for raw leaderboard payloads.
//!
//! Historical boards never change upstream, so a payload saved once is
//! valid forever. Each board is kept as a single `{key}.json` file in the
//! store directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde_json::Value;

use thefinals_api::types::{Leaderboard, Platform};

/// Store key for a board: `leaderboard_{id}`, with the platform segment
/// appended when one applies.
pub fn snapshot_key(leaderboard: Leaderboard, platform: Option<Platform>) -> String {
    match platform {
        Some(platform) => format!("leaderboard_{}_{}", leaderboard, platform),
        None => format!("leaderboard_{}", leaderboard),
    }
}

/// Directory-backed store of raw leaderboard payloads.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over `dir`. The directory is created on first save,
    /// not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads the stored payload for `key`. A missing snapshot is `Ok(None)`;
    /// any other I/O failure is an error.
    pub fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes the payload for `key`, overwriting any previous snapshot.
    pub fn save(&self, key: &str, payload: &Value) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), payload.to_string())
    }

    /// Lists the keys of every stored snapshot, sorted. A missing store
    /// directory is an empty store.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let name = entry?.file_name();
            if let Some(key) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_store(name: &str) -> SnapshotStore {
        let dir = std::env::temp_dir().join(format!(
            "thefinals_snapshots_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        SnapshotStore::new(dir)
    }

    #[test]
    fn key_format() {
        assert_eq!(snapshot_key(Leaderboard::Cb1, None), "leaderboard_cb1");
        assert_eq!(
            snapshot_key(Leaderboard::Ob, Some(Platform::Steam)),
            "leaderboard_ob_steam"
        );
        assert_eq!(
            snapshot_key(Leaderboard::S3WorldTour, Some(Platform::Crossplay)),
            "leaderboard_s3worldtour_crossplay"
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = scratch_store("round_trip");
        let payload = json!({"meta": {"leaderboardVersion": "cb1"}, "count": 0, "data": []});

        store.save("leaderboard_cb1", &payload).unwrap();
        let body = store.load("leaderboard_cb1").unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), payload);
    }

    #[test]
    fn missing_snapshot_is_none() {
        let store = scratch_store("missing");
        assert_eq!(store.load("leaderboard_cb2").unwrap(), None);
    }

    #[test]
    fn list_returns_sorted_keys() {
        let store = scratch_store("list");
        store.save("leaderboard_s2_xbox", &json!({})).unwrap();
        store.save("leaderboard_cb1", &json!({})).unwrap();
        assert_eq!(
            store.list().unwrap(),
            vec!["leaderboard_cb1".to_string(), "leaderboard_s2_xbox".to_string()]
        );
    }

    #[test]
    fn list_on_missing_directory_is_empty() {
        let store = scratch_store("empty");
        assert!(store.list().unwrap().is_empty());
    }
}

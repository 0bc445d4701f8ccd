//! Best-run persistence
//!
//! A single record survives across runs; it is overwritten only when a
//! completed run strictly beats the stored distance. Missing or corrupt
//! stored data is treated as the zero default, and write failures are
//! logged rather than aborting run finalization.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The persisted best-run record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRun {
    /// Highest distance ever reached (meters)
    pub distance: u32,
    pub questions_answered: u32,
    pub longest_streak: u32,
    /// RFC 3339 timestamp of when the record was set; empty when unset
    #[serde(default)]
    pub date: String,
}

/// Storage port for the best-run record.
///
/// Implementations must tolerate missing or corrupt stored data (treat it as
/// the zero default) and must not panic on I/O failure.
pub trait BestRunStore {
    /// Last saved best, or the zero default if none exists.
    fn load(&self) -> BestRun;

    /// Overwrite the stored record if `candidate.distance` strictly beats
    /// it. Returns whether the candidate won the comparison; a failed write
    /// is logged, not surfaced.
    fn save_if_better(&mut self, candidate: &BestRun) -> bool;
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: Option<BestRun>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestRunStore for MemoryStore {
    fn load(&self) -> BestRun {
        self.best.clone().unwrap_or_default()
    }

    fn save_if_better(&mut self, candidate: &BestRun) -> bool {
        if candidate.distance > self.load().distance {
            self.best = Some(candidate.clone());
            true
        } else {
            false
        }
    }
}

/// JSON-file-backed store for native targets.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BestRunStore for JsonFileStore {
    fn load(&self) -> BestRun {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(best) => best,
                Err(err) => {
                    log::warn!("corrupt best-run record, using default: {err}");
                    BestRun::default()
                }
            },
            // Absent file is the normal first-run case.
            Err(_) => BestRun::default(),
        }
    }

    fn save_if_better(&mut self, candidate: &BestRun) -> bool {
        if candidate.distance <= self.load().distance {
            return false;
        }
        match serde_json::to_string(candidate) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to save best run: {err}");
                } else {
                    log::info!("best run saved ({}m)", candidate.distance);
                }
            }
            Err(err) => log::warn!("failed to encode best run: {err}"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(distance: u32) -> BestRun {
        BestRun {
            distance,
            questions_answered: distance / 10,
            longest_streak: 4,
            date: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_memory_store_strict_improvement_only() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), BestRun::default());

        assert!(store.save_if_better(&candidate(100)));
        assert_eq!(store.load().distance, 100);

        // Equal distance does not overwrite.
        let stale = candidate(100);
        assert!(!store.save_if_better(&stale));
        // Lower distance does not overwrite.
        assert!(!store.save_if_better(&candidate(50)));
        assert_eq!(store.load(), candidate(100));

        // Strictly better overwrites all fields.
        assert!(store.save_if_better(&candidate(110)));
        assert_eq!(store.load(), candidate(110));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load(), BestRun::default());

        assert!(store.save_if_better(&candidate(230)));
        // A fresh handle reads what was written.
        let reread = JsonFileStore::new(&path);
        assert_eq!(reread.load(), candidate(230));
    }

    #[test]
    fn test_file_store_corrupt_data_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load(), BestRun::default());
        // A corrupt record counts as zero, so any real run beats it.
        assert!(store.save_if_better(&candidate(10)));
        assert_eq!(store.load().distance, 10);
    }
}

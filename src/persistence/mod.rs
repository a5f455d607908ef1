//! JSON persistence for the study tracker.
//!
//! The whole tracker is stored as one pretty-printed JSON document. Timer
//! state is deliberately not persisted; only finished sessions are.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::tracker::StudyTracker;

/// File name of the tracker document under the data directory.
const TRACKER_FILE: &str = "tracker.json";

// ============================================================================
// StoreError
// ============================================================================

/// Errors raised while loading or saving the tracker file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("tracker file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a valid tracker document.
    #[error("tracker file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// JsonStore
// ============================================================================

/// Reads and writes a [`StudyTracker`] at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store bound to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default tracker location under the platform data directory,
    /// falling back to the current directory when none is known.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studytrack")
            .join(TRACKER_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the tracker; a missing file yields a fresh default tracker.
    pub fn load(&self) -> Result<StudyTracker, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no tracker file, starting fresh");
            return Ok(StudyTracker::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let tracker = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), "tracker loaded");
        Ok(tracker)
    }

    /// Saves the tracker, creating parent directories as needed.
    pub fn save(&self, tracker: &StudyTracker) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(tracker)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "tracker saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Activity;
    use crate::types::TimerSettings;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("tracker.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let (_dir, store) = temp_store();

        let tracker = store.load().unwrap();

        assert!(tracker.activities().is_empty());
        assert!(tracker.sessions().is_empty());
        assert_eq!(*tracker.timer_settings(), TimerSettings::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_dir, store) = temp_store();

        let mut tracker = StudyTracker::new();
        tracker.add_activity(Activity::new("Math").unwrap()).unwrap();
        tracker.set_timer_settings(TimerSettings::new(50, 10, 30, 2).unwrap());
        store.save(&tracker).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, tracker);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join("deep").join("tracker.json"));

        store.save(&StudyTracker::new()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not json at all").unwrap();

        let result = store.load();

        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        // A tampered file with zero work minutes must not load
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"activities":[],"sessions":[],"timerSettings":{"workMinutes":0,"shortBreakMinutes":5,"longBreakMinutes":25,"repeatsBeforeLongBreak":4}}"#,
        )
        .unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_default_path_ends_with_tracker_file() {
        let path = JsonStore::default_path();
        assert!(path.ends_with(Path::new("studytrack").join(TRACKER_FILE)));
    }
}

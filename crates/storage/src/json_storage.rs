//! JSON file storage implementation.
//!
//! Stores the whole tracker state as one pretty-printed JSON file. Each save
//! writes a sibling `.tmp` file and renames it over the target, so readers
//! never observe a half-written file.

use std::path::{Path, PathBuf};

use onegallon_core::PersistedState;
use super::{Storage, Result};
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage for `path`. Nothing is touched on disk until the
    /// first save, which also creates the parent directory.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_state(&mut self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json.as_bytes()).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        debug!(path = %self.path.display(), total = state.today_total, "state saved");
        Ok(())
    }

    async fn load_state(&self) -> Result<Option<PersistedState>> {
        read_json(&self.path).await
    }

    async fn clear(&mut self) -> Result<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;
    use chrono::NaiveDate;
    use onegallon_core::AppState;

    fn sample_state() -> PersistedState {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut state = AppState::new(today);
        state.day.push(today.and_hms_opt(8, 15, 0).unwrap(), 650.0);
        state.day.push(today.and_hms_opt(11, 40, 0).unwrap(), 500.0);
        state.history.record(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(), 3900.0);
        state.to_persisted()
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("water_tracker.json"));

        assert!(storage.load_state().await.unwrap().is_none());

        let state = sample_state();
        storage.save_state(&state).await.unwrap();
        let loaded = storage.load_state().await.unwrap().unwrap();
        assert_eq!(loaded, state);
        assert!(!storage.tmp_path().exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("water_tracker.json"));

        storage.save_state(&sample_state()).await.unwrap();
        let empty = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()).to_persisted();
        storage.save_state(&empty).await.unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["today_records"], serde_json::json!([]));
        assert_eq!(value["history"], serde_json::json!({}));
        assert_eq!(value["current_date"], "2026-10-19");
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("water_tracker.json"));
        storage.save_state(&sample_state()).await.unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("\n  \"today_total\": 1150.0"));
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let mut storage = JsonStorage::new(&path);
        storage.save_state(&sample_state()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_load_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("not-yet");
        let storage = JsonStorage::new(parent.join("state.json"));

        assert!(storage.load_state().await.unwrap().is_none());
        assert!(!parent.exists());
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water_tracker.json");
        std::fs::write(
            &path,
            r#"{
  "current_date": "2026-10-18",
  "today_total": 0,
  "today_records": [{"time": "2026-10-18 08:00:00", "amount": -650}],
  "history": {}
}"#,
        )
        .unwrap();

        let storage = JsonStorage::new(&path);
        let err = storage.load_state().await.unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("water_tracker.json"));

        assert!(!storage.clear().await.unwrap());
        storage.save_state(&sample_state()).await.unwrap();
        assert!(storage.clear().await.unwrap());
        assert!(!storage.path().exists());
        assert!(storage.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water_tracker.json");
        std::fs::write(&path, "{\"current_date\": \"2026-10-18\", \"today_total\": ").unwrap();

        let storage = JsonStorage::new(&path);
        let err = storage.load_state().await.unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[tokio::test]
    async fn test_write_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water_tracker.json");
        let mut storage = JsonStorage::new(&path);

        // A directory in place of the file makes the final rename fail.
        std::fs::create_dir(&path).unwrap();
        let err = storage.save_state(&sample_state()).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(!storage.tmp_path().exists());
    }
}

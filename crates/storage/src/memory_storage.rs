//! In-memory storage, for tests and throwaway sessions.

use onegallon_core::PersistedState;
use super::{Storage, StorageError, Result};

/// Keeps the last saved state in memory and counts writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Option<PersistedState>,
    saves: usize,
    attempts: usize,
    fail_writes: bool,
    fail_on_attempt: Option<usize>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `state`.
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Last saved state.
    pub fn stored(&self) -> Option<&PersistedState> {
        self.state.as_ref()
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make only the `n`th save attempt (counting from 1) fail.
    pub fn fail_nth_write(&mut self, n: usize) {
        self.fail_on_attempt = Some(n);
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn save_state(&mut self, state: &PersistedState) -> Result<()> {
        self.attempts += 1;
        if self.fail_writes || self.fail_on_attempt == Some(self.attempts) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    async fn load_state(&self) -> Result<Option<PersistedState>> {
        Ok(self.state.clone())
    }

    async fn clear(&mut self) -> Result<bool> {
        Ok(self.state.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use onegallon_core::AppState;

    #[tokio::test]
    async fn test_memory_storage_counts_saves() {
        let mut storage = MemoryStorage::new();
        let state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).to_persisted();

        storage.save_state(&state).await.unwrap();
        storage.save_state(&state).await.unwrap();
        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.load_state().await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).to_persisted();

        let err = storage.save_state(&state).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert_eq!(storage.save_count(), 0);
        assert!(!storage.clear().await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_storage_fails_only_nth_write() {
        let mut storage = MemoryStorage::new();
        storage.fail_nth_write(2);
        let state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).to_persisted();

        assert!(storage.save_state(&state).await.is_ok());
        assert!(storage.save_state(&state).await.is_err());
        assert!(storage.save_state(&state).await.is_ok());
        assert_eq!(storage.save_count(), 2);
    }
}

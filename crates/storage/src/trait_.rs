//! Storage trait abstraction.

use async_trait::async_trait;
use onegallon_core::PersistedState;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage abstraction for the tracker's state.
///
/// The whole state is written on every save; there are no partial updates.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Overwrite the stored state.
    async fn save_state(&mut self, state: &PersistedState) -> Result<()>;

    /// Load the stored state, `None` when nothing has been saved.
    async fn load_state(&self) -> Result<Option<PersistedState>>;

    /// Remove the stored state. Returns `true` if something was removed.
    async fn clear(&mut self) -> Result<bool>;
}

//! Storage trait abstraction.

use async_trait::async_trait;
use bloom_core::{CoreError, MoodLog, PeriodInterval};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error, including malformed dates
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record violates a data-model invariant
    #[error("invalid stored record: {0}")]
    Core(#[from] CoreError),
}

/// Storage abstraction for bloom data.
///
/// Collections are loaded and saved whole; callers own the single-writer
/// discipline.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Period operations ===

    /// Load every logged period.
    async fn load_periods(&self) -> Result<Vec<PeriodInterval>>;

    /// Replace the stored periods.
    async fn save_periods(&mut self, periods: &[PeriodInterval]) -> Result<()>;

    // === Mood operations ===

    /// Load every mood log.
    async fn load_moods(&self) -> Result<Vec<MoodLog>>;

    /// Replace the stored mood logs.
    async fn save_moods(&mut self, moods: &[MoodLog]) -> Result<()>;
}

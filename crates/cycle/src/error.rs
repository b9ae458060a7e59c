//! Tracker error type.

use bloom_core::CoreError;
use bloom_storage::StorageError;

/// Result alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors from the mutation path: validation or persistence.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A record was rejected by a data-model check
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Loading or saving failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

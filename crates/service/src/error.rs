//! Typed error enum for the service layer.

use box_tracker_core::ValidationError;
use box_tracker_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (connection, statement, corrupt row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No box with this id.
    #[error("box {id} not found")]
    NotFound { id: i32 },
}

impl ServiceError {
    /// Whether the storage backend is unreachable rather than the request being bad.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }
}

use herald_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl NotificationError {
    /// Infrastructure failures bubble up unchanged; the caller decides whether to retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_retryable(),
        }
    }
}

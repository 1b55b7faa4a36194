//! Dashboard snapshot error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while building a dashboard snapshot.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl SummaryError {
    /// Returns true if the caller may retry the snapshot unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_retryable(),
        }
    }
}

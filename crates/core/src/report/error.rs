//! Report error types.

use thiserror::Error;

use crate::period::PeriodError;
use crate::store::StoreError;

/// Errors that can occur while building a report.
///
/// A build either returns a fully populated report or fails as a whole;
/// previously displayed totals are never partially overwritten.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The requested period could not be resolved.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

impl ReportError {
    /// Returns true if the caller may retry the build unchanged.
    ///
    /// An unknown week is not retryable: the caller must re-resolve the
    /// available-week list first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_retryable(),
            Self::Period(_) => false,
        }
    }
}

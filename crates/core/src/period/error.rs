//! Period resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving a reporting period.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The requested week number is not in the current available-week list.
    ///
    /// The caller must re-resolve the available-week list before retrying.
    #[error("Week {0} is not in the available week list")]
    UnknownWeek(u32),
}

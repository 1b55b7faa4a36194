//! Weekly dashboard snapshot.

pub mod error;
pub mod service;
pub mod types;

pub use error::SummaryError;
pub use service::{DEFAULT_RECENT_LIMIT, SummaryService, snapshot_week};
pub use types::DashboardSnapshot;

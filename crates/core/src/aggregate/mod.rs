//! Bucket and period-level aggregation of financial records.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::Aggregator;
pub use types::{BucketTotals, CategoryBreakdown, PeriodTotals};

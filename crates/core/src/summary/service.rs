//! Dashboard snapshot service.

use caderneta_shared::types::TenantId;
use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use super::error::SummaryError;
use super::types::DashboardSnapshot;
use crate::aggregate::Aggregator;
use crate::period::interval::{end_of_day, start_of_day};
use crate::period::{DateRange, WeekStart};
use crate::record::FinancialRecord;
use crate::store::RecordStore;

/// Default number of recent sales/expenses carried by a snapshot.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Builds Monday-start weekly snapshots for the dashboard.
///
/// The snapshot week starts on Monday while the available-week enumerator
/// starts weeks on Sunday; the two views are specified independently and must
/// not be unified here.
pub struct SummaryService<S> {
    store: S,
    recent_limit: usize,
}

/// Returns the Monday-start week containing `now`.
#[must_use]
pub fn snapshot_week(now: NaiveDateTime) -> DateRange {
    let monday = WeekStart::Monday.start_of_week(now.date());
    DateRange::new(start_of_day(monday), end_of_day(monday + Duration::days(6)))
}

impl<S: RecordStore> SummaryService<S> {
    /// Creates a service with the default recent-activity limit.
    pub fn new(store: S) -> Self {
        Self::with_recent_limit(store, DEFAULT_RECENT_LIMIT)
    }

    /// Creates a service carrying `recent_limit` recent records per kind.
    pub fn with_recent_limit(store: S, recent_limit: usize) -> Self {
        Self {
            store,
            recent_limit,
        }
    }

    /// Builds the dashboard snapshot for the week containing `now`.
    ///
    /// All four reads are independent and run concurrently; the snapshot is
    /// only assembled once every read has completed.
    pub async fn weekly_snapshot(
        &self,
        tenant: TenantId,
        now: NaiveDateTime,
    ) -> Result<DashboardSnapshot, SummaryError> {
        let week = snapshot_week(now);

        let (sales, expenses, recent_sales, recent_expenses) = tokio::try_join!(
            self.store.fetch_sales(tenant, week),
            self.store.fetch_expenses(tenant, week),
            self.store.fetch_recent_sales(tenant, self.recent_limit),
            self.store.fetch_recent_expenses(tenant, self.recent_limit),
        )?;
        debug!(
            %tenant,
            sales = sales.len(),
            expenses = expenses.len(),
            "snapshot records fetched"
        );

        let records: Vec<FinancialRecord> = sales.into_iter().chain(expenses).collect();
        let totals = Aggregator::period_totals(&records, week);

        Ok(DashboardSnapshot {
            week,
            totals,
            recent_sales,
            recent_expenses,
        })
    }
}

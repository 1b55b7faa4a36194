//! Async report orchestration over the storage collaborator.

use std::sync::atomic::{AtomicU64, Ordering};

use caderneta_shared::types::TenantId;
use chrono::NaiveDateTime;
use tracing::debug;

use super::engine::ReportEngine;
use super::error::ReportError;
use super::types::PeriodReport;
use crate::period::{self, CalendarWeek, ReportingMode};
use crate::record::FinancialRecord;
use crate::store::RecordStore;

/// Builds reports by fetching records from a [`RecordStore`].
///
/// Sale and expense fetches are independent reads and run concurrently; the
/// build joins both before aggregating, so a report is never assembled from
/// partial results.
pub struct ReportService<S> {
    store: S,
    generation: AtomicU64,
}

impl<S: RecordStore> ReportService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// Enumerates the calendar weeks that have ever contained data.
    ///
    /// Recomputed on every call: the earliest record may have changed.
    pub async fn available_weeks(
        &self,
        tenant: TenantId,
        now: NaiveDateTime,
    ) -> Result<Vec<CalendarWeek>, ReportError> {
        let (sale, expense) = tokio::try_join!(
            self.store.earliest_sale(tenant),
            self.store.earliest_expense(tenant),
        )?;

        let earliest = [sale, expense].into_iter().flatten().min();
        Ok(period::available_weeks(earliest, now))
    }

    /// Builds a report for `mode` as of `now`.
    ///
    /// Fetches are restricted to the resolved range. Either returns a fully
    /// populated report or fails as a whole; an empty range yields all-zero
    /// totals with every bucket present.
    pub async fn build_report(
        &self,
        tenant: TenantId,
        mode: ReportingMode,
        now: NaiveDateTime,
    ) -> Result<PeriodReport, ReportError> {
        let weeks = match mode {
            ReportingMode::SpecificWeek(_) => self.available_weeks(tenant, now).await?,
            ReportingMode::RollingWeek
            | ReportingMode::RollingMonth
            | ReportingMode::RollingYear => Vec::new(),
        };
        let resolved = period::resolve(mode, now, &weeks)?;

        let (sales, expenses) = tokio::try_join!(
            self.store.fetch_sales(tenant, resolved.range),
            self.store.fetch_expenses(tenant, resolved.range),
        )?;
        debug!(
            %tenant,
            ?mode,
            sales = sales.len(),
            expenses = expenses.len(),
            "records fetched"
        );

        let records: Vec<FinancialRecord> = sales.into_iter().chain(expenses).collect();
        Ok(ReportEngine::assemble(&resolved, &records))
    }

    /// Builds a report, discarding the result if a newer `refresh` began
    /// while this one was fetching.
    ///
    /// `Ok(None)` means superseded: a later selection is in flight and this
    /// result must not replace the currently displayed report.
    pub async fn refresh(
        &self,
        tenant: TenantId,
        mode: ReportingMode,
        now: NaiveDateTime,
    ) -> Result<Option<PeriodReport>, ReportError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let report = self.build_report(tenant, mode, now).await?;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Ok(Some(report))
        } else {
            debug!(%tenant, ?mode, "stale report discarded");
            Ok(None)
        }
    }
}

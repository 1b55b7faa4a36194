//! Pure report assembly over an in-memory record set.

use chrono::NaiveDateTime;

use super::error::ReportError;
use super::types::PeriodReport;
use crate::aggregate::Aggregator;
use crate::period::{self, ReportingMode, ResolvedPeriod};
use crate::record::FinancialRecord;

/// Pure, deterministic report builder.
pub struct ReportEngine;

impl ReportEngine {
    /// Builds a complete report for `mode` as of `now` from `records`.
    ///
    /// For [`ReportingMode::SpecificWeek`] the available-week list is derived
    /// from `records` themselves. Identical inputs yield structurally
    /// identical reports; an empty record set yields all-zero totals with
    /// every bucket present.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Period`] when a specific week number does not
    /// exist for this record set.
    pub fn build(
        mode: ReportingMode,
        now: NaiveDateTime,
        records: &[FinancialRecord],
    ) -> Result<PeriodReport, ReportError> {
        let weeks = period::available_weeks(period::earliest_occurrence(records), now);
        let resolved = period::resolve(mode, now, &weeks)?;
        Ok(Self::assemble(&resolved, records))
    }

    /// Aggregates `records` into a report for an already resolved period.
    ///
    /// Period totals are computed over the full range; bucket totals over the
    /// bucket intervals. The two are independent by design (see the
    /// reconciliation notes on [`Aggregator::buckets`]).
    #[must_use]
    pub fn assemble(resolved: &ResolvedPeriod, records: &[FinancialRecord]) -> PeriodReport {
        let totals = Aggregator::period_totals(records, resolved.range);
        let buckets = Aggregator::buckets(records, &resolved.buckets);
        PeriodReport::from_parts(resolved.range, resolved.label.clone(), totals, buckets)
    }
}

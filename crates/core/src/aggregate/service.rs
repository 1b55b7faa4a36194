//! Aggregation service: pure folds from raw records to immutable summaries.

use rust_decimal::Decimal;

use super::types::{BucketTotals, PeriodTotals};
use crate::period::{DateRange, Interval};
use crate::record::{ExpenseCategory, FinancialRecord, RecordKind};

/// Service folding dated records into bucket and period totals.
pub struct Aggregator;

impl Aggregator {
    /// Computes totals for a single bucket.
    ///
    /// Only records whose `occurred_at` the interval contains participate.
    #[must_use]
    pub fn bucket_totals(records: &[FinancialRecord], interval: &Interval) -> BucketTotals {
        let (sales, expenses) = records
            .iter()
            .filter(|r| interval.contains(r.occurred_at))
            .fold(
                (Decimal::ZERO, Decimal::ZERO),
                |(sales, expenses), r| match r.kind {
                    RecordKind::Sale { .. } => (sales + r.amount, expenses),
                    RecordKind::Expense { .. } => (sales, expenses + r.amount),
                },
            );

        BucketTotals {
            interval: interval.clone(),
            sales_total: sales,
            expenses_total: expenses,
            net_total: sales - expenses,
        }
    }

    /// Computes totals for every bucket, preserving bucket order.
    ///
    /// A record falling in none of the intervals is silently excluded here;
    /// it still counts toward [`Aggregator::period_totals`] when inside the
    /// period range.
    #[must_use]
    pub fn buckets(records: &[FinancialRecord], intervals: &[Interval]) -> Vec<BucketTotals> {
        intervals
            .iter()
            .map(|interval| Self::bucket_totals(records, interval))
            .collect()
    }

    /// Computes period-level totals over the full range, independent of any
    /// bucket partitioning, with the exhaustive expense category split.
    #[must_use]
    pub fn period_totals(records: &[FinancialRecord], range: DateRange) -> PeriodTotals {
        records
            .iter()
            .filter(|r| range.contains(r.occurred_at))
            .fold(PeriodTotals::default(), |mut totals, r| {
                match &r.kind {
                    RecordKind::Sale { .. } => totals.sales_total += r.amount,
                    RecordKind::Expense { category, .. } => {
                        totals.expenses_total += r.amount;
                        match category {
                            ExpenseCategory::Fixed => totals.fixed_expense_total += r.amount,
                            ExpenseCategory::Emergency => {
                                totals.emergency_expense_total += r.amount;
                            }
                        }
                    }
                }
                totals.net_total = totals.sales_total - totals.expenses_total;
                totals
            })
    }
}

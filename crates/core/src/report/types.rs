//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::{BucketTotals, CategoryBreakdown, PeriodTotals};
use crate::period::DateRange;

/// A fully assembled reporting-period summary.
///
/// Consumed by rendering and export collaborators (line/bar/pie charts, PDF
/// rasterization); the engine assumes nothing about how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The period's overall range.
    pub range: DateRange,
    /// Display label for the period.
    pub label: String,
    /// Sum of sale amounts over the full range.
    pub sales_total: Decimal,
    /// Sum of expense amounts over the full range.
    pub expenses_total: Decimal,
    /// `sales_total - expenses_total`.
    pub net_total: Decimal,
    /// Sum of `Fixed` expense amounts over the full range.
    pub fixed_expense_total: Decimal,
    /// Sum of `Emergency` expense amounts over the full range.
    pub emergency_expense_total: Decimal,
    /// Ordered time-series buckets.
    pub buckets: Vec<BucketTotals>,
    /// Pie-chart input over the full range.
    pub category_breakdown: CategoryBreakdown,
}

impl PeriodReport {
    /// Assembles a report from period totals and bucket totals.
    pub(crate) fn from_parts(
        range: DateRange,
        label: String,
        totals: PeriodTotals,
        buckets: Vec<BucketTotals>,
    ) -> Self {
        Self {
            range,
            label,
            sales_total: totals.sales_total,
            expenses_total: totals.expenses_total,
            net_total: totals.net_total,
            fixed_expense_total: totals.fixed_expense_total,
            emergency_expense_total: totals.emergency_expense_total,
            buckets,
            category_breakdown: totals.category_breakdown(),
        }
    }
}

//! Aggregation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Interval;

/// Totals for one chart bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketTotals {
    /// The bucket interval (carries the chart label).
    pub interval: Interval,
    /// Sum of sale amounts in the bucket.
    pub sales_total: Decimal,
    /// Sum of expense amounts in the bucket.
    pub expenses_total: Decimal,
    /// `sales_total - expenses_total`.
    pub net_total: Decimal,
}

/// Period-level totals computed independently over the full range, never by
/// summing buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of sale amounts.
    pub sales_total: Decimal,
    /// Sum of expense amounts.
    pub expenses_total: Decimal,
    /// `sales_total - expenses_total`.
    pub net_total: Decimal,
    /// Sum of `Fixed` expense amounts.
    pub fixed_expense_total: Decimal,
    /// Sum of `Emergency` expense amounts.
    pub emergency_expense_total: Decimal,
}

impl PeriodTotals {
    /// Pie-chart input derived from the category split.
    #[must_use]
    pub fn category_breakdown(&self) -> CategoryBreakdown {
        CategoryBreakdown {
            fixed: self.fixed_expense_total,
            emergency: self.emergency_expense_total,
        }
    }
}

/// Expense split by category over the full range; pie-chart input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Fixed expenses.
    pub fixed: Decimal,
    /// Emergency expenses.
    pub emergency: Decimal,
}

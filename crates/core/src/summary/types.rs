//! Dashboard snapshot types.

use serde::{Deserialize, Serialize};

use crate::aggregate::PeriodTotals;
use crate::period::DateRange;
use crate::record::FinancialRecord;

/// Totals and recent activity for the Monday-start week containing "now".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The snapshot week (Monday 00:00:00.000 - Sunday 23:59:59.999).
    pub week: DateRange,
    /// Totals for the snapshot week, with the expense category split.
    pub totals: PeriodTotals,
    /// Latest sales across all time, newest first.
    pub recent_sales: Vec<FinancialRecord>,
    /// Latest expenses across all time, newest first.
    pub recent_expenses: Vec<FinancialRecord>,
}

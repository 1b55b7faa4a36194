//! Domain types for dated sale and expense records.
//!
//! Records are immutable value objects supplied by the storage collaborator;
//! the engine reads them and never writes back.

use caderneta_shared::types::RecordId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Channel a sale came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleChannel {
    /// Sold directly at the counter.
    Direct,
    /// Sold through a delivery partner.
    DeliveryPartner,
}

/// Expense category.
///
/// A closed two-valued enumeration, so the aggregator's category split is
/// exhaustive and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Recurring weekly/fixed expense.
    Fixed,
    /// Unplanned emergency expense.
    Emergency,
}

/// Kind-specific fields of a financial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    /// A sale.
    Sale {
        /// Optional product label.
        product: Option<String>,
        /// Channel the sale came through.
        channel: SaleChannel,
    },
    /// An expense.
    Expense {
        /// Free-form description.
        description: String,
        /// Expense category.
        category: ExpenseCategory,
    },
}

/// A dated sale or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Opaque identifier supplied by the storage collaborator.
    pub id: RecordId,
    /// Monetary amount (non-negative).
    pub amount: Decimal,
    /// When the sale or expense occurred.
    pub occurred_at: NaiveDateTime,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub kind: RecordKind,
}

impl FinancialRecord {
    /// Creates a sale record.
    #[must_use]
    pub fn sale(
        id: RecordId,
        amount: Decimal,
        occurred_at: NaiveDateTime,
        product: Option<String>,
        channel: SaleChannel,
    ) -> Self {
        Self {
            id,
            amount,
            occurred_at,
            kind: RecordKind::Sale { product, channel },
        }
    }

    /// Creates an expense record.
    #[must_use]
    pub fn expense(
        id: RecordId,
        amount: Decimal,
        occurred_at: NaiveDateTime,
        description: impl Into<String>,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id,
            amount,
            occurred_at,
            kind: RecordKind::Expense {
                description: description.into(),
                category,
            },
        }
    }

    /// Returns true if this record is a sale.
    #[must_use]
    pub fn is_sale(&self) -> bool {
        matches!(self.kind, RecordKind::Sale { .. })
    }

    /// Returns true if this record is an expense.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, RecordKind::Expense { .. })
    }

    /// Returns the expense category, if this record is an expense.
    #[must_use]
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        match self.kind {
            RecordKind::Expense { category, .. } => Some(category),
            RecordKind::Sale { .. } => None,
        }
    }
}

//! Financial record domain types (sales and expenses).

pub mod types;

pub use types::{ExpenseCategory, FinancialRecord, RecordKind, SaleChannel};

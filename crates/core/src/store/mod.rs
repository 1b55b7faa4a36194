//! Storage collaborator contract.
//!
//! The engine never writes; record creation and deletion are entirely
//! external. Implementations return record sets sorted by date descending,
//! matching the remote document store's query contract.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::InMemoryRecordStore;

use caderneta_shared::types::TenantId;
use chrono::NaiveDateTime;

use crate::period::DateRange;
use crate::record::FinancialRecord;

/// Read-only access to a tenant's sale and expense records.
///
/// Sale and expense queries are independent reads; callers may run them
/// concurrently.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Fetches sale records with `occurred_at` inside `range`, newest first.
    async fn fetch_sales(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError>;

    /// Fetches expense records with `occurred_at` inside `range`, newest
    /// first.
    async fn fetch_expenses(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError>;

    /// Returns the earliest sale timestamp, if any sale exists.
    async fn earliest_sale(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError>;

    /// Returns the earliest expense timestamp, if any expense exists.
    async fn earliest_expense(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError>;

    /// Fetches the `limit` most recent sale records, newest first.
    async fn fetch_recent_sales(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError>;

    /// Fetches the `limit` most recent expense records, newest first.
    async fn fetch_recent_expenses(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError>;
}

impl<S: RecordStore> RecordStore for std::sync::Arc<S> {
    async fn fetch_sales(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        (**self).fetch_sales(tenant, range).await
    }

    async fn fetch_expenses(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        (**self).fetch_expenses(tenant, range).await
    }

    async fn earliest_sale(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError> {
        (**self).earliest_sale(tenant).await
    }

    async fn earliest_expense(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError> {
        (**self).earliest_expense(tenant).await
    }

    async fn fetch_recent_sales(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        (**self).fetch_recent_sales(tenant, limit).await
    }

    async fn fetch_recent_expenses(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        (**self).fetch_recent_expenses(tenant, limit).await
    }
}

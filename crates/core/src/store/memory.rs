//! In-memory record store for tests and demos.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use caderneta_shared::types::TenantId;
use chrono::NaiveDateTime;

use super::error::StoreError;
use super::RecordStore;
use crate::period::DateRange;
use crate::record::FinancialRecord;

/// A [`RecordStore`] keeping all records in process memory.
///
/// Mirrors the remote document store's query contract (range filters on the
/// date field, results sorted by date descending) so engine tests exercise
/// the same ordering the production collaborator returns.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<TenantId, Vec<FinancialRecord>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record for `tenant`.
    pub fn insert(&self, tenant: TenantId, record: FinancialRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.entry(tenant).or_default().push(record);
    }

    /// Returns matching records for `tenant`, newest first.
    fn collect<F>(&self, tenant: TenantId, filter: F) -> Vec<FinancialRecord>
    where
        F: Fn(&FinancialRecord) -> bool,
    {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mut matched: Vec<FinancialRecord> = records
            .get(&tenant)
            .into_iter()
            .flatten()
            .filter(|r| filter(r))
            .cloned()
            .collect();
        matched.sort_by_key(|r| Reverse(r.occurred_at));
        matched
    }

    /// Returns the earliest timestamp among matching records for `tenant`.
    fn earliest<F>(&self, tenant: TenantId, filter: F) -> Option<NaiveDateTime>
    where
        F: Fn(&FinancialRecord) -> bool,
    {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .get(&tenant)
            .into_iter()
            .flatten()
            .filter(|r| filter(r))
            .map(|r| r.occurred_at)
            .min()
    }
}

impl RecordStore for InMemoryRecordStore {
    async fn fetch_sales(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        Ok(self.collect(tenant, |r| r.is_sale() && range.contains(r.occurred_at)))
    }

    async fn fetch_expenses(
        &self,
        tenant: TenantId,
        range: DateRange,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        Ok(self.collect(tenant, |r| r.is_expense() && range.contains(r.occurred_at)))
    }

    async fn earliest_sale(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError> {
        Ok(self.earliest(tenant, FinancialRecord::is_sale))
    }

    async fn earliest_expense(
        &self,
        tenant: TenantId,
    ) -> Result<Option<NaiveDateTime>, StoreError> {
        Ok(self.earliest(tenant, FinancialRecord::is_expense))
    }

    async fn fetch_recent_sales(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        let mut sales = self.collect(tenant, FinancialRecord::is_sale);
        sales.truncate(limit);
        Ok(sales)
    }

    async fn fetch_recent_expenses(
        &self,
        tenant: TenantId,
        limit: usize,
    ) -> Result<Vec<FinancialRecord>, StoreError> {
        let mut expenses = self.collect(tenant, FinancialRecord::is_expense);
        expenses.truncate(limit);
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caderneta_shared::types::RecordId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::period::interval::{end_of_day, start_of_day};
    use crate::record::{ExpenseCategory, SaleChannel};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn seeded() -> (InMemoryRecordStore, TenantId) {
        let store = InMemoryRecordStore::new();
        let tenant = TenantId::new();
        store.insert(
            tenant,
            FinancialRecord::sale(RecordId::new(), dec!(10.00), at(8, 9), None, SaleChannel::Direct),
        );
        store.insert(
            tenant,
            FinancialRecord::sale(RecordId::new(), dec!(20.00), at(10, 9), None, SaleChannel::Direct),
        );
        store.insert(
            tenant,
            FinancialRecord::expense(
                RecordId::new(),
                dec!(5.00),
                at(9, 12),
                "Gás",
                ExpenseCategory::Emergency,
            ),
        );
        (store, tenant)
    }

    #[tokio::test]
    async fn test_fetch_sales_filters_and_sorts_descending() {
        let (store, tenant) = seeded();
        let range = DateRange::new(
            start_of_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            end_of_day(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()),
        );

        let sales = store.fetch_sales(tenant, range).await.unwrap();

        assert_eq!(sales.len(), 2);
        assert!(sales[0].occurred_at > sales[1].occurred_at);
        assert!(sales.iter().all(FinancialRecord::is_sale));
    }

    #[tokio::test]
    async fn test_earliest_per_kind() {
        let (store, tenant) = seeded();

        assert_eq!(store.earliest_sale(tenant).await.unwrap(), Some(at(8, 9)));
        assert_eq!(store.earliest_expense(tenant).await.unwrap(), Some(at(9, 12)));
    }

    #[tokio::test]
    async fn test_unknown_tenant_sees_nothing() {
        let (store, _) = seeded();
        let stranger = TenantId::new();

        assert_eq!(store.earliest_sale(stranger).await.unwrap(), None);
        let recent = store.fetch_recent_sales(stranger, 5).await.unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn test_recent_honors_limit() {
        let (store, tenant) = seeded();

        let recent = store.fetch_recent_sales(tenant, 1).await.unwrap();

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].occurred_at, at(10, 9));
    }
}

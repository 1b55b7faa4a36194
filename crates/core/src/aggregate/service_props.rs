//! Property-based tests for the aggregator.
//!
//! - Period totals reconcile with a direct sum over the range
//! - Disjoint buckets count each record at most once
//! - Aggregation is idempotent

use caderneta_shared::types::RecordId;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Aggregator;
use crate::period::{ReportingMode, resolve};
use crate::record::{ExpenseCategory, FinancialRecord, SaleChannel};

/// Fixed reference "now" for the generated record sets.
fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 11)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

/// Strategy generating a record within roughly the last 40 days (some fall
/// outside every rolling range on purpose).
fn arb_record() -> impl Strategy<Value = FinancialRecord> {
    (
        any::<bool>(),
        1i64..500_000,
        0i64..41,
        0u32..86_400,
        any::<bool>(),
    )
        .prop_map(|(is_sale, cents, days_back, secs, flag)| {
            let amount = Decimal::new(cents, 2);
            let occurred_at = reference_now() - Duration::days(days_back)
                + Duration::seconds(i64::from(secs) - 43_200);
            if is_sale {
                let channel = if flag {
                    SaleChannel::Direct
                } else {
                    SaleChannel::DeliveryPartner
                };
                FinancialRecord::sale(RecordId::new(), amount, occurred_at, None, channel)
            } else {
                let category = if flag {
                    ExpenseCategory::Fixed
                } else {
                    ExpenseCategory::Emergency
                };
                FinancialRecord::expense(RecordId::new(), amount, occurred_at, "despesa", category)
            }
        })
}

/// Strategy generating a rolling reporting mode.
fn rolling_mode() -> impl Strategy<Value = ReportingMode> {
    prop_oneof![
        Just(ReportingMode::RollingWeek),
        Just(ReportingMode::RollingMonth),
        Just(ReportingMode::RollingYear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* record set, period totals SHALL equal a direct sum over the
    /// records inside the range, independent of bucket partitioning.
    #[test]
    fn prop_period_totals_reconcile(
        records in prop::collection::vec(arb_record(), 0..40),
        mode in rolling_mode(),
    ) {
        let now = reference_now();
        let resolved = resolve(mode, now, &[]).unwrap();
        let totals = Aggregator::period_totals(&records, resolved.range);

        let in_range = |r: &&FinancialRecord| resolved.range.contains(r.occurred_at);
        let expected_sales: Decimal = records.iter().filter(in_range)
            .filter(|r| r.is_sale()).map(|r| r.amount).sum();
        let expected_expenses: Decimal = records.iter().filter(in_range)
            .filter(|r| r.is_expense()).map(|r| r.amount).sum();

        prop_assert_eq!(totals.sales_total, expected_sales);
        prop_assert_eq!(totals.expenses_total, expected_expenses);
        prop_assert_eq!(totals.net_total, expected_sales - expected_expenses);
        prop_assert_eq!(
            totals.fixed_expense_total + totals.emergency_expense_total,
            expected_expenses
        );
    }

    /// *For any* record set, disjoint buckets SHALL count each record at most
    /// once: the bucket sum equals the sum over records contained in some
    /// bucket.
    #[test]
    fn prop_disjoint_buckets_count_records_once(
        records in prop::collection::vec(arb_record(), 0..40),
        mode in rolling_mode(),
    ) {
        let now = reference_now();
        let resolved = resolve(mode, now, &[]).unwrap();
        let buckets = Aggregator::buckets(&records, &resolved.buckets);

        for record in &records {
            let memberships = resolved.buckets.iter()
                .filter(|b| b.contains(record.occurred_at))
                .count();
            prop_assert!(memberships <= 1, "a record may fall in at most one bucket");
        }

        let bucket_sales: Decimal = buckets.iter().map(|b| b.sales_total).sum();
        let expected: Decimal = records.iter()
            .filter(|r| r.is_sale())
            .filter(|r| resolved.buckets.iter().any(|b| b.contains(r.occurred_at)))
            .map(|r| r.amount)
            .sum();
        prop_assert_eq!(bucket_sales, expected);
    }

    /// Aggregation is idempotent for identical inputs.
    #[test]
    fn prop_aggregation_idempotent(
        records in prop::collection::vec(arb_record(), 0..20),
    ) {
        let now = reference_now();
        let resolved = resolve(ReportingMode::RollingWeek, now, &[]).unwrap();

        let first = Aggregator::buckets(&records, &resolved.buckets);
        let second = Aggregator::buckets(&records, &resolved.buckets);
        prop_assert_eq!(first, second);

        let totals_first = Aggregator::period_totals(&records, resolved.range);
        let totals_second = Aggregator::period_totals(&records, resolved.range);
        prop_assert_eq!(totals_first, totals_second);
    }
}

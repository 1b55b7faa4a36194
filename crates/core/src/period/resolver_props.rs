//! Property-based tests for the period resolver.
//!
//! - Buckets are ordered and pairwise non-overlapping
//! - Rolling bucket boundaries never extend past "now"
//! - Bucket counts are fixed per mode
//! - Specific weeks keep their own fixed bounds

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use super::resolver::{ReportingMode, resolve};
use super::weeks::available_weeks;

/// Strategy generating an arbitrary "now" across roughly a decade.
fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..4000, 0u32..86_400).prop_map(|(days, secs)| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::days(days)
            + Duration::seconds(i64::from(secs))
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

    /// *For any* now and rolling mode, buckets SHALL be ordered by start and
    /// pairwise non-overlapping.
    #[test]
    fn prop_buckets_ordered_and_disjoint(now in arb_now(), mode in rolling_mode()) {
        let resolved = resolve(mode, now, &[]).unwrap();

        for pair in resolved.buckets.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
            prop_assert!(pair[0].end < pair[1].start, "buckets must not overlap");
        }
    }

    /// *For any* now and rolling mode, the range SHALL end at now and no
    /// bucket boundary SHALL extend past it.
    #[test]
    fn prop_rolling_buckets_clamped_to_now(now in arb_now(), mode in rolling_mode()) {
        let resolved = resolve(mode, now, &[]).unwrap();

        prop_assert_eq!(resolved.range.end, now);
        for bucket in &resolved.buckets {
            prop_assert!(bucket.start <= bucket.end);
            prop_assert!(bucket.end <= now);
        }
    }

    /// Bucket counts are fixed per mode: 7 daily, 5 weekly, 12 monthly.
    #[test]
    fn prop_bucket_counts(now in arb_now()) {
        prop_assert_eq!(resolve(ReportingMode::RollingWeek, now, &[]).unwrap().buckets.len(), 7);
        prop_assert_eq!(resolve(ReportingMode::RollingMonth, now, &[]).unwrap().buckets.len(), 5);
        prop_assert_eq!(resolve(ReportingMode::RollingYear, now, &[]).unwrap().buckets.len(), 12);
    }

    /// *For any* enumerated week, resolving it SHALL return the week's own
    /// fixed bounds and exactly 7 daily buckets, regardless of now.
    #[test]
    fn prop_specific_week_keeps_fixed_bounds(now in arb_now(), weeks_back in 0i64..20) {
        let earliest = now - Duration::days(weeks_back * 7);
        let weeks = available_weeks(Some(earliest), now);
        prop_assert!(!weeks.is_empty());

        for week in &weeks {
            let resolved = resolve(ReportingMode::SpecificWeek(week.number), now, &weeks).unwrap();
            prop_assert_eq!(resolved.range.start, week.start);
            prop_assert_eq!(resolved.range.end, week.end);
            prop_assert_eq!(resolved.buckets.len(), 7);
        }
    }

    /// Resolution is idempotent for identical inputs.
    #[test]
    fn prop_resolution_idempotent(now in arb_now(), mode in rolling_mode()) {
        let first = resolve(mode, now, &[]).unwrap();
        let second = resolve(mode, now, &[]).unwrap();
        prop_assert_eq!(first, second);
    }
}

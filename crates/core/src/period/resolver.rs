//! Period resolution: reporting mode to concrete range plus ordered buckets.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::interval::{DateRange, Interval, end_of_day, start_of_day};
use super::weeks::CalendarWeek;

/// Abbreviated pt-BR month names, indexed by `month0`.
const MONTH_ABBREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Days covered by a rolling week.
const ROLLING_WEEK_DAYS: i64 = 7;
/// Days covered by a rolling month.
const ROLLING_MONTH_DAYS: i64 = 30;
/// Weekly buckets in a rolling month: ceil(30 / 7).
const ROLLING_MONTH_BUCKETS: i64 = (ROLLING_MONTH_DAYS + 6) / 7;
/// Monthly buckets in a rolling year.
const ROLLING_YEAR_MONTHS: u32 = 12;

/// Reporting mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingMode {
    /// Last 7 calendar days ending today, in daily buckets.
    RollingWeek,
    /// Last 30 calendar days ending today, in weekly buckets.
    RollingMonth,
    /// Last 12 calendar months ending with the current month, in monthly
    /// buckets.
    RollingYear,
    /// A fixed Sunday-start week picked from the available-week list.
    SpecificWeek(u32),
}

/// A resolved reporting period: overall range plus ordered chart buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    /// Overall period range; storage fetches are restricted to it.
    pub range: DateRange,
    /// Ordered, pairwise non-overlapping buckets.
    pub buckets: Vec<Interval>,
    /// Display label for the period as a whole.
    pub label: String,
}

/// Resolves `mode` as of `now` into a concrete range and bucket list.
///
/// `available_weeks` is only consulted for [`ReportingMode::SpecificWeek`];
/// rolling modes ignore it. Resolution is pure: identical inputs produce
/// structurally identical output.
///
/// For rolling modes `range.end` is always `now` and no bucket end extends
/// past `now` (the final bucket is truncated). A specific week bypasses the
/// clamp entirely: its range is the week's own fixed start/end regardless of
/// `now`.
///
/// # Errors
///
/// Returns [`PeriodError::UnknownWeek`] when a specific week number is not
/// present in `available_weeks`.
pub fn resolve(
    mode: ReportingMode,
    now: NaiveDateTime,
    available_weeks: &[CalendarWeek],
) -> Result<ResolvedPeriod, PeriodError> {
    match mode {
        ReportingMode::RollingWeek => Ok(rolling_week(now)),
        ReportingMode::RollingMonth => Ok(rolling_month(now)),
        ReportingMode::RollingYear => Ok(rolling_year(now)),
        ReportingMode::SpecificWeek(number) => {
            let week = available_weeks
                .iter()
                .find(|w| w.number == number)
                .ok_or(PeriodError::UnknownWeek(number))?;
            Ok(specific_week(week))
        }
    }
}

/// Seven daily buckets covering the six prior days plus today.
fn rolling_week(now: NaiveDateTime) -> ResolvedPeriod {
    let today = now.date();
    let buckets = (0..ROLLING_WEEK_DAYS)
        .map(|i| {
            let date = today - Duration::days(ROLLING_WEEK_DAYS - 1 - i);
            Interval::new(start_of_day(date), end_of_day(date).min(now), day_label(date))
        })
        .collect();

    ResolvedPeriod {
        range: DateRange::new(now - Duration::days(ROLLING_WEEK_DAYS), now),
        buckets,
        label: "Últimos 7 dias".to_string(),
    }
}

/// Five weekly buckets walking forward from 30 days ago.
///
/// The final bucket would end four days into the future and is truncated at
/// `now`, so it may cover fewer than 7 days.
fn rolling_month(now: NaiveDateTime) -> ResolvedPeriod {
    let today = now.date();
    let buckets = (0..ROLLING_MONTH_BUCKETS)
        .map(|i| {
            let start_date = today - Duration::days(ROLLING_MONTH_DAYS - i * 7);
            let end = end_of_day(start_date + Duration::days(6)).min(now);
            Interval::new(start_of_day(start_date), end, format!("Semana {}", i + 1))
        })
        .collect();

    ResolvedPeriod {
        range: DateRange::new(now - Duration::days(ROLLING_MONTH_DAYS), now),
        buckets,
        label: "Últimos 30 dias".to_string(),
    }
}

/// Twelve monthly buckets aligned to calendar month boundaries.
fn rolling_year(now: NaiveDateTime) -> ResolvedPeriod {
    let buckets = (0..ROLLING_YEAR_MONTHS)
        .map(|i| {
            let first = month_start_back(now.date(), ROLLING_YEAR_MONTHS - 1 - i);
            let end = end_of_day(last_day_of_month(first)).min(now);
            let month_idx = usize::try_from(first.month0()).unwrap_or(0);
            Interval::new(start_of_day(first), end, MONTH_ABBREV[month_idx])
        })
        .collect();

    let start = now
        .checked_sub_months(Months::new(ROLLING_YEAR_MONTHS))
        .unwrap_or(now);

    ResolvedPeriod {
        range: DateRange::new(start, now),
        buckets,
        label: "Últimos 12 meses".to_string(),
    }
}

/// Seven full-day buckets over a fixed calendar week; never clamped.
fn specific_week(week: &CalendarWeek) -> ResolvedPeriod {
    let first = week.start.date();
    let buckets = (0..ROLLING_WEEK_DAYS)
        .map(|i| {
            let date = first + Duration::days(i);
            Interval::full_day(date, day_label(date))
        })
        .collect();

    ResolvedPeriod {
        range: week.range(),
        buckets,
        label: week.label.clone(),
    }
}

/// Chart label for a daily bucket: non-padded `D/M`.
fn day_label(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

/// First day of the month `months` before the month containing `date`.
fn month_start_back(date: NaiveDate, months: u32) -> NaiveDate {
    let months0 = date.year() * 12 + i32::try_from(date.month0()).unwrap_or(0)
        - i32::try_from(months).unwrap_or(0);
    let year = months0.div_euclid(12);
    let month = u32::try_from(months0.rem_euclid(12)).unwrap_or(0) + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Last day of the month containing `first` (expects the month's first day).
fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_first.map_or(first, |d| d - Duration::days(1))
}

//! Interval value type and date normalization helpers.
//!
//! Every bucket boundary is normalized to start-of-day 00:00:00.000 or
//! end-of-day 23:59:59.999, so date-only granularity is exact regardless of
//! the time-of-day carried by stored records.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Last representable instant of a day at millisecond precision.
const DAY_END: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(t) => t,
    None => panic!("invalid day-end time"),
};

/// Returns the first instant of `date` (00:00:00.000).
#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Returns the last instant of `date` (23:59:59.999).
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(DAY_END)
}

/// Formats a date as `dd/mm/yyyy`, the product's display convention.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Week-start policy.
///
/// Two conventions coexist deliberately: the available-week enumerator and
/// specific-week reports run Sunday through Saturday, while the weekly
/// dashboard snapshot runs Monday through Sunday. The two views were
/// specified independently; do not unify them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday through Saturday.
    Sunday,
    /// Weeks run Monday through Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the first day of the week containing `date` under this policy.
    #[must_use]
    pub fn start_of_week(self, date: NaiveDate) -> NaiveDate {
        let days_back = match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        };
        date - Duration::days(i64::from(days_back))
    }
}

/// A labeled interval of instants, inclusive at both ends - one bucket of a
/// reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// First instant covered (inclusive).
    pub start: NaiveDateTime,
    /// Last instant covered (inclusive).
    pub end: NaiveDateTime,
    /// Display label for charts.
    pub label: String,
}

impl Interval {
    /// Creates an interval. `start` must not be after `end`.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, label: impl Into<String>) -> Self {
        debug_assert!(start <= end, "interval start after end");
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Creates an interval spanning a single full day.
    #[must_use]
    pub fn full_day(date: NaiveDate, label: impl Into<String>) -> Self {
        Self::new(start_of_day(date), end_of_day(date), label)
    }

    /// Returns true if `instant` falls within this interval.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// The overall start/end of a reporting period, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant (inclusive).
    pub start: NaiveDateTime,
    /// Last instant (inclusive).
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates a range. `start` must not be after `end`.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end, "range start after end");
        Self { start, end }
    }

    /// Returns true if `instant` falls within this range.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

//! Available-week enumeration.
//!
//! Derives the full list of Sunday-start calendar weeks from the earliest
//! known record up to "now". The list is recomputed whenever the earliest
//! record could have changed; week numbers are stable only within one
//! computed list.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::interval::{DateRange, WeekStart, end_of_day, format_date, start_of_day};
use crate::record::FinancialRecord;

/// One Sunday-start calendar week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// 1-based position in the enumerated list.
    pub number: u32,
    /// Sunday 00:00:00.000.
    pub start: NaiveDateTime,
    /// Saturday 23:59:59.999.
    pub end: NaiveDateTime,
    /// Display label, e.g. `Semana 3 (12/01/2026 - 18/01/2026)`.
    pub label: String,
}

impl CalendarWeek {
    /// Returns the week's fixed start/end as a range.
    #[must_use]
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Returns the earliest `occurred_at` across `records`, if any.
#[must_use]
pub fn earliest_occurrence(records: &[FinancialRecord]) -> Option<NaiveDateTime> {
    records.iter().map(|r| r.occurred_at).min()
}

/// Enumerates every Sunday-start week from the one containing `earliest` up
/// to the one containing `now`.
///
/// With no data the list is empty. The last emitted week always contains
/// `now`; its end may lie after `now` - the enumerator never truncates, only
/// the rolling buckets of the period resolver do.
#[must_use]
pub fn available_weeks(earliest: Option<NaiveDateTime>, now: NaiveDateTime) -> Vec<CalendarWeek> {
    let Some(earliest) = earliest else {
        return Vec::new();
    };

    let mut start = start_of_day(WeekStart::Sunday.start_of_week(earliest.date()));
    let mut weeks = Vec::new();
    let mut number = 1u32;

    while start <= now {
        let end_date = start.date() + Duration::days(6);
        weeks.push(CalendarWeek {
            number,
            start,
            end: end_of_day(end_date),
            label: format!(
                "Semana {number} ({} - {})",
                format_date(start.date()),
                format_date(end_date)
            ),
        });
        start += Duration::days(7);
        number += 1;
    }

    weeks
}

/// Default selection for a consumer with no explicit choice: the most recent
/// week.
#[must_use]
pub fn default_week(weeks: &[CalendarWeek]) -> Option<&CalendarWeek> {
    weeks.last()
}

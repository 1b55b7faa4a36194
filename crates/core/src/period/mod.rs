//! Interval model, period resolution, and available-week enumeration.

pub mod error;
pub mod interval;
pub mod resolver;
pub mod weeks;

#[cfg(test)]
mod resolver_props;

pub use error::PeriodError;
pub use interval::{DateRange, Interval, WeekStart};
pub use resolver::{ReportingMode, ResolvedPeriod, resolve};
pub use weeks::{CalendarWeek, available_weeks, default_week, earliest_occurrence};

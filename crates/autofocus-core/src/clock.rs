//! Caller-resolved local time snapshots.
//!
//! The core never reads the system clock on its own. Callers resolve "now"
//! into a [`LocalMoment`] -- weekday, minutes since midnight, and calendar
//! date, all in the caller's local time zone -- and pass it in. This keeps
//! every decision function deterministic and testable.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Minutes in a day, exclusive upper bound for [`LocalMoment::minutes`].
pub const MINUTES_PER_DAY: u16 = 1440;

/// A point in caller-local wall-clock time, resolved to the granularity the
/// core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    /// Day of week.
    pub weekday: Weekday,
    /// Minutes since local midnight (0..=1439).
    pub minutes: u16,
    /// Local calendar date.
    pub date: NaiveDate,
}

impl LocalMoment {
    /// Build a moment from parts. Minutes are clamped into range.
    pub fn new(weekday: Weekday, minutes: u16, date: NaiveDate) -> Self {
        Self {
            weekday,
            minutes: minutes.min(MINUTES_PER_DAY - 1),
            date,
        }
    }

    /// Resolve a naive local datetime into a moment.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            weekday: dt.weekday(),
            minutes: (dt.hour() * 60 + dt.minute()) as u16,
            date: dt.date(),
        }
    }

    /// Resolve the current local wall-clock time. For callers (the CLI)
    /// that do want the real clock; library code takes moments as input.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Day of week as 0..=6 with 0 = Sunday, the numbering used by the
    /// persisted schedule document.
    pub fn weekday_index(&self) -> u8 {
        self.weekday.num_days_from_sunday() as u8
    }

    /// ISO date string, `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// ISO-8601 week key for a date, `YYYY-Www` (Monday-start weeks, week
/// zero-padded so lexicographic order matches chronological order).
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Month key for a date, `YYYY-MM`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

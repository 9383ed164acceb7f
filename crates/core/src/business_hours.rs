//! Weekly business-hours schedule resolution.
//!
//! A location's schedule is a set of (weekday, open, close) entries in the
//! location's local timezone. Resolution picks the entry for a weekday, or
//! falls back to a near-full-day default when the weekday is unconfigured.

use chrono::{NaiveTime, Weekday};

// ---------------------------------------------------------------------------
// Default interval
// ---------------------------------------------------------------------------

/// Default local opening time for unconfigured weekdays (midnight).
pub fn default_open() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

/// Default local closing time for unconfigured weekdays.
///
/// Deliberately 23:59:59, not end-of-day: the trailing second of an
/// unconfigured day is outside business hours and is never accounted as
/// either uptime or downtime.
pub fn default_close() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap()
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A local open/close interval for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInterval {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// One configured schedule entry. `weekday` is 0 = Monday .. 6 = Sunday,
/// matching the ingested data and the local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub weekday: u8,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// A location's full weekly schedule.
///
/// Entries are sorted on construction by (weekday, open, close), so when
/// several entries exist for the same weekday the earliest-opening one wins.
/// Resolution is therefore deterministic for identical inputs.
#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule {
    entries: Vec<ScheduleEntry>,
}

impl WeeklySchedule {
    pub fn new(mut entries: Vec<ScheduleEntry>) -> Self {
        entries.sort_by_key(|e| (e.weekday, e.open, e.close));
        Self { entries }
    }

    /// An empty schedule: every weekday resolves to the default interval.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve the open/close interval for a weekday.
    ///
    /// Always returns a value; unconfigured weekdays get 00:00:00-23:59:59.
    pub fn resolve(&self, weekday: Weekday) -> DayInterval {
        let index = weekday.num_days_from_monday() as u8;
        self.entries
            .iter()
            .find(|e| e.weekday == index)
            .map(|e| DayInterval {
                open: e.open,
                close: e.close,
            })
            .unwrap_or(DayInterval {
                open: default_open(),
                close: default_close(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Report windows, per-location rows, and CSV rendering.

use chrono::Duration;

use crate::types::{DbId, Timestamp};
use crate::uptime::UptimeTotals;

/// Divisor applied to the day/week minute totals before storage.
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// The three trailing windows of one report run, all ending at `as_of`.
#[derive(Debug, Clone, Copy)]
pub struct ReportWindows {
    pub as_of: Timestamp,
}

impl ReportWindows {
    pub fn new(as_of: Timestamp) -> Self {
        Self { as_of }
    }

    /// `[as_of - 1 hour, as_of)`.
    pub fn last_hour(&self) -> (Timestamp, Timestamp) {
        (self.as_of - Duration::hours(1), self.as_of)
    }

    /// `[as_of - 1 day, as_of)`.
    pub fn last_day(&self) -> (Timestamp, Timestamp) {
        (self.as_of - Duration::days(1), self.as_of)
    }

    /// `[as_of - 1 week, as_of)`. Also the widest range, used to batch-load
    /// observations once per location for all three windows.
    pub fn last_week(&self) -> (Timestamp, Timestamp) {
        (self.as_of - Duration::weeks(1), self.as_of)
    }
}

/// Estimator totals for the three windows of one location.
#[derive(Debug, Clone, Copy)]
pub struct WindowTotals {
    pub hour: UptimeTotals,
    pub day: UptimeTotals,
    pub week: UptimeTotals,
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One finished report row.
///
/// The hour-window values are minutes; the day- and week-window values are
/// the estimator's minute totals divided by 60 (hours), matching the
/// report format the consumers expect.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    pub location_id: DbId,
    /// Minutes.
    pub uptime_last_hour: f64,
    /// Hours.
    pub uptime_last_day: f64,
    /// Hours.
    pub uptime_last_week: f64,
    /// Minutes.
    pub downtime_last_hour: f64,
    /// Hours.
    pub downtime_last_day: f64,
    /// Hours.
    pub downtime_last_week: f64,
}

impl LocationReport {
    /// Apply the unit transform: hour totals pass through, day and week
    /// totals are converted from minutes to hours.
    pub fn from_windows(location_id: DbId, totals: &WindowTotals) -> Self {
        Self {
            location_id,
            uptime_last_hour: totals.hour.uptime_minutes,
            uptime_last_day: totals.day.uptime_minutes / MINUTES_PER_HOUR,
            uptime_last_week: totals.week.uptime_minutes / MINUTES_PER_HOUR,
            downtime_last_hour: totals.hour.downtime_minutes,
            downtime_last_day: totals.day.downtime_minutes / MINUTES_PER_HOUR,
            downtime_last_week: totals.week.downtime_minutes / MINUTES_PER_HOUR,
        }
    }
}

// ---------------------------------------------------------------------------
// CSV rendering
// ---------------------------------------------------------------------------

/// Fixed column header of the rendered report.
pub const CSV_HEADER: &str = "location_id,uptime_last_hour,uptime_last_day,uptime_last_week,downtime_last_hour,downtime_last_day,downtime_last_week";

/// Render completed rows as CSV, ordered by ascending location id.
pub fn render_csv(rows: &[LocationReport]) -> String {
    let mut sorted: Vec<&LocationReport> = rows.iter().collect();
    sorted.sort_by_key(|r| r.location_id);

    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + sorted.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in sorted {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            row.location_id,
            row.uptime_last_hour,
            row.uptime_last_day,
            row.uptime_last_week,
            row.downtime_last_hour,
            row.downtime_last_day,
            row.downtime_last_week,
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

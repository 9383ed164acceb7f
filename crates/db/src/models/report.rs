//! Report and report-row entity models.

use serde::Serialize;
use sqlx::FromRow;
use storewatch_core::report::LocationReport;
use storewatch_core::types::{DbId, Timestamp};
use uuid::Uuid;

use super::status::StatusId;

/// A row from the `reports` table: one report run.
///
/// Created with status Running before any rows are written; transitions to
/// Complete after the last location, or Failed with an `error_message`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: Uuid,
    pub status_id: StatusId,
    /// Reference instant all three trailing windows end at.
    pub as_of: Timestamp,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// A row from the `report_rows` table: one location's finished numbers.
///
/// Hour-window values are minutes; day- and week-window values are hours.
/// Rows are write-once and provisional until the owning report completes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportRow {
    pub id: DbId,
    pub report_id: Uuid,
    pub location_id: DbId,
    pub uptime_last_hour: f64,
    pub uptime_last_day: f64,
    pub uptime_last_week: f64,
    pub downtime_last_hour: f64,
    pub downtime_last_day: f64,
    pub downtime_last_week: f64,
    pub created_at: Timestamp,
}

impl ReportRow {
    /// Project the stored row back into the renderer's input type.
    pub fn to_location_report(&self) -> LocationReport {
        LocationReport {
            location_id: self.location_id,
            uptime_last_hour: self.uptime_last_hour,
            uptime_last_day: self.uptime_last_day,
            uptime_last_week: self.uptime_last_week,
            downtime_last_hour: self.downtime_last_hour,
            downtime_last_day: self.downtime_last_day,
            downtime_last_week: self.downtime_last_week,
        }
    }
}

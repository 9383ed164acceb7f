//! Business-hours entity model and ingestion DTO.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storewatch_core::business_hours::{ScheduleEntry, WeeklySchedule};
use storewatch_core::types::{DbId, Timestamp};

/// A row from the `business_hours` table. `day_of_week` is 0 = Monday ..
/// 6 = Sunday in the location's local calendar.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessHours {
    pub id: DbId,
    pub location_id: DbId,
    pub day_of_week: i16,
    pub open_time_local: NaiveTime,
    pub close_time_local: NaiveTime,
    pub created_at: Timestamp,
}

/// DTO for inserting a business-hours entry from the schedule feed.
#[derive(Debug, Deserialize)]
pub struct CreateBusinessHours {
    pub location_id: DbId,
    pub day_of_week: i16,
    pub open_time_local: NaiveTime,
    pub close_time_local: NaiveTime,
}

/// Build a location's weekly schedule from its stored rows.
pub fn weekly_schedule(rows: &[BusinessHours]) -> WeeklySchedule {
    WeeklySchedule::new(
        rows.iter()
            .map(|r| ScheduleEntry {
                weekday: r.day_of_week as u8,
                open: r.open_time_local,
                close: r.close_time_local,
            })
            .collect(),
    )
}

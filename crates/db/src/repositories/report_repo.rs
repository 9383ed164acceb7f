//! Repository for the `reports` and `report_rows` tables.
//!
//! Uses `ReportStatus` from `models::status` for all status transitions.

use sqlx::PgPool;
use storewatch_core::report::LocationReport;
use storewatch_core::types::Timestamp;
use uuid::Uuid;

use crate::models::report::{Report, ReportRow};
use crate::models::status::ReportStatus;

/// Column list for `reports` queries.
const REPORT_COLUMNS: &str = "id, status_id, as_of, error_message, created_at, completed_at";

/// Column list for `report_rows` queries.
const ROW_COLUMNS: &str = "\
    id, report_id, location_id, \
    uptime_last_hour, uptime_last_day, uptime_last_week, \
    downtime_last_hour, downtime_last_day, downtime_last_week, \
    created_at";

/// Provides report lifecycle writes and poll reads.
pub struct ReportRepo;

impl ReportRepo {
    /// Create a report run with a fresh ID and status Running.
    ///
    /// The Running record is visible to pollers before any row is written.
    pub async fn create(pool: &PgPool, as_of: Timestamp) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (id, status_id, as_of) \
             VALUES ($1, $2, $3) \
             RETURNING {REPORT_COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(Uuid::new_v4())
            .bind(ReportStatus::Running.id())
            .bind(as_of)
            .fetch_one(pool)
            .await
    }

    /// Persist one location's finished numbers. Rows are write-once.
    pub async fn append_row(
        pool: &PgPool,
        report_id: Uuid,
        row: &LocationReport,
    ) -> Result<ReportRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO report_rows \
                 (report_id, location_id, \
                  uptime_last_hour, uptime_last_day, uptime_last_week, \
                  downtime_last_hour, downtime_last_day, downtime_last_week) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ROW_COLUMNS}"
        );
        sqlx::query_as::<_, ReportRow>(&query)
            .bind(report_id)
            .bind(row.location_id)
            .bind(row.uptime_last_hour)
            .bind(row.uptime_last_day)
            .bind(row.uptime_last_week)
            .bind(row.downtime_last_hour)
            .bind(row.downtime_last_day)
            .bind(row.downtime_last_week)
            .fetch_one(pool)
            .await
    }

    /// Transition a run to Complete. The last write of a successful run.
    pub async fn set_complete(pool: &PgPool, report_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE reports SET status_id = $2, completed_at = NOW() WHERE id = $1")
            .bind(report_id)
            .bind(ReportStatus::Complete.id())
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Transition a run to Failed with a reason.
    pub async fn set_failed(
        pool: &PgPool,
        report_id: Uuid,
        reason: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE reports \
             SET status_id = $2, error_message = $3, completed_at = NOW() \
             WHERE id = $1",
        )
        .bind(report_id)
        .bind(ReportStatus::Failed.id())
        .bind(reason)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a report run by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a run's rows ordered by ascending location ID, the documented
    /// rendering order.
    pub async fn list_rows(pool: &PgPool, report_id: Uuid) -> Result<Vec<ReportRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ROW_COLUMNS} FROM report_rows \
             WHERE report_id = $1 \
             ORDER BY location_id"
        );
        sqlx::query_as::<_, ReportRow>(&query)
            .bind(report_id)
            .fetch_all(pool)
            .await
    }
}

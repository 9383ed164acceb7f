//! Repository for the `business_hours` table.

use sqlx::PgPool;
use storewatch_core::types::DbId;

use crate::models::business_hours::{BusinessHours, CreateBusinessHours};

/// Column list for `business_hours` queries.
const COLUMNS: &str = "id, location_id, day_of_week, open_time_local, close_time_local, created_at";

/// Provides schedule ingestion and per-location retrieval.
pub struct BusinessHoursRepo;

impl BusinessHoursRepo {
    /// Insert a schedule entry.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBusinessHours,
    ) -> Result<BusinessHours, sqlx::Error> {
        let query = format!(
            "INSERT INTO business_hours (location_id, day_of_week, open_time_local, close_time_local) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusinessHours>(&query)
            .bind(input.location_id)
            .bind(input.day_of_week)
            .bind(input.open_time_local)
            .bind(input.close_time_local)
            .fetch_one(pool)
            .await
    }

    /// List a location's schedule entries.
    ///
    /// Ordered by (day, open, close, id) so duplicate weekday entries
    /// resolve the same way on every run.
    pub async fn list_for_location(
        pool: &PgPool,
        location_id: DbId,
    ) -> Result<Vec<BusinessHours>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM business_hours \
             WHERE location_id = $1 \
             ORDER BY day_of_week, open_time_local, close_time_local, id"
        );
        sqlx::query_as::<_, BusinessHours>(&query)
            .bind(location_id)
            .fetch_all(pool)
            .await
    }
}

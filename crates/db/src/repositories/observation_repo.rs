//! Repository for the `status_observations` table.

use sqlx::PgPool;
use storewatch_core::observations::ACTIVE_STATUS;
use storewatch_core::types::{DbId, Timestamp};

use crate::models::observation::{CreateStatusObservation, StatusObservation};

/// Column list for `status_observations` queries.
const COLUMNS: &str = "id, location_id, observed_at, status, created_at";

/// Provides observation ingestion and the active-instant range query the
/// report runner batches per location.
pub struct ObservationRepo;

impl ObservationRepo {
    /// Insert an observation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStatusObservation,
    ) -> Result<StatusObservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO status_observations (location_id, observed_at, status) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusObservation>(&query)
            .bind(input.location_id)
            .bind(input.observed_at)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Instants of all `"active"` observations for a location in
    /// `[start, end)`, ordered ascending.
    ///
    /// One call per location per report run replaces an existence query
    /// per hourly slice; the in-memory scan has identical semantics.
    pub async fn list_active_in_range(
        pool: &PgPool,
        location_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT observed_at FROM status_observations \
             WHERE location_id = $1 AND status = $2 \
               AND observed_at >= $3 AND observed_at < $4 \
             ORDER BY observed_at",
        )
        .bind(location_id)
        .bind(ACTIVE_STATUS)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }
}

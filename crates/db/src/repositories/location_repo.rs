//! Repository for the `locations` table.

use sqlx::PgPool;
use storewatch_core::types::DbId;

use crate::models::location::{Location, UpsertLocation, DEFAULT_TIMEZONE};

/// Column list for `locations` queries.
const COLUMNS: &str = "id, timezone_str, created_at, updated_at";

/// Provides catalog access and ingestion upserts for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Create a location or update its timezone if it already exists.
    ///
    /// A missing timezone in the feed falls back to the default rather
    /// than overwriting a previously ingested value with NULL.
    pub async fn upsert(pool: &PgPool, input: &UpsertLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (id, timezone_str) \
             VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE \
                 SET timezone_str = EXCLUDED.timezone_str, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(input.id)
            .bind(input.timezone_str.as_deref().unwrap_or(DEFAULT_TIMEZONE))
            .fetch_one(pool)
            .await
    }

    /// Find a location by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full catalog, ordered by ID so report runs enumerate
    /// locations deterministically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }
}

//! Status observation entity model and ingestion DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storewatch_core::types::{DbId, Timestamp};

/// A row from the `status_observations` table: one point-in-time status
/// reading for a location. Only the literal status `"active"` counts as
/// active; the value is stored verbatim.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusObservation {
    pub id: DbId,
    pub location_id: DbId,
    pub observed_at: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting an observation from the status feed.
#[derive(Debug, Deserialize)]
pub struct CreateStatusObservation {
    pub location_id: DbId,
    pub observed_at: Timestamp,
    pub status: String,
}

//! Location entity model and ingestion DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storewatch_core::types::{DbId, Timestamp};

/// Fallback IANA timezone for locations ingested without one.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// A row from the `locations` table. Identifiers come from the ingested
/// data; the reporting engine treats the catalog as read-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub timezone_str: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or updating a location from the timezone feed.
#[derive(Debug, Deserialize)]
pub struct UpsertLocation {
    pub id: DbId,
    /// Missing timezone falls back to [`DEFAULT_TIMEZONE`].
    pub timezone_str: Option<String>,
}

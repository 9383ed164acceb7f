//! Route definitions for the `/ingest` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::ingest;
use crate::state::AppState;

/// Routes mounted at `/ingest`.
///
/// ```text
/// POST   /timezones        -> ingest_timezones
/// POST   /business-hours   -> ingest_business_hours
/// POST   /observations     -> ingest_observations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timezones", post(ingest::ingest_timezones))
        .route("/business-hours", post(ingest::ingest_business_hours))
        .route("/observations", post(ingest::ingest_observations))
}

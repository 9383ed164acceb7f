pub mod health;
pub mod ingest;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reports                      trigger report run (POST)
/// /reports/{id}                 poll status / download CSV (GET)
///
/// /ingest/timezones             location timezone feed (POST)
/// /ingest/business-hours        weekly schedule feed (POST)
/// /ingest/observations          status observation feed (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/reports", reports::router())
        .nest("/ingest", ingest::router())
}

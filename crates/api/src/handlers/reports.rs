//! Handlers for the `/reports` resource.
//!
//! Trigger-then-poll protocol: `POST /reports` runs a full report inside
//! the request and returns its id; `GET /reports/{id}` returns a status
//! payload while the run is Running or Failed, and the rendered CSV once
//! it is Complete.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use storewatch_core::error::CoreError;
use storewatch_core::report::render_csv;
use storewatch_core::types::Timestamp;
use storewatch_db::models::status::ReportStatus;
use storewatch_db::repositories::ReportRepo;
use uuid::Uuid;

use crate::engine::{run_report, FailurePolicy};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Optional body for `POST /api/v1/reports`.
#[derive(Debug, Deserialize)]
pub struct TriggerReport {
    /// Reference instant the three trailing windows end at. Defaults to
    /// the current time; pin it when reporting over stale data.
    pub as_of: Option<Timestamp>,
}

/// Response payload for a triggered report.
#[derive(Debug, Serialize)]
pub struct TriggeredReport {
    pub report_id: Uuid,
}

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// POST /api/v1/reports
///
/// Run a report over the full location catalog. Synchronous: the response
/// is sent after the run finished, so the returned id is immediately
/// pollable for its final state.
pub async fn trigger_report(
    State(state): State<AppState>,
    body: Option<Json<TriggerReport>>,
) -> AppResult<impl IntoResponse> {
    let as_of = body
        .and_then(|Json(input)| input.as_of)
        .unwrap_or_else(Utc::now);

    let report = run_report(&state.pool, as_of, FailurePolicy::default()).await?;

    tracing::info!(report_id = %report.id, status_id = report.status_id, "Report triggered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TriggeredReport {
                report_id: report.id,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Poll / fetch
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/{id}
///
/// Returns `{"status": "Running"}` while the run is in progress (rows that
/// may already exist are provisional and never exposed), a status payload
/// with the failure reason for a Failed run, and the rendered CSV as a
/// file download once Complete.
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> AppResult<Response> {
    let report = ReportRepo::find_by_id(&state.pool, report_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: report_id.to_string(),
        }))?;

    if report.status_id == ReportStatus::Running.id() {
        return Ok(Json(json!({ "status": ReportStatus::Running.label() })).into_response());
    }

    if report.status_id == ReportStatus::Failed.id() {
        return Ok(Json(json!({
            "status": ReportStatus::Failed.label(),
            "error": report.error_message,
        }))
        .into_response());
    }

    let rows = ReportRepo::list_rows(&state.pool, report_id).await?;
    let reports: Vec<_> = rows.iter().map(|r| r.to_location_report()).collect();
    let csv = render_csv(&reports);

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"report-{report_id}.csv\""),
        ),
    ];

    Ok((headers, csv).into_response())
}

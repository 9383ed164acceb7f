//! Handlers for the `/ingest` resource: CSV feeds for location timezones,
//! weekly business hours, and status observations.
//!
//! Each endpoint accepts the raw CSV document as the request body. A
//! leading header line is detected and skipped. Rows referencing unknown
//! locations are skipped and counted, matching the upstream feeds where
//! observation and schedule files routinely mention locations missing from
//! the timezone file. Malformed lines fail the request.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use storewatch_core::error::CoreError;
use storewatch_core::types::{DbId, Timestamp};
use storewatch_db::models::business_hours::CreateBusinessHours;
use storewatch_db::models::location::UpsertLocation;
use storewatch_db::models::observation::CreateStatusObservation;
use storewatch_db::repositories::{BusinessHoursRepo, LocationRepo, ObservationRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Ingestion outcome counts.
#[derive(Debug, Serialize)]
pub struct IngestSummary {
    pub ingested: usize,
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Timezones
// ---------------------------------------------------------------------------

/// POST /api/v1/ingest/timezones
///
/// CSV columns: `location_id,timezone_str`. Upserts the location catalog;
/// a blank timezone falls back to the column default.
pub async fn ingest_timezones(
    State(state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let mut ingested = 0;

    for line in data_lines(&body) {
        let input = parse_timezone_line(line)?;
        LocationRepo::upsert(&state.pool, &input).await?;
        ingested += 1;
    }

    tracing::info!(ingested, "Timezone feed ingested");

    Ok(Json(DataResponse {
        data: IngestSummary {
            ingested,
            skipped: 0,
        },
    }))
}

// ---------------------------------------------------------------------------
// Business hours
// ---------------------------------------------------------------------------

/// POST /api/v1/ingest/business-hours
///
/// CSV columns: `location_id,day_of_week,open_time_local,close_time_local`
/// with `day_of_week` 0 = Monday .. 6 = Sunday and times as `HH:MM:SS`.
pub async fn ingest_business_hours(
    State(state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let mut ingested = 0;
    let mut skipped = 0;

    for line in data_lines(&body) {
        let input = parse_hours_line(line)?;
        if LocationRepo::find_by_id(&state.pool, input.location_id)
            .await?
            .is_none()
        {
            skipped += 1;
            continue;
        }
        BusinessHoursRepo::create(&state.pool, &input).await?;
        ingested += 1;
    }

    tracing::info!(ingested, skipped, "Business-hours feed ingested");

    Ok(Json(DataResponse {
        data: IngestSummary { ingested, skipped },
    }))
}

// ---------------------------------------------------------------------------
// Observations
// ---------------------------------------------------------------------------

/// POST /api/v1/ingest/observations
///
/// CSV columns: `location_id,timestamp_utc,status`. Timestamps are UTC,
/// either RFC 3339 or the feed's `YYYY-MM-DD HH:MM:SS[.frac] UTC` form.
pub async fn ingest_observations(
    State(state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let mut ingested = 0;
    let mut skipped = 0;

    for line in data_lines(&body) {
        let input = parse_observation_line(line)?;
        if LocationRepo::find_by_id(&state.pool, input.location_id)
            .await?
            .is_none()
        {
            skipped += 1;
            continue;
        }
        ObservationRepo::create(&state.pool, &input).await?;
        ingested += 1;
    }

    tracing::info!(ingested, skipped, "Observation feed ingested");

    Ok(Json(DataResponse {
        data: IngestSummary { ingested, skipped },
    }))
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Non-empty data lines of a CSV document, header skipped.
///
/// The header is recognized by its first field not parsing as a location
/// id, so documents without one are also accepted.
fn data_lines(body: &str) -> impl Iterator<Item = &str> + '_ {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .filter(|(i, line)| {
            let first = line.split(',').next().unwrap_or_default().trim();
            *i != 0 || first.parse::<DbId>().is_ok()
        })
        .map(|(_, line)| line)
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, CoreError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(CoreError::Validation(format!(
            "Expected {expected} fields, got {}: {line}",
            fields.len()
        )));
    }
    Ok(fields)
}

fn parse_location_id(field: &str) -> Result<DbId, CoreError> {
    field
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid location id: {field}")))
}

fn parse_timezone_line(line: &str) -> Result<UpsertLocation, CoreError> {
    let fields = split_fields(line, 2)?;
    Ok(UpsertLocation {
        id: parse_location_id(fields[0])?,
        timezone_str: match fields[1] {
            "" => None,
            tz => Some(tz.to_string()),
        },
    })
}

fn parse_hours_line(line: &str) -> Result<CreateBusinessHours, CoreError> {
    let fields = split_fields(line, 4)?;
    let day_of_week: i16 = fields[1]
        .parse()
        .ok()
        .filter(|d| (0..=6).contains(d))
        .ok_or_else(|| CoreError::Validation(format!("Invalid day of week: {}", fields[1])))?;

    Ok(CreateBusinessHours {
        location_id: parse_location_id(fields[0])?,
        day_of_week,
        open_time_local: parse_local_time(fields[2])?,
        close_time_local: parse_local_time(fields[3])?,
    })
}

fn parse_observation_line(line: &str) -> Result<CreateStatusObservation, CoreError> {
    let fields = split_fields(line, 3)?;
    Ok(CreateStatusObservation {
        location_id: parse_location_id(fields[0])?,
        observed_at: parse_observed_at(fields[1])?,
        status: fields[2].to_string(),
    })
}

fn parse_local_time(field: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(field, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(field, "%H:%M"))
        .map_err(|_| CoreError::Validation(format!("Invalid local time: {field}")))
}

/// Parse a feed timestamp. Accepts RFC 3339 and the
/// `YYYY-MM-DD HH:MM:SS[.frac] UTC` form the status feed uses.
fn parse_observed_at(field: &str) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = field.parse::<Timestamp>() {
        return Ok(dt);
    }
    let trimmed = field.strip_suffix(" UTC").unwrap_or(field);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::Validation(format!("Invalid UTC timestamp: {field}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

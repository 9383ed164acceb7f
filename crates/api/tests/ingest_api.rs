//! Integration tests for the CSV ingestion endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::{body_json, post_csv};
use sqlx::PgPool;
use storewatch_db::repositories::{BusinessHoursRepo, LocationRepo, ObservationRepo};

// ---------------------------------------------------------------------------
// Test: timezone feed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn timezone_feed_upserts_catalog(pool: PgPool) {
    let body = "location_id,timezone_str\n10,America/Denver\n20,\n";
    let response = post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/timezones",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["ingested"], 2);
    assert_eq!(json["data"]["skipped"], 0);

    let denver = LocationRepo::find_by_id(&pool, 10).await.unwrap().unwrap();
    assert_eq!(denver.timezone_str, "America/Denver");

    // Blank timezone falls back to the default.
    let fallback = LocationRepo::find_by_id(&pool, 20).await.unwrap().unwrap();
    assert_eq!(fallback.timezone_str, "America/Chicago");
}

// ---------------------------------------------------------------------------
// Test: business-hours feed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn business_hours_feed_skips_unknown_locations(pool: PgPool) {
    post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/timezones",
        "10,UTC\n",
    )
    .await;

    let body = "location_id,day_of_week,start_time_local,end_time_local\n\
                10,0,09:00:00,17:00:00\n\
                99,1,09:00:00,17:00:00\n";
    let response = post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/business-hours",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["ingested"], 1);
    assert_eq!(json["data"]["skipped"], 1);

    let rows = BusinessHoursRepo::list_for_location(&pool, 10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].day_of_week, 0);
}

// ---------------------------------------------------------------------------
// Test: observation feed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn observation_feed_stores_instants_and_statuses(pool: PgPool) {
    post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/timezones",
        "10,UTC\n",
    )
    .await;

    let body = "location_id,timestamp_utc,status\n\
                10,2024-03-04 10:00:00.000000 UTC,active\n\
                10,2024-03-04T11:00:00Z,inactive\n\
                99,2024-03-04 12:00:00 UTC,active\n";
    let response = post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/observations",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["ingested"], 2);
    assert_eq!(json["data"]["skipped"], 1);

    // Only the active instant shows up in the estimator's range query.
    let instants = ObservationRepo::list_active_in_range(
        &pool,
        10,
        Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(
        instants,
        vec![Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()]
    );
}

// ---------------------------------------------------------------------------
// Test: malformed input
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_line_fails_the_request(pool: PgPool) {
    let response = post_csv(
        common::build_test_app(pool.clone()),
        "/api/v1/ingest/observations",
        "10,yesterday,active\n",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

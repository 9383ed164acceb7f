//! The report job: drives the uptime estimator across the location catalog.
//!
//! One run picks a reference instant, creates a Running report record,
//! walks the catalog strictly sequentially, persists one row per location
//! as soon as it is computed, and finally flips the record to Complete (or
//! Failed). Rows written while the run is still Running are provisional;
//! pollers only see them once the status is Complete.

use sqlx::PgPool;
use storewatch_core::error::CoreError;
use storewatch_core::observations::ObservationSet;
use storewatch_core::report::{LocationReport, ReportWindows, WindowTotals};
use storewatch_core::types::Timestamp;
use storewatch_core::uptime::{estimate_uptime, parse_timezone};
use storewatch_db::models::business_hours::{weekly_schedule, BusinessHours};
use storewatch_db::models::location::Location;
use storewatch_db::models::report::Report;
use storewatch_db::repositories::{BusinessHoursRepo, LocationRepo, ObservationRepo, ReportRepo};

// ---------------------------------------------------------------------------
// Failure policy
// ---------------------------------------------------------------------------

/// How a run reacts when a single location's estimation fails (e.g. an
/// unknown timezone identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure, skip that location's row, keep going. The run
    /// is marked Failed only when every location failed.
    #[default]
    IsolateLocations,
    /// Stop at the first failing location and mark the run Failed.
    /// Compatibility mode mirroring strict-abort consumers.
    AbortOnFirstError,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Execute one report run over the full catalog; blocks until finished.
///
/// Returns the final report record (already Complete or Failed). Storage
/// errors mark the record Failed best-effort before propagating, so a
/// poller never sees a run stuck in Running.
pub async fn run_report(
    pool: &PgPool,
    as_of: Timestamp,
    policy: FailurePolicy,
) -> Result<Report, sqlx::Error> {
    let report = ReportRepo::create(pool, as_of).await?;
    tracing::info!(report_id = %report.id, %as_of, "Report run started");

    if let Err(err) = run_locations(pool, &report, policy).await {
        if let Err(mark_err) =
            ReportRepo::set_failed(pool, report.id, "storage error during report run").await
        {
            tracing::error!(
                report_id = %report.id,
                error = %mark_err,
                "Could not mark report as failed",
            );
        }
        return Err(err);
    }

    Ok(ReportRepo::find_by_id(pool, report.id).await?.unwrap_or(report))
}

/// Walk the catalog and append one row per location.
///
/// Estimation failures are handled per the policy; storage errors
/// propagate to the caller.
async fn run_locations(
    pool: &PgPool,
    report: &Report,
    policy: FailurePolicy,
) -> Result<(), sqlx::Error> {
    let windows = ReportWindows::new(report.as_of);
    let locations = LocationRepo::list_all(pool).await?;
    let total = locations.len();
    let mut failed: usize = 0;

    for location in &locations {
        let hours = BusinessHoursRepo::list_for_location(pool, location.id).await?;
        let (week_start, week_end) = windows.last_week();
        let instants =
            ObservationRepo::list_active_in_range(pool, location.id, week_start, week_end).await?;

        match compute_row(location, &windows, &hours, instants) {
            Ok(row) => {
                ReportRepo::append_row(pool, report.id, &row).await?;
            }
            Err(err) => {
                tracing::warn!(
                    report_id = %report.id,
                    location_id = location.id,
                    error = %err,
                    "Estimation failed for location",
                );
                if policy == FailurePolicy::AbortOnFirstError {
                    let reason = format!("location {}: {err}", location.id);
                    ReportRepo::set_failed(pool, report.id, &reason).await?;
                    return Ok(());
                }
                failed += 1;
            }
        }
    }

    if total > 0 && failed == total {
        ReportRepo::set_failed(pool, report.id, "estimation failed for every location").await?;
        tracing::error!(report_id = %report.id, total, "Report run failed for every location");
    } else {
        ReportRepo::set_complete(pool, report.id).await?;
        tracing::info!(
            report_id = %report.id,
            locations = total,
            skipped = failed,
            "Report run complete",
        );
    }

    Ok(())
}

/// Compute one location's row for all three windows. Pure: the caller has
/// already loaded the schedule rows and a week of active instants.
fn compute_row(
    location: &Location,
    windows: &ReportWindows,
    hours: &[BusinessHours],
    active_instants: Vec<Timestamp>,
) -> Result<LocationReport, CoreError> {
    let tz = parse_timezone(&location.timezone_str)?;
    let schedule = weekly_schedule(hours);
    let observations = ObservationSet::new(active_instants);

    let (hour_start, hour_end) = windows.last_hour();
    let (day_start, day_end) = windows.last_day();
    let (week_start, week_end) = windows.last_week();

    let totals = WindowTotals {
        hour: estimate_uptime(tz, &schedule, &observations, hour_start, hour_end),
        day: estimate_uptime(tz, &schedule, &observations, day_start, day_end),
        week: estimate_uptime(tz, &schedule, &observations, week_start, week_end),
    };

    Ok(LocationReport::from_windows(location.id, &totals))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

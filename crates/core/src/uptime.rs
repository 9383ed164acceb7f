//! Hour-slice uptime/downtime estimation for a single location.
//!
//! The estimator walks a UTC range in one-hour slices in the location's
//! local timezone, clips each slice against that day's business hours, and
//! credits the whole clipped interval to uptime when at least one `active`
//! observation falls inside it, otherwise to downtime. A single observation
//! is deliberately extrapolated to its whole interval: observations are
//! sparse polls, not continuous telemetry.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::business_hours::WeeklySchedule;
use crate::error::CoreError;
use crate::observations::ObservationSet;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Timezone parsing
// ---------------------------------------------------------------------------

/// Look up an IANA timezone identifier from a location record.
pub fn parse_timezone(name: &str) -> Result<Tz, CoreError> {
    name.parse::<Tz>()
        .map_err(|_| CoreError::Configuration(format!("Unknown timezone identifier: {name}")))
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

/// Accumulated uptime and downtime over a window, in minutes (fractional).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UptimeTotals {
    pub uptime_minutes: f64,
    pub downtime_minutes: f64,
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate uptime/downtime for `[start_utc, end_utc)`.
///
/// `observations` must hold the location's active-observation instants
/// covering at least the requested range. Returns zero totals for an empty
/// range.
pub fn estimate_uptime(
    tz: Tz,
    schedule: &WeeklySchedule,
    observations: &ObservationSet,
    start_utc: Timestamp,
    end_utc: Timestamp,
) -> UptimeTotals {
    let mut cursor = start_utc.with_timezone(&tz);
    let end = end_utc.with_timezone(&tz);

    let mut uptime_secs: i64 = 0;
    let mut downtime_secs: i64 = 0;

    while cursor < end {
        let slice_end = cursor + Duration::hours(1);

        // Anchor the weekday's open/close times to the cursor's local date.
        let interval = schedule.resolve(cursor.weekday());
        let date = cursor.date_naive();
        let business_open = resolve_local(tz, date.and_time(interval.open));
        let business_close = resolve_local(tz, date.and_time(interval.close));

        // Slice entirely outside business hours: contributes nothing, but
        // the cursor still advances by the full hour.
        if business_open > slice_end || business_close < cursor {
            cursor = slice_end;
            continue;
        }

        let effective_start = business_open.max(cursor);
        let effective_end = business_close.min(slice_end);

        // Inverted schedule entries (close before open on the same date)
        // can produce an empty clip; they contribute nothing.
        if effective_end > effective_start {
            let secs = (effective_end - effective_start).num_seconds();
            let active = observations.any_active_in(
                effective_start.with_timezone(&Utc),
                effective_end.with_timezone(&Utc),
            );
            if active {
                uptime_secs += secs;
            } else {
                downtime_secs += secs;
            }
        }

        cursor = slice_end;
    }

    UptimeTotals {
        uptime_minutes: uptime_secs as f64 / 60.0,
        downtime_minutes: downtime_secs as f64 / 60.0,
    }
}

/// Anchor a local wall-clock time to a zone-aware instant.
///
/// Wall-clock times around DST transitions can be ambiguous (the earliest
/// instant is used) or skipped entirely (the probe advances past the gap;
/// gaps end, so this terminates).
fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = local + Duration::minutes(30);
            loop {
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt;
                }
                probe += Duration::minutes(30);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business_hours::ScheduleEntry;
    use chrono::NaiveTime;

    // 2024-03-04 is a Monday.
    fn utc(d: u32, h: u32, m: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap()
    }

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn mon_nine_to_five() -> WeeklySchedule {
        WeeklySchedule::new(vec![ScheduleEntry {
            weekday: 0,
            open: t(9, 0, 0),
            close: t(17, 0, 0),
        }])
    }

    fn utc_tz() -> Tz {
        parse_timezone("UTC").unwrap()
    }

    #[test]
    fn unknown_timezone_is_a_configuration_error() {
        let err = parse_timezone("Not/AZone").unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn known_timezone_parses() {
        assert!(parse_timezone("America/Chicago").is_ok());
        assert!(parse_timezone("Asia/Beirut").is_ok());
    }

    #[test]
    fn single_observation_splits_two_hour_window() {
        // Business hours Mon 09:00-17:00, one active observation at 10:00.
        // Window 09:00-11:00: the 09:00-10:00 slice has no observation and
        // counts as downtime; the 10:00-11:00 slice contains it and counts
        // as uptime.
        let observations = ObservationSet::new(vec![utc(4, 10, 0)]);
        let totals = estimate_uptime(
            utc_tz(),
            &mon_nine_to_five(),
            &observations,
            utc(4, 9, 0),
            utc(4, 11, 0),
        );

        assert_eq!(totals.uptime_minutes, 60.0);
        assert_eq!(totals.downtime_minutes, 60.0);
    }

    #[test]
    fn fully_observed_business_day_is_all_uptime() {
        // One active observation inside every business-hours slice.
        let observations =
            ObservationSet::new((9..17).map(|h| utc(4, h, 30)).collect::<Vec<_>>());
        let totals = estimate_uptime(
            utc_tz(),
            &mon_nine_to_five(),
            &observations,
            utc(4, 0, 0),
            utc(5, 0, 0),
        );

        assert_eq!(totals.uptime_minutes, 8.0 * 60.0);
        assert_eq!(totals.downtime_minutes, 0.0);
    }

    #[test]
    fn no_observations_means_all_business_hours_are_downtime() {
        let totals = estimate_uptime(
            utc_tz(),
            &mon_nine_to_five(),
            &ObservationSet::empty(),
            utc(4, 0, 0),
            utc(5, 0, 0),
        );

        assert_eq!(totals.uptime_minutes, 0.0);
        assert_eq!(totals.downtime_minutes, 8.0 * 60.0);
    }

    #[test]
    fn hours_outside_business_interval_contribute_nothing() {
        // Window entirely after closing time.
        let observations = ObservationSet::new(vec![utc(4, 18, 30)]);
        let totals = estimate_uptime(
            utc_tz(),
            &mon_nine_to_five(),
            &observations,
            utc(4, 18, 0),
            utc(4, 20, 0),
        );

        assert_eq!(totals.uptime_minutes, 0.0);
        assert_eq!(totals.downtime_minutes, 0.0);
    }

    #[test]
    fn default_hours_account_for_86399_seconds_per_day() {
        // Unconfigured schedule falls back to 00:00:00-23:59:59, so a full
        // day accounts for one second less than 86400.
        let totals = estimate_uptime(
            utc_tz(),
            &WeeklySchedule::empty(),
            &ObservationSet::empty(),
            utc(4, 0, 0),
            utc(5, 0, 0),
        );

        let accounted_secs = (totals.uptime_minutes + totals.downtime_minutes) * 60.0;
        assert_eq!(accounted_secs.round() as i64, 86_399);
        assert_eq!(totals.uptime_minutes, 0.0);
    }

    #[test]
    fn business_hours_are_interpreted_in_local_time() {
        // America/Chicago is UTC-6 in early March. Local 09:00-17:00 on
        // Monday is 15:00-23:00 UTC; an observation at 15:30 UTC lands in
        // the first local business hour.
        let schedule = mon_nine_to_five();
        let tz = parse_timezone("America/Chicago").unwrap();
        let observations = ObservationSet::new(vec![utc(4, 15, 30)]);

        let totals = estimate_uptime(tz, &schedule, &observations, utc(4, 15, 0), utc(4, 16, 0));
        assert_eq!(totals.uptime_minutes, 60.0);
        assert_eq!(totals.downtime_minutes, 0.0);

        // The same hour on Tuesday resolves against the default interval,
        // not Monday's configured hours.
        let tuesday = estimate_uptime(tz, &schedule, &observations, utc(5, 15, 0), utc(5, 16, 0));
        assert_eq!(tuesday.uptime_minutes, 0.0);
        assert_eq!(tuesday.downtime_minutes, 60.0);
    }

    #[test]
    fn slice_is_clipped_to_late_opening() {
        // Opening at 09:30 clips the 09:00-10:00 slice to half an hour.
        let schedule = WeeklySchedule::new(vec![ScheduleEntry {
            weekday: 0,
            open: t(9, 30, 0),
            close: t(17, 0, 0),
        }]);
        let totals = estimate_uptime(
            utc_tz(),
            &schedule,
            &ObservationSet::empty(),
            utc(4, 9, 0),
            utc(4, 10, 0),
        );

        assert_eq!(totals.uptime_minutes, 0.0);
        assert_eq!(totals.downtime_minutes, 30.0);
    }

    #[test]
    fn empty_range_yields_zero_totals() {
        let totals = estimate_uptime(
            utc_tz(),
            &mon_nine_to_five(),
            &ObservationSet::empty(),
            utc(4, 9, 0),
            utc(4, 9, 0),
        );

        assert_eq!(totals.uptime_minutes, 0.0);
        assert_eq!(totals.downtime_minutes, 0.0);
    }

    #[test]
    fn overnight_entries_are_skipped_as_disjoint() {
        // close < open on the same date never overlaps an hourly slice, so
        // the whole window contributes nothing.
        let schedule = WeeklySchedule::new(vec![ScheduleEntry {
            weekday: 0,
            open: t(22, 0, 0),
            close: t(4, 0, 0),
        }]);
        let totals = estimate_uptime(
            utc_tz(),
            &schedule,
            &ObservationSet::new(vec![utc(4, 23, 30)]),
            utc(4, 0, 0),
            utc(5, 0, 0),
        );

        assert_eq!(totals.uptime_minutes, 0.0);
        assert_eq!(totals.downtime_minutes, 0.0);
    }
}

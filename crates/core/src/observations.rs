//! In-memory scanning over a location's active status observations.
//!
//! The estimator only ever asks one question: "is there at least one
//! `active` observation in this half-open interval?". Loading the active
//! instants for the full reporting window once and answering by binary
//! search keeps the database cost at one range query per location instead
//! of one existence query per hourly slice.

use crate::types::Timestamp;

/// The only status literal that counts as "open". Every other status value,
/// including the absence of any observation, is treated as not-active.
pub const ACTIVE_STATUS: &str = "active";

/// Sorted set of active-observation instants for a single location.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    timestamps: Vec<Timestamp>,
}

impl ObservationSet {
    /// Build from observation instants in any order.
    pub fn new(mut timestamps: Vec<Timestamp>) -> Self {
        timestamps.sort_unstable();
        Self { timestamps }
    }

    /// A set with no observations: every interval scans as inactive.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// True if at least one active observation falls in `[start, end)`.
    pub fn any_active_in(&self, start: Timestamp, end: Timestamp) -> bool {
        let first_at_or_after = self.timestamps.partition_point(|t| *t < start);
        match self.timestamps.get(first_at_or_after) {
            Some(t) => *t < end,
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(h: u32, m: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 4, h, m, 0).unwrap()
    }

    #[test]
    fn empty_set_has_no_active_intervals() {
        let set = ObservationSet::empty();
        assert!(set.is_empty());
        assert!(!set.any_active_in(ts(0, 0), ts(23, 59)));
    }

    #[test]
    fn observation_inside_interval_is_found() {
        let set = ObservationSet::new(vec![ts(10, 30)]);
        assert!(set.any_active_in(ts(10, 0), ts(11, 0)));
    }

    #[test]
    fn interval_start_is_inclusive() {
        let set = ObservationSet::new(vec![ts(10, 0)]);
        assert!(set.any_active_in(ts(10, 0), ts(11, 0)));
    }

    #[test]
    fn interval_end_is_exclusive() {
        let set = ObservationSet::new(vec![ts(11, 0)]);
        assert!(!set.any_active_in(ts(10, 0), ts(11, 0)));
        assert!(set.any_active_in(ts(11, 0), ts(12, 0)));
    }

    #[test]
    fn unsorted_input_is_handled() {
        let set = ObservationSet::new(vec![ts(15, 0), ts(9, 0), ts(12, 0)]);
        assert_eq!(set.len(), 3);
        assert!(set.any_active_in(ts(8, 59), ts(9, 1)));
        assert!(set.any_active_in(ts(11, 0), ts(13, 0)));
        assert!(!set.any_active_in(ts(13, 0), ts(15, 0)));
    }
}

//! Storewatch domain logic.
//!
//! Pure, synchronous building blocks for the uptime reporting engine:
//! business-hours resolution, active-observation scanning, the hour-slice
//! uptime estimator, and report-row construction/rendering. Persistence and
//! transport live in `storewatch-db` and `storewatch-api`.

pub mod business_hours;
pub mod error;
pub mod observations;
pub mod report;
pub mod types;
pub mod uptime;

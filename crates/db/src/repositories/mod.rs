//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod business_hours_repo;
pub mod location_repo;
pub mod observation_repo;
pub mod report_repo;

pub use business_hours_repo::BusinessHoursRepo;
pub use location_repo::LocationRepo;
pub use observation_repo::ObservationRepo;
pub use report_repo::ReportRepo;

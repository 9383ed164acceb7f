//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for ingestion inserts

pub mod business_hours;
pub mod location;
pub mod observation;
pub mod report;
pub mod status;

/// Location identifiers are external BIGINT ids carried through ingestion.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

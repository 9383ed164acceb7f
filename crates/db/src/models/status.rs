//! Report status enum mapping to the `report_statuses` lookup table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Report run lifecycle status. Variant discriminants match the seed data
/// order (1-based) in the `report_statuses` table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Running = 1,
    Complete = 2,
    Failed = 3,
}

impl ReportStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Label used in poll responses.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }
}

impl From<ReportStatus> for StatusId {
    fn from(value: ReportStatus) -> Self {
        value as StatusId
    }
}

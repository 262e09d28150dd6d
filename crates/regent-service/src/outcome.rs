//! Mutation outcomes handed back to the transport layer.

use regent_notify::FanoutReport;
use regent_types::RecordId;

/// Result of a successful create.
///
/// The fan-out report rides along for observability; the create
/// succeeded regardless of what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// Store-assigned id of the new record.
    pub id: RecordId,
    /// Per-channel notification outcome.
    pub fanout: FanoutReport,
}

/// Result of an update or delete that passed the gate and reached the
/// store.
///
/// `NotFound` renders as 404 and triggers no fan-out; `Applied`
/// renders as success regardless of the attached report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationStatus {
    /// The target row was written or removed.
    Applied(FanoutReport),
    /// No row with the given id exists.
    NotFound,
}

impl MutationStatus {
    /// Returns whether the mutation reached a row.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the fan-out report, if the mutation was applied.
    #[must_use]
    pub fn fanout(&self) -> Option<&FanoutReport> {
        match self {
            Self::Applied(report) => Some(report),
            Self::NotFound => None,
        }
    }
}

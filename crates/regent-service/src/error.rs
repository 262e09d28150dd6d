//! Pipeline error taxonomy.

use regent_directory::DirectoryError;
use regent_policy::AccessDenied;
use regent_store::StoreError;
use regent_types::{ErrorCode, InvalidRecord};
use thiserror::Error;

/// Failure of one mutating (or reading) call through the pipeline.
///
/// Not-found is deliberately absent: it is a normal boolean outcome
/// ([`MutationStatus::NotFound`](crate::MutationStatus::NotFound)),
/// not an error. Notification failures are also absent: they are
/// absorbed inside the fan-out and only observable through its report
/// and the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The caller's role did not match the operation's requirement.
    /// Detected before any external resource is touched.
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    /// The payload failed field validation. Detected before any
    /// external resource is touched.
    #[error(transparent)]
    InvalidInput(#[from] InvalidRecord),

    /// A required external dependency could not be resolved.
    #[error(transparent)]
    ResourceUnavailable(#[from] DirectoryError),

    /// The backing store reported an infrastructure fault.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Maps the error onto the status the excluded transport layer
    /// renders.
    ///
    /// | Variant | Status |
    /// |---------|--------|
    /// | `AccessDenied` | 403 |
    /// | `InvalidInput` | 400 |
    /// | `ResourceUnavailable` | 500 |
    /// | `Store` | 500 |
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::AccessDenied(_) => 403,
            Self::InvalidInput(_) => 400,
            Self::ResourceUnavailable(_) | Self::Store(_) => 500,
        }
    }
}

impl ErrorCode for ServiceError {
    fn code(&self) -> &'static str {
        match self {
            Self::AccessDenied(_) => "SERVICE_ACCESS_DENIED",
            Self::InvalidInput(_) => "SERVICE_INVALID_INPUT",
            Self::ResourceUnavailable(_) => "SERVICE_RESOURCE_UNAVAILABLE",
            Self::Store(_) => "SERVICE_STORE_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Same call yields the same answer.
            Self::AccessDenied(_) | Self::InvalidInput(_) => false,
            // Clears when the dependency recovers.
            Self::ResourceUnavailable(_) | Self::Store(_) => true,
        }
    }
}

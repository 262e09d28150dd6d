//! Directory errors and resolution state.

use regent_types::ErrorCode;
use thiserror::Error;

/// A named dependency could not be resolved.
///
/// Surfaced to callers as a dependency-unavailable condition, never
/// as absence of data. The failure stays cached until the name is
/// invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resource '{name}' unavailable: {reason}")]
pub struct DirectoryError {
    /// Logical name that failed to resolve.
    pub name: String,
    /// Underlying resolution failure.
    pub reason: String,
}

impl DirectoryError {
    /// Creates an unavailable-resource error.
    #[must_use]
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl ErrorCode for DirectoryError {
    fn code(&self) -> &'static str {
        "DIRECTORY_UNRESOLVABLE"
    }

    // Clears once the dependency is fixed and the name invalidated.
    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Observable resolution state of a name.
///
/// Distinguishes "never attempted" from "attempted and failed" so
/// operators can tell a cold cache from a broken dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// No resolution has been attempted since startup or the last
    /// invalidation.
    NotAttempted,
    /// An attempt is currently in flight.
    Resolving,
    /// The name resolved; the handle is cached.
    Resolved,
    /// The last attempt failed; the failure is cached.
    Failed,
}

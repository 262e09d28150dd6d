//! Resolution seam for external dependencies.

use async_trait::async_trait;
use thiserror::Error;

/// Resolves a logical name to a concrete resource handle.
///
/// Implementations wrap the actual connection establishment (a
/// connection pool, a broker client). The directory guarantees each
/// name is resolved at most once until invalidated, so an
/// implementation may be as expensive as the dependency demands.
#[async_trait]
pub trait Resolver<T>: Send + Sync {
    /// Establishes the handle for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the dependency cannot be reached
    /// or the name is unknown.
    async fn resolve(&self, name: &str) -> Result<T, ResolveError>;
}

/// A resolution attempt failed.
///
/// Cloneable because a failed attempt is cached: every caller of a
/// broken name observes the same failure until it is invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ResolveError {
    reason: String,
}

impl ResolveError {
    /// Creates a resolution failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

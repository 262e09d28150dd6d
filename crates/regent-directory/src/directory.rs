//! The resolve-once directory.

use crate::{DirectoryError, ResolutionState, ResolveError, Resolver};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// One cached resolution outcome per logical name.
///
/// The `OnceCell` gives single-flight semantics: concurrent first
/// callers wait on the same cell, and exactly one of them runs the
/// resolver.
type Slot<T> = Arc<OnceCell<Result<T, ResolveError>>>;

/// Named, lazily-resolved cache of external resource handles.
///
/// # Semantics
///
/// - **Lazy**: nothing is resolved at construction; the first
///   `resolve(name)` call triggers the resolver.
/// - **Once**: each name is resolved at most once until invalidated.
///   Success and failure are both cached, so callers of a broken name
///   get the cached failure instead of hammering the dependency.
/// - **Single-flight**: N concurrent first calls for the same name
///   perform the resolution work exactly once; all N observe the same
///   outcome.
/// - **Explicit recovery**: [`invalidate`](Self::invalidate) drops a
///   name's cached outcome so the next call resolves fresh.
///
/// # Thread Safety
///
/// The slot map is guarded by a `std::sync::Mutex` held only for map
/// lookup, never across an `.await`. Resolution itself is coordinated
/// by the per-name `OnceCell`.
pub struct ResourceDirectory<T> {
    resolver: Arc<dyn Resolver<T>>,
    slots: Mutex<HashMap<String, Slot<T>>>,
}

impl<T> ResourceDirectory<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty directory backed by `resolver`.
    #[must_use]
    pub fn new(resolver: Arc<dyn Resolver<T>>) -> Self {
        Self {
            resolver,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the handle for `name`, resolving it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when resolution failed, now or on a
    /// previous cached attempt. Callers must treat this as the
    /// dependency being unavailable, not as absence of data.
    pub async fn resolve(&self, name: &str) -> Result<T, DirectoryError> {
        let slot = self.slot(name);

        let outcome = slot
            .get_or_init(|| async {
                tracing::info!(name, "resolving resource handle");
                match self.resolver.resolve(name).await {
                    Ok(handle) => {
                        tracing::info!(name, "resource handle resolved");
                        Ok(handle)
                    }
                    Err(err) => {
                        tracing::error!(name, error = %err, "resource resolution failed");
                        Err(err)
                    }
                }
            })
            .await;

        outcome
            .clone()
            .map_err(|err| DirectoryError::new(name, err.reason()))
    }

    /// Returns the observable resolution state of `name`.
    #[must_use]
    pub fn state(&self, name: &str) -> ResolutionState {
        let slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match slots.get(name) {
            None => ResolutionState::NotAttempted,
            Some(slot) => match slot.get() {
                None => ResolutionState::Resolving,
                Some(Ok(_)) => ResolutionState::Resolved,
                Some(Err(_)) => ResolutionState::Failed,
            },
        }
    }

    /// Drops the cached outcome for `name`.
    ///
    /// The next `resolve(name)` runs the resolver again. Callers that
    /// obtained a handle before invalidation keep using it; the
    /// directory only forgets its own cache. Returns whether anything
    /// was cached.
    pub fn invalidate(&self, name: &str) -> bool {
        let removed = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(name)
            .is_some();
        if removed {
            tracing::info!(name, "resource cache entry invalidated");
        }
        removed
    }

    fn slot(&self, name: &str) -> Slot<T> {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slots
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }
}

//! The store trait and its fault type.

use async_trait::async_trait;
use regent_types::{ErrorCode, NewRecord, RecordId, UserRecord};
use thiserror::Error;

/// Backing store for user records.
///
/// Each method is individually atomic at the store level; there are
/// no cross-operation transactions. Handles to implementations are
/// obtained through the resource directory, which owns caching — a
/// store implementation should assume it may be shared across
/// concurrent calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a record and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn insert(&self, record: &NewRecord) -> Result<RecordId, StoreError>;

    /// Overwrites the record at `id`.
    ///
    /// Returns `Ok(false)` when no record with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn update(&self, id: RecordId, record: &NewRecord) -> Result<bool, StoreError>;

    /// Removes the record at `id`.
    ///
    /// Returns `Ok(false)` when no record with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn delete(&self, id: RecordId) -> Result<bool, StoreError>;

    /// Fetches the record at `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn get(&self, id: RecordId) -> Result<Option<UserRecord>, StoreError>;

    /// Returns all records in id order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on infrastructure fault.
    async fn count(&self) -> Result<usize, StoreError>;
}

/// Infrastructure fault in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("store backend failed: {reason}")]
pub struct StoreError {
    /// Backend-reported failure description.
    pub reason: String,
}

impl StoreError {
    /// Creates a store fault with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for StoreError {
    fn code(&self) -> &'static str {
        "STORE_BACKEND_FAILED"
    }

    // Infrastructure faults may clear once the backend recovers.
    fn is_recoverable(&self) -> bool {
        true
    }
}

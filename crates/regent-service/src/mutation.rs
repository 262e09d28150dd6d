//! The mutation service.

use crate::ServiceError;
use regent_directory::ResourceDirectory;
use regent_store::RecordStore;
use regent_types::{NewRecord, RecordId, UserRecord};
use std::sync::Arc;

/// Performs the primary data mutation against a directory-resolved
/// store handle.
///
/// Knows nothing about policy or notification: gating happens before
/// it is invoked, fan-out after it reports success. Reads ride along
/// here because they hit the same resolved handle, but only the
/// mutating operations are gated upstream.
///
/// The store handle is obtained from the directory on every call; the
/// directory owns caching, so this costs a map lookup after first
/// resolution.
#[derive(Clone)]
pub struct MutationService {
    stores: Arc<ResourceDirectory<Arc<dyn RecordStore>>>,
    store_name: String,
}

impl MutationService {
    /// Creates a mutation service reading its store handle from
    /// `stores` under `store_name`.
    #[must_use]
    pub fn new(stores: Arc<ResourceDirectory<Arc<dyn RecordStore>>>, store_name: impl Into<String>) -> Self {
        Self {
            stores,
            store_name: store_name.into(),
        }
    }

    /// Validates and inserts a record, returning its assigned id.
    ///
    /// # Errors
    ///
    /// [`ServiceError::InvalidInput`] before any resource is touched,
    /// [`ServiceError::ResourceUnavailable`] when the store handle
    /// cannot be resolved, [`ServiceError::Store`] on backend fault.
    pub async fn create(&self, record: &NewRecord) -> Result<RecordId, ServiceError> {
        record.validate()?;
        let store = self.stores.resolve(&self.store_name).await?;
        let id = store.insert(record).await?;
        tracing::info!(%id, "record created");
        Ok(id)
    }

    /// Validates and overwrites the record at `id`.
    ///
    /// Returns `Ok(false)` when the target does not exist.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`create`](Self::create).
    pub async fn update(&self, id: RecordId, record: &NewRecord) -> Result<bool, ServiceError> {
        record.validate()?;
        let store = self.stores.resolve(&self.store_name).await?;
        let applied = store.update(id, record).await?;
        if applied {
            tracing::info!(%id, "record updated");
        } else {
            tracing::warn!(%id, "update target not found");
        }
        Ok(applied)
    }

    /// Removes the record at `id`.
    ///
    /// Returns `Ok(false)` when the target does not exist.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn delete(&self, id: RecordId) -> Result<bool, ServiceError> {
        let store = self.stores.resolve(&self.store_name).await?;
        let removed = store.delete(id).await?;
        if removed {
            tracing::info!(%id, "record deleted");
        } else {
            tracing::warn!(%id, "delete target not found");
        }
        Ok(removed)
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn get(&self, id: RecordId) -> Result<Option<UserRecord>, ServiceError> {
        let store = self.stores.resolve(&self.store_name).await?;
        Ok(store.get(id).await?)
    }

    /// Lists all records.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn list(&self) -> Result<Vec<UserRecord>, ServiceError> {
        let store = self.stores.resolve(&self.store_name).await?;
        Ok(store.list().await?)
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn count(&self) -> Result<usize, ServiceError> {
        let store = self.stores.resolve(&self.store_name).await?;
        Ok(store.count().await?)
    }
}

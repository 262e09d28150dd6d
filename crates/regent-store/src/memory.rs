//! In-memory record store.

use crate::{RecordStore, StoreError};
use async_trait::async_trait;
use regent_types::{NewRecord, RecordId, UserRecord};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

/// Thread-safe, in-memory [`RecordStore`].
///
/// Backs tests and demos. Ids are assigned from a monotonically
/// increasing counter starting at 1, mirroring an auto-increment
/// primary key.
///
/// # Example
///
/// ```
/// use regent_store::{MemoryStore, RecordStore};
/// use regent_types::NewRecord;
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let store = MemoryStore::new();
/// let id = store.insert(&NewRecord::new("ada", "ada@example.com")).await.unwrap();
/// assert_eq!(store.get(id).await.unwrap().unwrap().username, "ada");
/// # });
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<RecordId, UserRecord>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: &NewRecord) -> Result<RecordId, StoreError> {
        let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let row = UserRecord::new(id, record.username.clone(), record.email.clone());

        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;
        records.insert(id, row);
        tracing::debug!(%id, "record inserted");
        Ok(id)
    }

    async fn update(&self, id: RecordId, record: &NewRecord) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;

        match records.get_mut(&id) {
            Some(row) => {
                row.username = record.username.clone();
                row.email = record.email.clone();
                tracing::debug!(%id, "record updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;
        let removed = records.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "record deleted");
        }
        Ok(removed)
    }

    async fn get(&self, id: RecordId) -> Result<Option<UserRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;
        Ok(records.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::new(format!("record lock poisoned: {e}")))?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> NewRecord {
        NewRecord::new(name, format!("{name}@example.com"))
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert(&record("a")).await.unwrap();
        let b = store.insert(&record("b")).await.unwrap();
        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn update_existing_returns_true() {
        let store = MemoryStore::new();
        let id = store.insert(&record("a")).await.unwrap();

        let updated = store.update(id, &record("renamed")).await.unwrap();
        assert!(updated);
        assert_eq!(store.get(id).await.unwrap().unwrap().username, "renamed");
    }

    #[tokio::test]
    async fn update_missing_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.update(RecordId::new(99), &record("x")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_existing_then_missing() {
        let store = MemoryStore::new();
        let id = store.insert(&record("a")).await.unwrap();

        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert_eq!(store.get(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_id_ordered() {
        let store = MemoryStore::new();
        store.insert(&record("a")).await.unwrap();
        store.insert(&record("b")).await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id < rows[1].id);
    }
}

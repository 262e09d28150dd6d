//! Record payloads.
//!
//! [`NewRecord`] is what callers submit on create/update;
//! [`UserRecord`] is what the store hands back, identity included.

use crate::RecordId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored record with its assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identity.
    pub id: RecordId,
    /// Unique login name.
    pub username: String,
    /// Contact address, also the default notification recipient key.
    pub email: String,
}

impl UserRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(id: RecordId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Caller-supplied record data, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Unique login name. Required.
    pub username: String,
    /// Contact address. Required.
    pub email: String,
}

impl NewRecord {
    /// Creates a new record payload.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Checks that all identity fields are present and non-blank.
    ///
    /// Runs before any external resource is touched, so a malformed
    /// payload never costs a directory resolution or a store call.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord`] naming the first missing field.
    ///
    /// # Example
    ///
    /// ```
    /// use regent_types::NewRecord;
    ///
    /// assert!(NewRecord::new("ada", "ada@example.com").validate().is_ok());
    /// assert!(NewRecord::new("", "ada@example.com").validate().is_err());
    /// assert!(NewRecord::new("ada", "  ").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.username.trim().is_empty() {
            return Err(InvalidRecord { field: "username" });
        }
        if self.email.trim().is_empty() {
            return Err(InvalidRecord { field: "email" });
        }
        Ok(())
    }
}

/// A record payload failed field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record field '{field}' must not be empty")]
pub struct InvalidRecord {
    /// Name of the first field that failed validation.
    pub field: &'static str,
}

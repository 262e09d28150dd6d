//! Queued system message payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload published to the message queue after a successful mutation.
///
/// Ephemeral: produced by the fan-out step, consumed by whatever
/// listens on the broker, never stored by this workspace.
///
/// # Example
///
/// ```
/// use regent_types::SystemMessage;
///
/// let msg = SystemMessage::new("regent-service", "record 42 created");
/// assert_eq!(msg.source, "regent-service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// Tag identifying the producing component.
    pub source: String,
    /// Human-readable message body.
    pub content: String,
    /// UTC production timestamp.
    pub sent_at: DateTime<Utc>,
}

impl SystemMessage {
    /// Creates a message stamped with the current UTC time.
    #[must_use]
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

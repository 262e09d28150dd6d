//! Delivery channel seams.
//!
//! The transports themselves (SMTP, broker wire protocol) live
//! outside this workspace; these traits are the boundary.

use async_trait::async_trait;
use regent_types::SystemMessage;
use thiserror::Error;

/// Email transport collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one email.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when the transport rejects or cannot
    /// deliver the message.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Message-queue transport collaborator.
///
/// Handles are resolved through the resource directory; one publisher
/// handle may serve many publishes concurrently.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Publishes one message to the named queue.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the broker rejects or cannot
    /// accept the message.
    async fn publish(&self, queue: &str, message: &SystemMessage) -> Result<(), PublishError>;
}

/// Email delivery failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email delivery failed: {reason}")]
pub struct MailError {
    /// Transport-reported failure description.
    pub reason: String,
}

impl MailError {
    /// Creates a mail failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Queue publish failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("queue publish failed: {reason}")]
pub struct PublishError {
    /// Broker-reported failure description.
    pub reason: String,
}

impl PublishError {
    /// Creates a publish failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

//! Notification event payload.

/// Ephemeral value describing one post-mutation notification.
///
/// Constructed only after the mutation service reports success,
/// consumed immediately by the fan-out, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Email recipient address.
    pub recipient: String,
    /// Email subject line.
    pub subject: String,
    /// Email body; also the queued message content.
    pub body: String,
    /// Tag identifying the producing component.
    pub source: String,
}

impl NotificationEvent {
    /// Creates a notification event.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            source: source.into(),
        }
    }
}

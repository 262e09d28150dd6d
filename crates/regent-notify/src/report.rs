//! Per-channel fan-out outcomes.

/// Outcome of one delivery channel attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// The channel accepted the notification.
    Sent,
    /// The attempt failed; the reason is kept for logs and metrics.
    Failed {
        /// Why the attempt failed (transport error or timeout).
        reason: String,
    },
}

impl ChannelOutcome {
    /// Creates a failed outcome with the given reason.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Returns whether the channel accepted the notification.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// How much of the fan-out landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    /// Both channels accepted.
    Full,
    /// Exactly one channel accepted.
    Partial,
    /// Neither channel accepted.
    None,
}

/// Per-channel record of one fan-out attempt.
///
/// This is an observability value, not an error: the mutating call's
/// result never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoutReport {
    /// Email channel outcome.
    pub email: ChannelOutcome,
    /// Queue-publish channel outcome.
    pub queue: ChannelOutcome,
}

impl FanoutReport {
    /// Returns how much of the fan-out landed.
    #[must_use]
    pub fn level(&self) -> NotifyLevel {
        match (self.email.is_sent(), self.queue.is_sent()) {
            (true, true) => NotifyLevel::Full,
            (false, false) => NotifyLevel::None,
            _ => NotifyLevel::Partial,
        }
    }
}

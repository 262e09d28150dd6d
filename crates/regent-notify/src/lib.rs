//! Best-effort notification fan-out.
//!
//! After a successful mutation the pipeline dispatches two independent
//! side effects: an email and a queued system message. Neither may
//! block the other, neither may fail the mutation, and neither is
//! retried or queued for later — this is explicitly fire-and-forget.
//!
//! ```text
//!                 NotificationEvent
//!                        │
//!              ┌─────────┴─────────┐  (concurrent, each bounded
//!              ▼                   ▼   by its own timeout)
//!        Mailer::send      resolve broker handle
//!              │           QueuePublisher::publish
//!              ▼                   ▼
//!        ChannelOutcome      ChannelOutcome
//!              └─────────┬─────────┘
//!                        ▼
//!                  FanoutReport  (logged, never an error)
//! ```
//!
//! Failures are captured per channel in [`FanoutReport`] rather than
//! swallowed, so observability survives even though callers never see
//! an error.

pub mod channel;
pub mod event;
pub mod fanout;
pub mod report;

pub use channel::{MailError, Mailer, PublishError, QueuePublisher};
pub use event::NotificationEvent;
pub use fanout::Notifier;
pub use report::{ChannelOutcome, FanoutReport, NotifyLevel};

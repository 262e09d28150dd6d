//! The fan-out dispatcher.

use crate::{ChannelOutcome, FanoutReport, Mailer, NotificationEvent, NotifyLevel, QueuePublisher};
use regent_directory::ResourceDirectory;
use regent_types::SystemMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Dispatches one [`NotificationEvent`] across both channels.
///
/// The email send and the queue publish run concurrently; neither is
/// gated on the other, and each attempt is bounded by its own timeout
/// so a hung transport cannot hold resources indefinitely. Failures
/// are logged and captured in the [`FanoutReport`]; `notify` itself
/// never fails.
///
/// The queue publisher handle is obtained from the resource directory
/// on each call (the directory owns caching), so broker availability
/// follows the same lazy-once rules as the record store.
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    brokers: Arc<ResourceDirectory<Arc<dyn QueuePublisher>>>,
    broker_name: String,
    queue: String,
    attempt_timeout: Duration,
}

impl Notifier {
    /// Creates a notifier.
    ///
    /// `broker_name` is the directory name of the publisher handle;
    /// `queue` is the destination passed to every publish;
    /// `attempt_timeout` bounds each channel attempt independently.
    #[must_use]
    pub fn new(
        mailer: Arc<dyn Mailer>,
        brokers: Arc<ResourceDirectory<Arc<dyn QueuePublisher>>>,
        broker_name: impl Into<String>,
        queue: impl Into<String>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            mailer,
            brokers,
            broker_name: broker_name.into(),
            queue: queue.into(),
            attempt_timeout,
        }
    }

    /// Attempts both deliveries and reports per-channel outcomes.
    ///
    /// Exactly one attempt per channel, no retries, no durability.
    pub async fn notify(&self, event: &NotificationEvent) -> FanoutReport {
        let (email, queue) = tokio::join!(self.send_email(event), self.publish(event));
        let report = FanoutReport { email, queue };

        match report.level() {
            NotifyLevel::Full => {
                tracing::info!(recipient = %event.recipient, "notification fan-out delivered");
            }
            NotifyLevel::Partial | NotifyLevel::None => {
                tracing::warn!(
                    recipient = %event.recipient,
                    email = ?report.email,
                    queue = ?report.queue,
                    "notification fan-out degraded"
                );
            }
        }
        report
    }

    async fn send_email(&self, event: &NotificationEvent) -> ChannelOutcome {
        let attempt = self
            .mailer
            .send(&event.recipient, &event.subject, &event.body);

        match timeout(self.attempt_timeout, attempt).await {
            Ok(Ok(())) => {
                tracing::info!(recipient = %event.recipient, "notification email sent");
                ChannelOutcome::Sent
            }
            Ok(Err(err)) => {
                tracing::warn!(recipient = %event.recipient, error = %err, "notification email failed");
                ChannelOutcome::failed(err.to_string())
            }
            Err(_) => {
                tracing::warn!(recipient = %event.recipient, "notification email timed out");
                ChannelOutcome::failed(format!(
                    "timed out after {}ms",
                    self.attempt_timeout.as_millis()
                ))
            }
        }
    }

    async fn publish(&self, event: &NotificationEvent) -> ChannelOutcome {
        // The timeout covers the whole attempt, broker resolution
        // included: a hung resolver must not stall the channel any
        // more than a hung broker.
        let attempt = async {
            let publisher = self
                .brokers
                .resolve(&self.broker_name)
                .await
                .map_err(|err| err.to_string())?;
            let message = SystemMessage::new(event.source.clone(), event.body.clone());
            publisher
                .publish(&self.queue, &message)
                .await
                .map_err(|err| err.to_string())
        };

        match timeout(self.attempt_timeout, attempt).await {
            Ok(Ok(())) => {
                tracing::info!(queue = %self.queue, "notification message published");
                ChannelOutcome::Sent
            }
            Ok(Err(reason)) => {
                tracing::warn!(queue = %self.queue, %reason, "notification publish failed");
                ChannelOutcome::failed(reason)
            }
            Err(_) => {
                tracing::warn!(queue = %self.queue, "notification publish timed out");
                ChannelOutcome::failed(format!(
                    "timed out after {}ms",
                    self.attempt_timeout.as_millis()
                ))
            }
        }
    }
}

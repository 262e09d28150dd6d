//! Periodic record watch task.

use crate::{config::WatchConfig, MutationService};
use regent_notify::Mailer;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Periodically logs the record count and emails an alert when it
/// exceeds the configured threshold.
///
/// Strictly best-effort: a failed count or a failed email is logged
/// and the task keeps ticking. Uses the same [`Mailer`] seam as the
/// fan-out and the same ungated store access as reads.
pub struct RecordWatch {
    mutation: MutationService,
    mailer: Arc<dyn Mailer>,
    config: WatchConfig,
}

impl RecordWatch {
    /// Creates a watch over the given mutation service.
    #[must_use]
    pub fn new(mutation: MutationService, mailer: Arc<dyn Mailer>, config: WatchConfig) -> Self {
        Self {
            mutation,
            mailer,
            config,
        }
    }

    /// Runs one watch pass: log the count, alert if over threshold.
    ///
    /// Exposed separately from [`spawn`](Self::spawn) so tests can
    /// drive passes directly.
    pub async fn tick(&self) {
        let count = match self.mutation.count().await {
            Ok(count) => count,
            Err(err) => {
                tracing::error!(error = %err, "record watch could not read count");
                return;
            }
        };
        tracing::info!(count, "current record count");

        if count <= self.config.threshold {
            return;
        }

        let subject = "record threshold alert";
        let body = format!(
            "record count {count} exceeds the threshold of {}",
            self.config.threshold
        );
        match self.mailer.send(&self.config.recipient, subject, &body).await {
            Ok(()) => tracing::info!(count, "threshold alert email sent"),
            Err(err) => tracing::warn!(error = %err, "threshold alert email failed"),
        }
    }

    /// Spawns the periodic loop. Returns the task handle; abort it to
    /// stop the watch. Returns `None` when the watch is disabled or
    /// configured with a zero interval.
    #[must_use]
    pub fn spawn(self) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            tracing::info!("record watch disabled");
            return None;
        }
        // tokio::time::interval panics on a zero period, and a zero
        // interval is expressible in config. Treat it as disabled.
        if self.config.interval().is_zero() {
            tracing::warn!("record watch interval is zero, treating as disabled");
            return None;
        }
        let mut interval = tokio::time::interval(self.config.interval());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        Some(tokio::spawn(async move {
            loop {
                interval.tick().await;
                self.tick().await;
            }
        }))
    }
}

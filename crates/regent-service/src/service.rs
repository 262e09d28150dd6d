//! The gated record service.

use crate::{Created, MutationService, MutationStatus, ServiceConfig, ServiceError};
use regent_directory::ResourceDirectory;
use regent_notify::{Mailer, NotificationEvent, Notifier, QueuePublisher};
use regent_policy::{PolicyContext, PolicyGate, PolicyRequirement};
use regent_store::RecordStore;
use regent_types::{NewRecord, RecordId, Role, UserRecord};
use std::sync::Arc;

/// One gate per mutating operation, fixed at registration time.
struct Gates {
    create: PolicyGate,
    update: PolicyGate,
    delete: PolicyGate,
}

/// The record service every transport talks to.
///
/// Wires the pipeline together: each mutating operation is wrapped by
/// its [`PolicyGate`], executes through the [`MutationService`], and
/// on success dispatches the notification fan-out. Reads are ungated
/// and trigger no fan-out.
///
/// The service is cheap to share (`Arc` it); every call is its own
/// unit with no cross-call ordering.
pub struct RecordService {
    gates: Gates,
    mutation: MutationService,
    notifier: Notifier,
    recipient: String,
    source: String,
}

impl RecordService {
    /// Composes the service from its collaborators.
    ///
    /// Gate requirements and resource names come from `config`; the
    /// directories and the mailer are supplied by the composition
    /// root so tests can slot in doubles.
    #[must_use]
    pub fn new(
        config: &ServiceConfig,
        stores: Arc<ResourceDirectory<Arc<dyn RecordStore>>>,
        brokers: Arc<ResourceDirectory<Arc<dyn QueuePublisher>>>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let gates = Gates {
            create: PolicyGate::new(PolicyRequirement::new(Role::new(&config.policy.create))),
            update: PolicyGate::new(PolicyRequirement::new(Role::new(&config.policy.update))),
            delete: PolicyGate::new(PolicyRequirement::new(Role::new(&config.policy.delete))),
        };
        let mutation = MutationService::new(stores, config.resources.store.clone());
        let notifier = Notifier::new(
            mailer,
            brokers,
            config.resources.broker.clone(),
            config.resources.queue.clone(),
            config.notify.attempt_timeout(),
        );
        Self {
            gates,
            mutation,
            notifier,
            recipient: config.notify.recipient.clone(),
            source: config.notify.source.clone(),
        }
    }

    /// Returns the mutation service, for collaborators that need
    /// ungated store access (e.g. the record watch task).
    #[must_use]
    pub fn mutation(&self) -> &MutationService {
        &self.mutation
    }

    /// Creates a record. Gated.
    ///
    /// # Errors
    ///
    /// [`ServiceError::AccessDenied`] before anything else runs;
    /// otherwise the mutation service's taxonomy.
    pub async fn create(
        &self,
        ctx: &PolicyContext,
        record: &NewRecord,
    ) -> Result<Created, ServiceError> {
        let id = self
            .gates
            .create
            .enforce_async(ctx, || self.mutation.create(record))
            .await?;

        let fanout = self
            .notifier
            .notify(&self.event("record created", format!("record {id} created")))
            .await;
        Ok(Created { id, fanout })
    }

    /// Updates the record at `id`. Gated.
    ///
    /// Returns [`MutationStatus::NotFound`] (no fan-out) when the
    /// target does not exist.
    ///
    /// # Errors
    ///
    /// [`ServiceError::AccessDenied`] before anything else runs;
    /// otherwise the mutation service's taxonomy.
    pub async fn update(
        &self,
        ctx: &PolicyContext,
        id: RecordId,
        record: &NewRecord,
    ) -> Result<MutationStatus, ServiceError> {
        let applied = self
            .gates
            .update
            .enforce_async(ctx, || self.mutation.update(id, record))
            .await?;

        if !applied {
            return Ok(MutationStatus::NotFound);
        }
        let fanout = self
            .notifier
            .notify(&self.event("record updated", format!("record {id} updated")))
            .await;
        Ok(MutationStatus::Applied(fanout))
    }

    /// Deletes the record at `id`. Gated.
    ///
    /// Returns [`MutationStatus::NotFound`] (no fan-out) when the
    /// target does not exist.
    ///
    /// # Errors
    ///
    /// [`ServiceError::AccessDenied`] before anything else runs;
    /// otherwise the mutation service's taxonomy.
    pub async fn delete(
        &self,
        ctx: &PolicyContext,
        id: RecordId,
    ) -> Result<MutationStatus, ServiceError> {
        let removed = self
            .gates
            .delete
            .enforce_async(ctx, || self.mutation.delete(id))
            .await?;

        if !removed {
            return Ok(MutationStatus::NotFound);
        }
        let fanout = self
            .notifier
            .notify(&self.event("record deleted", format!("record {id} deleted")))
            .await;
        Ok(MutationStatus::Applied(fanout))
    }

    /// Fetches one record. Ungated, no fan-out.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn get(&self, id: RecordId) -> Result<Option<UserRecord>, ServiceError> {
        self.mutation.get(id).await
    }

    /// Lists all records. Ungated, no fan-out.
    ///
    /// # Errors
    ///
    /// [`ServiceError::ResourceUnavailable`] or [`ServiceError::Store`].
    pub async fn list(&self) -> Result<Vec<UserRecord>, ServiceError> {
        self.mutation.list().await
    }

    fn event(&self, subject: &str, body: String) -> NotificationEvent {
        NotificationEvent::new(&self.recipient, subject, body, &self.source)
    }
}

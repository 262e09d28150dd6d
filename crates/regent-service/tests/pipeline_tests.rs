//! End-to-end pipeline scenarios: gate → mutate → fan-out.
//!
//! Uses an in-memory store behind a switchable resolver plus
//! recording mail/publish doubles, so every stage of the pipeline is
//! observable without any real transport.

use async_trait::async_trait;
use regent_directory::{ResolutionState, ResolveError, Resolver, ResourceDirectory};
use regent_notify::{MailError, Mailer, NotifyLevel, PublishError, QueuePublisher};
use regent_policy::PolicyContext;
use regent_service::{MutationStatus, RecordService, ServiceConfig, ServiceError};
use regent_store::{MemoryStore, RecordStore};
use regent_types::{NewRecord, RecordId, SystemMessage};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Mailer double: records (to, subject) pairs, optionally failing.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::new("smtp relay refused"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// Publisher double: records (queue, message) pairs, optionally failing.
#[derive(Default)]
struct RecordingPublisher {
    published: Mutex<Vec<(String, SystemMessage)>>,
    fail: AtomicBool,
}

impl RecordingPublisher {
    fn published_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

#[async_trait]
impl QueuePublisher for RecordingPublisher {
    async fn publish(&self, queue: &str, message: &SystemMessage) -> Result<(), PublishError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PublishError::new("broker rejected message"));
        }
        self.published
            .lock()
            .unwrap()
            .push((queue.to_string(), message.clone()));
        Ok(())
    }
}

/// Store resolver whose availability can be flipped mid-test,
/// counting attempts so laziness and caching are observable.
struct SwitchableStoreResolver {
    store: Arc<dyn RecordStore>,
    available: AtomicBool,
    attempts: AtomicUsize,
}

#[async_trait]
impl Resolver<Arc<dyn RecordStore>> for SwitchableStoreResolver {
    async fn resolve(&self, name: &str) -> Result<Arc<dyn RecordStore>, ResolveError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if !self.available.load(Ordering::SeqCst) {
            return Err(ResolveError::new("store connection refused"));
        }
        if name != "jdbc/records" {
            return Err(ResolveError::new(format!("unknown store '{name}'")));
        }
        Ok(Arc::clone(&self.store))
    }
}

struct BrokerResolver {
    publisher: Arc<dyn QueuePublisher>,
}

#[async_trait]
impl Resolver<Arc<dyn QueuePublisher>> for BrokerResolver {
    async fn resolve(&self, name: &str) -> Result<Arc<dyn QueuePublisher>, ResolveError> {
        if name != "jms/records" {
            return Err(ResolveError::new(format!("unknown broker '{name}'")));
        }
        Ok(Arc::clone(&self.publisher))
    }
}

struct Harness {
    service: RecordService,
    store: Arc<MemoryStore>,
    mailer: Arc<RecordingMailer>,
    publisher: Arc<RecordingPublisher>,
    stores: Arc<ResourceDirectory<Arc<dyn RecordStore>>>,
    store_resolver: Arc<SwitchableStoreResolver>,
}

fn harness_with_store_available(available: bool) -> Harness {
    init_tracing();

    let store = Arc::new(MemoryStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let publisher = Arc::new(RecordingPublisher::default());

    let store_resolver = Arc::new(SwitchableStoreResolver {
        store: store.clone() as Arc<dyn RecordStore>,
        available: AtomicBool::new(available),
        attempts: AtomicUsize::new(0),
    });
    let stores = Arc::new(ResourceDirectory::new(
        store_resolver.clone() as Arc<dyn Resolver<Arc<dyn RecordStore>>>
    ));
    let brokers = Arc::new(ResourceDirectory::new(Arc::new(BrokerResolver {
        publisher: publisher.clone() as Arc<dyn QueuePublisher>,
    })
        as Arc<dyn Resolver<Arc<dyn QueuePublisher>>>));

    let config = ServiceConfig::default();
    let service = RecordService::new(
        &config,
        stores.clone(),
        brokers,
        mailer.clone() as Arc<dyn Mailer>,
    );

    Harness {
        service,
        store,
        mailer,
        publisher,
        stores,
        store_resolver,
    }
}

fn harness() -> Harness {
    harness_with_store_available(true)
}

fn admin() -> PolicyContext {
    PolicyContext::from_signal(Some("ADMIN"))
}

fn user() -> PolicyContext {
    PolicyContext::from_signal(Some("USER"))
}

fn record(name: &str) -> NewRecord {
    NewRecord::new(name, format!("{name}@example.com"))
}

#[tokio::test]
async fn denied_create_leaves_store_untouched() {
    let h = harness();

    let err = h.service.create(&user(), &record("ada")).await.unwrap_err();

    assert!(matches!(err, ServiceError::AccessDenied(_)));
    assert_eq!(err.http_status(), 403);
    assert_eq!(h.store.count().await.unwrap(), 0);
    assert_eq!(h.mailer.sent_count(), 0);
    assert_eq!(h.publisher.published_count(), 0);
    // The gate fired before any resolution was attempted.
    assert_eq!(h.store_resolver.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn admin_create_adds_row_and_fans_out() {
    let h = harness();

    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    assert_eq!(created.id, RecordId::new(1));
    assert_eq!(created.fanout.level(), NotifyLevel::Full);
    assert_eq!(h.store.count().await.unwrap(), 1);

    let sent = h.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "records-ops@example.com");
    assert_eq!(sent[0].1, "record created");
    drop(sent);

    let published = h.publisher.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].0, "regent.records");
    assert_eq!(published[0].1.source, "regent-service");
    assert!(published[0].1.content.contains("record 1 created"));
}

#[tokio::test]
async fn default_role_is_denied_for_admin_operations() {
    let h = harness();

    // No role signal at all defaults to USER, which the gate rejects.
    let ctx = PolicyContext::from_signal(None);
    let err = h.service.create(&ctx, &record("ada")).await.unwrap_err();
    assert_eq!(err.http_status(), 403);
}

#[tokio::test]
async fn lowercase_admin_is_denied() {
    let h = harness();

    let ctx = PolicyContext::from_signal(Some("admin"));
    let err = h.service.create(&ctx, &record("ada")).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied(_)));
}

#[tokio::test]
async fn update_applies_and_fans_out() {
    let h = harness();
    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    let status = h
        .service
        .update(&admin(), created.id, &record("ada-renamed"))
        .await
        .unwrap();

    assert!(status.is_applied());
    assert_eq!(status.fanout().unwrap().level(), NotifyLevel::Full);
    assert_eq!(
        h.store.get(created.id).await.unwrap().unwrap().username,
        "ada-renamed"
    );
    // One fan-out per mutation: create + update.
    assert_eq!(h.mailer.sent_count(), 2);
    assert_eq!(h.publisher.published_count(), 2);
}

#[tokio::test]
async fn delete_missing_id_is_not_found_without_fanout() {
    let h = harness();

    let status = h
        .service
        .delete(&admin(), RecordId::new(404))
        .await
        .unwrap();

    assert_eq!(status, MutationStatus::NotFound);
    assert_eq!(h.mailer.sent_count(), 0);
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn update_missing_id_is_not_found_without_fanout() {
    let h = harness();

    let status = h
        .service
        .update(&admin(), RecordId::new(404), &record("ghost"))
        .await
        .unwrap();

    assert_eq!(status, MutationStatus::NotFound);
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn email_failure_never_fails_the_call_or_the_queue() {
    let h = harness();
    h.mailer.fail.store(true, Ordering::SeqCst);

    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    assert_eq!(created.fanout.level(), NotifyLevel::Partial);
    assert!(!created.fanout.email.is_sent());
    assert!(created.fanout.queue.is_sent());
    assert_eq!(h.publisher.published_count(), 1);
    assert_eq!(h.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn queue_failure_never_fails_the_call_or_the_email() {
    let h = harness();
    h.publisher.fail.store(true, Ordering::SeqCst);

    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    assert_eq!(created.fanout.level(), NotifyLevel::Partial);
    assert!(created.fanout.email.is_sent());
    assert!(!created.fanout.queue.is_sent());
    assert_eq!(h.mailer.sent_count(), 1);
}

#[tokio::test]
async fn both_channels_failing_still_reports_success() {
    let h = harness();
    h.mailer.fail.store(true, Ordering::SeqCst);
    h.publisher.fail.store(true, Ordering::SeqCst);

    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    assert_eq!(created.fanout.level(), NotifyLevel::None);
    assert_eq!(h.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn invalid_record_is_rejected_before_any_resolution() {
    let h = harness();

    let err = h
        .service
        .create(&admin(), &NewRecord::new("", "x@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), 400);
    assert_eq!(h.store_resolver.attempts.load(Ordering::SeqCst), 0);
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn failed_mutation_triggers_zero_fanout_attempts() {
    let h = harness_with_store_available(false);

    let err = h.service.create(&admin(), &record("ada")).await.unwrap_err();

    assert!(matches!(err, ServiceError::ResourceUnavailable(_)));
    assert_eq!(err.http_status(), 500);
    assert_eq!(h.mailer.sent_count(), 0);
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn unavailable_store_recovers_only_after_invalidate() {
    let h = harness_with_store_available(false);

    assert!(h.service.create(&admin(), &record("ada")).await.is_err());
    assert!(h.service.create(&admin(), &record("ada")).await.is_err());
    // The failure is cached: one resolution attempt served both calls.
    assert_eq!(h.store_resolver.attempts.load(Ordering::SeqCst), 1);
    assert_eq!(h.stores.state("jdbc/records"), ResolutionState::Failed);

    // Dependency comes back, but the cached failure still answers.
    h.store_resolver.available.store(true, Ordering::SeqCst);
    assert!(h.service.create(&admin(), &record("ada")).await.is_err());

    // Explicit invalidation re-resolves and the pipeline recovers.
    assert!(h.stores.invalidate("jdbc/records"));
    let created = h.service.create(&admin(), &record("ada")).await.unwrap();
    assert_eq!(h.store.count().await.unwrap(), 1);
    assert_eq!(created.fanout.level(), NotifyLevel::Full);
}

#[tokio::test]
async fn reads_are_ungated_and_trigger_no_fanout() {
    let h = harness();
    let created = h.service.create(&admin(), &record("ada")).await.unwrap();
    let fanouts_after_create = h.publisher.published_count();

    let fetched = h.service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.username, "ada");

    let all = h.service.list().await.unwrap();
    assert_eq!(all.len(), 1);

    assert_eq!(h.publisher.published_count(), fanouts_after_create);
    assert_eq!(h.mailer.sent_count(), fanouts_after_create);
}

#[tokio::test]
async fn every_mutation_fans_out_exactly_once_per_channel() {
    let h = harness();

    let created = h.service.create(&admin(), &record("ada")).await.unwrap();
    h.service
        .update(&admin(), created.id, &record("ada2"))
        .await
        .unwrap();
    h.service.delete(&admin(), created.id).await.unwrap();

    assert_eq!(h.mailer.sent_count(), 3);
    assert_eq!(h.publisher.published_count(), 3);
}

#[tokio::test]
async fn denied_update_and_delete_short_circuit() {
    let h = harness();
    let created = h.service.create(&admin(), &record("ada")).await.unwrap();

    let err = h
        .service
        .update(&user(), created.id, &record("sneaky"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied(_)));

    let err = h.service.delete(&user(), created.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied(_)));

    // Row untouched, no extra fan-out beyond the create.
    assert_eq!(
        h.store.get(created.id).await.unwrap().unwrap().username,
        "ada"
    );
    assert_eq!(h.publisher.published_count(), 1);
}

//! Policy-gated record mutation pipeline.
//!
//! This crate composes the workspace into the pipeline the rest of
//! the system calls:
//!
//! ```text
//! inbound call (role signal, payload)
//!        │
//!        ▼
//!   PolicyGate ── mismatch ──► Denied (AccessDenied, 403)
//!        │ match
//!        ▼
//!   MutationService ── validation ──► Failed (InvalidInput, 400)
//!        │                └─ directory ─► Failed (ResourceUnavailable, 500)
//!        │ row written (or NotFound, 404)
//!        ▼
//!   Notifier fan-out (email + queue, best-effort, never fails the call)
//!        │
//!        ▼
//!   outcome returned to caller, fan-out report attached
//! ```
//!
//! Per mutating call the states are `Gated → Authorized → Mutated →
//! Notified(full|partial|none) → Done`, with `Denied` reached from
//! `Gated` and `Failed` from `Authorized`. Once a mutation succeeds
//! the notify step always runs, and its outcome never changes the
//! caller's result.
//!
//! The HTTP layer, SQL execution, and mail/broker transports live
//! outside this workspace; see [`error::ServiceError::http_status`]
//! for how results map onto a transport.

pub mod config;
pub mod error;
pub mod mutation;
pub mod outcome;
pub mod service;
pub mod watch;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use mutation::MutationService;
pub use outcome::{Created, MutationStatus};
pub use service::RecordService;
pub use watch::RecordWatch;

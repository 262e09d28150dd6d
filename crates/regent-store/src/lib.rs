//! Record store seam for the regent record service.
//!
//! The mutation pipeline never talks SQL; it talks [`RecordStore`].
//! Concrete backends (a relational pool resolved through the resource
//! directory, or [`MemoryStore`] for tests and demos) live behind the
//! trait, so the pipeline's semantics are testable without a database.
//!
//! # Not-Found vs Fault
//!
//! `update`/`delete` return `Ok(false)` when the target row does not
//! exist. That is a normal outcome, not an error. [`StoreError`] is
//! reserved for infrastructure faults: connection loss, constraint
//! machinery, backend bugs.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{RecordStore, StoreError};

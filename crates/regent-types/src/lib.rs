//! Shared types for the regent record service.
//!
//! This crate sits at the bottom of the dependency graph and carries
//! the vocabulary every other crate speaks:
//!
//! ```text
//! regent-types  (RecordId, Role, records, SystemMessage, ErrorCode)
//!     ↑              ↑               ↑
//! regent-policy  regent-directory  regent-store / regent-notify
//!     ↑              ↑               ↑
//!           regent-service (pipeline composition)
//! ```
//!
//! # Design Principles
//!
//! - **No I/O here** — pure data and the [`ErrorCode`] convention
//! - **Roles are opaque** — [`Role`] is compared byte-for-byte, never
//!   case-folded or normalized
//! - **Records carry numeric identity** — [`RecordId`] mirrors the
//!   backing store's integer key

pub mod error;
pub mod id;
pub mod message;
pub mod record;
pub mod role;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::RecordId;
pub use message::SystemMessage;
pub use record::{InvalidRecord, NewRecord, UserRecord};
pub use role::Role;

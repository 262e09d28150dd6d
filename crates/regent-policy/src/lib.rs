//! Role-based access control for the regent record service.
//!
//! This crate implements the gating half of the mutation pipeline:
//! who may invoke a mutating operation, decided before the operation
//! runs, as an explicit wrapper rather than inline checks.
//!
//! # Composition Model
//!
//! ```text
//! registration time:            call time:
//!
//! PolicyRequirement ──┐         inbound signal ──► PolicyContext
//!                     ▼                                  │
//!                 PolicyGate ◄───────────────────────────┘
//!                     │ enforce(ctx, proceed)
//!         ┌───────────┴───────────┐
//!         ▼ roles match           ▼ roles differ
//!   proceed() runs,         AccessDenied returned,
//!   result passes through   proceed() never invoked
//! ```
//!
//! A gate is created once per operation at registration time and
//! invoked fresh per call. It holds no per-call state, performs no
//! retries, and the wrapped operation cannot observe whether it was
//! called through the gate or directly.
//!
//! # Example
//!
//! ```
//! use regent_policy::{AccessDenied, PolicyContext, PolicyGate, PolicyRequirement};
//! use regent_types::Role;
//!
//! let gate = PolicyGate::new(PolicyRequirement::new(Role::new("ADMIN")));
//!
//! let admin = PolicyContext::with_role(Role::new("ADMIN"));
//! let result: Result<i32, AccessDenied> = gate.enforce(&admin, || Ok(1));
//! assert_eq!(result.unwrap(), 1);
//!
//! let user = PolicyContext::from_signal(None);
//! let result: Result<i32, AccessDenied> = gate.enforce(&user, || Ok(1));
//! assert!(result.is_err());
//! ```

pub mod context;
pub mod error;
pub mod gate;
pub mod requirement;

pub use context::PolicyContext;
pub use error::AccessDenied;
pub use gate::PolicyGate;
pub use requirement::PolicyRequirement;

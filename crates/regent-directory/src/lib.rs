//! Lazy resolve-once directory for external resource handles.
//!
//! External dependencies (the record store, the message broker) are
//! reached through named handles resolved on first use, not at process
//! start. Once a name resolves, the handle is cached for the process
//! lifetime; once a name fails, the failure is cached too, so a broken
//! dependency does not trigger an expensive lookup on every call.
//!
//! ```text
//!            resolve("jdbc/records")
//!                     │
//!        ┌────────────┴────────────┐
//!        ▼ slot empty              ▼ slot filled
//!  run resolver once          return cached
//!  (concurrent callers        Ok(handle) or
//!   wait on the same slot)    Err(unresolvable)
//! ```
//!
//! Recovery after an external reconfiguration is explicit:
//! [`ResourceDirectory::invalidate`] drops a name's slot so the next
//! `resolve` attempts fresh resolution.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use regent_directory::{ResolveError, Resolver, ResourceDirectory};
//! use std::sync::Arc;
//!
//! struct StaticResolver;
//!
//! #[async_trait]
//! impl Resolver<u32> for StaticResolver {
//!     async fn resolve(&self, name: &str) -> Result<u32, ResolveError> {
//!         match name {
//!             "answer" => Ok(42),
//!             other => Err(ResolveError::new(format!("unknown name '{other}'"))),
//!         }
//!     }
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let dir = ResourceDirectory::new(Arc::new(StaticResolver));
//! assert_eq!(dir.resolve("answer").await.unwrap(), 42);
//! assert!(dir.resolve("missing").await.is_err());
//! # });
//! ```

pub mod directory;
pub mod error;
pub mod resolver;

pub use directory::ResourceDirectory;
pub use error::{DirectoryError, ResolutionState};
pub use resolver::{ResolveError, Resolver};

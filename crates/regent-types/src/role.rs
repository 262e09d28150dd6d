//! Caller authority roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque caller-authority string.
///
/// Roles carry no hierarchy and no semantics beyond equality. The
/// comparison is **exact and case-sensitive**: `"ADMIN"` and `"admin"`
/// are different roles. Policy checks must never case-fold.
///
/// When an inbound call carries no role signal, [`Role::default`]
/// (`"USER"`) applies.
///
/// # Example
///
/// ```
/// use regent_types::Role;
///
/// let admin = Role::new("ADMIN");
/// assert_ne!(admin, Role::new("admin"));
/// assert_eq!(Role::default(), Role::new("USER"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// The role assumed when an inbound call carries no role signal.
    pub const DEFAULT: &'static str = "USER";

    /// Creates a role from its literal string form.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Returns the literal role string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

//! Per-call policy context.

use regent_types::Role;

/// Name of the header-equivalent field carrying the caller's role.
pub const ROLE_SIGNAL: &str = "x-role";

/// The caller's claimed authority for the duration of one call.
///
/// Derived from the inbound role signal at the start of each call and
/// discarded when the call completes. Never cached, never shared
/// across calls.
///
/// # Example
///
/// ```
/// use regent_policy::PolicyContext;
/// use regent_types::Role;
///
/// // Present signal: taken literally, no normalization.
/// let ctx = PolicyContext::from_signal(Some("Admin"));
/// assert_eq!(ctx.role(), &Role::new("Admin"));
///
/// // Absent or empty signal: defaults to USER.
/// assert_eq!(PolicyContext::from_signal(None).role(), &Role::default());
/// assert_eq!(PolicyContext::from_signal(Some("")).role(), &Role::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyContext {
    role: Role,
}

impl PolicyContext {
    /// Derives a context from the inbound role signal.
    ///
    /// A missing or empty signal yields [`Role::default`] (`"USER"`).
    /// A present value is used verbatim: no trimming beyond the empty
    /// check, no case-folding.
    #[must_use]
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(role) if !role.is_empty() => Self {
                role: Role::new(role),
            },
            _ => {
                tracing::warn!(
                    signal = ROLE_SIGNAL,
                    "missing or empty role signal, defaulting to '{}'",
                    Role::DEFAULT
                );
                Self {
                    role: Role::default(),
                }
            }
        }
    }

    /// Creates a context with an explicit role.
    ///
    /// Used by tests and by transports that authenticate out-of-band.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self { role }
    }

    /// Returns the caller's claimed role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }
}

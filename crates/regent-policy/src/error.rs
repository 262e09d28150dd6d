//! Policy denial error.

use regent_types::{ErrorCode, Role};
use thiserror::Error;

/// The caller's role did not match the operation's required role.
///
/// Carries only the **required** role. The caller's claimed role is
/// logged at the gate but deliberately kept out of the error value so
/// it cannot leak into response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("access denied: operation requires role '{required}'")]
pub struct AccessDenied {
    /// The role the operation demands.
    pub required: Role,
}

impl AccessDenied {
    /// Creates a denial for the given required role.
    #[must_use]
    pub fn new(required: Role) -> Self {
        Self { required }
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        "POLICY_ACCESS_DENIED"
    }

    // Retrying with the same role yields the same denial.
    fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regent_types::assert_error_code;

    #[test]
    fn names_required_role_only() {
        let err = AccessDenied::new(Role::new("ADMIN"));
        assert!(err.to_string().contains("ADMIN"));
    }

    #[test]
    fn error_code_convention() {
        assert_error_code(&AccessDenied::new(Role::new("ADMIN")), "POLICY_");
        assert!(!AccessDenied::new(Role::new("ADMIN")).is_recoverable());
    }
}

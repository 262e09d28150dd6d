//! Operation-level policy requirement.

use regent_types::Role;

/// The single role an operation demands of its callers.
///
/// Attached to an operation when its gate is registered and immutable
/// afterwards. There is no multi-role composition: one operation, one
/// required role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRequirement {
    role: Role,
}

impl PolicyRequirement {
    /// Creates a requirement for the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Returns the required role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }
}

impl From<Role> for PolicyRequirement {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_required_role() {
        let req = PolicyRequirement::new(Role::new("ADMIN"));
        assert_eq!(req.role(), &Role::new("ADMIN"));
    }

    #[test]
    fn from_role() {
        let req: PolicyRequirement = Role::new("OPERATOR").into();
        assert_eq!(req.role().as_str(), "OPERATOR");
    }
}

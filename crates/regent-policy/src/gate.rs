//! Access-control gate.
//!
//! [`PolicyGate`] is the explicit replacement for woven-in
//! interception: each gated operation is wrapped by a gate created at
//! registration time, so the check is visible at the call site and
//! testable without any proxy machinery.

use crate::{AccessDenied, PolicyContext, PolicyRequirement};
use std::future::Future;

/// Gate enforcing a [`PolicyRequirement`] ahead of an operation.
///
/// The comparison is exact string equality on the role; there is no
/// hierarchy and no case-folding. On mismatch the wrapped operation is
/// never invoked. On match its result, success or failure, passes
/// through unchanged.
///
/// Gates are cheap, immutable, and safe to share across calls.
#[derive(Debug, Clone)]
pub struct PolicyGate {
    requirement: PolicyRequirement,
}

impl PolicyGate {
    /// Creates a gate for the given requirement.
    #[must_use]
    pub fn new(requirement: PolicyRequirement) -> Self {
        Self { requirement }
    }

    /// Returns the requirement this gate enforces.
    #[must_use]
    pub fn requirement(&self) -> &PolicyRequirement {
        &self.requirement
    }

    /// Checks the context against the requirement without proceeding.
    ///
    /// The claimed role appears in the warn log on denial but not in
    /// the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] carrying the required role on mismatch.
    pub fn check(&self, ctx: &PolicyContext) -> Result<(), AccessDenied> {
        let required = self.requirement.role();
        if ctx.role() == required {
            return Ok(());
        }
        tracing::warn!(
            claimed = %ctx.role(),
            required = %required,
            "access denied: caller role does not match required role"
        );
        Err(AccessDenied::new(required.clone()))
    }

    /// Runs `proceed` only if the context satisfies the requirement.
    ///
    /// # Errors
    ///
    /// Returns the denial (converted into `E`) on mismatch, otherwise
    /// whatever `proceed` returns.
    pub fn enforce<T, E, F>(&self, ctx: &PolicyContext, proceed: F) -> Result<T, E>
    where
        E: From<AccessDenied>,
        F: FnOnce() -> Result<T, E>,
    {
        self.check(ctx)?;
        proceed()
    }

    /// Async variant of [`enforce`](Self::enforce).
    ///
    /// The future is only constructed and awaited after the check
    /// passes, so a denied call does no work.
    ///
    /// # Errors
    ///
    /// Returns the denial (converted into `E`) on mismatch, otherwise
    /// whatever the future resolves to.
    pub async fn enforce_async<T, E, F, Fut>(&self, ctx: &PolicyContext, proceed: F) -> Result<T, E>
    where
        E: From<AccessDenied>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.check(ctx)?;
        proceed().await
    }
}

impl From<PolicyRequirement> for PolicyGate {
    fn from(requirement: PolicyRequirement) -> Self {
        Self::new(requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regent_types::Role;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn admin_gate() -> PolicyGate {
        PolicyGate::new(PolicyRequirement::new(Role::new("ADMIN")))
    }

    #[test]
    fn matching_role_proceeds() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("ADMIN"));

        let result: Result<&str, AccessDenied> = gate.enforce(&ctx, || Ok("ran"));
        assert_eq!(result.unwrap(), "ran");
    }

    #[test]
    fn mismatched_role_never_invokes_proceed() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("USER"));
        let calls = AtomicUsize::new(0);

        let result: Result<(), AccessDenied> = gate.enforce(&ctx, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn denial_carries_required_role() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("USER"));

        let err = gate.check(&ctx).unwrap_err();
        assert_eq!(err.required, Role::new("ADMIN"));
        // The claimed role must not appear in the error value.
        assert!(!err.to_string().contains("USER"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("admin"));
        assert!(gate.check(&ctx).is_err());
    }

    #[test]
    fn failure_of_proceed_passes_through_unchanged() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("ADMIN"));

        let result: Result<(), AccessDenied> =
            gate.enforce(&ctx, || Err(AccessDenied::new(Role::new("OTHER"))));
        assert_eq!(result.unwrap_err().required, Role::new("OTHER"));
    }

    #[test]
    fn matching_role_invokes_exactly_once() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("ADMIN"));
        let calls = AtomicUsize::new(0);

        let _: Result<(), AccessDenied> = gate.enforce(&ctx, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn async_denial_skips_future() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("USER"));
        let calls = AtomicUsize::new(0);

        let result: Result<(), AccessDenied> = gate
            .enforce_async(&ctx, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn async_match_awaits_future() {
        let gate = admin_gate();
        let ctx = PolicyContext::with_role(Role::new("ADMIN"));

        let result: Result<u32, AccessDenied> = gate.enforce_async(&ctx, || async { Ok(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }
}

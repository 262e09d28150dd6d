//! Unified error interface.
//!
//! Every error type in the workspace implements [`ErrorCode`] so that
//! callers, logs, and the (external) transport layer can handle errors
//! by stable machine-readable code instead of display text.
//!
//! # Code Format
//!
//! - **UPPER_SNAKE_CASE**: e.g. `"POLICY_ACCESS_DENIED"`
//! - **Domain-prefixed**: `"POLICY_"`, `"DIRECTORY_"`, `"STORE_"`, ...
//! - **Stable**: a code never changes once published
//!
//! # Example
//!
//! ```
//! use regent_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum BrokerError {
//!     Unreachable,
//!     BadPayload,
//! }
//!
//! impl ErrorCode for BrokerError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Unreachable => "BROKER_UNREACHABLE",
//!             Self::BadPayload => "BROKER_BAD_PAYLOAD",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Unreachable)
//!     }
//! }
//!
//! assert_eq!(BrokerError::Unreachable.code(), "BROKER_UNREACHABLE");
//! assert!(BrokerError::Unreachable.is_recoverable());
//! ```

/// Machine-readable error code interface.
///
/// # Recoverability
///
/// An error is recoverable when retrying or operator action may clear
/// it (transient infrastructure faults, unresolved dependencies).
/// Policy denials and invalid input are not recoverable: retrying the
/// same call will produce the same answer.
pub trait ErrorCode {
    /// Returns the stable UPPER_SNAKE_CASE code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether retrying or corrective action can clear the error.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows workspace conventions.
///
/// # Panics
///
/// Panics with a descriptive message if the code is empty, is not
/// UPPER_SNAKE_CASE, or does not start with `expected_prefix`.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

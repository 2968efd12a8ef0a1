//! Opt-in structural invariant checking.
//!
//! Heavy checks (full reciprocity audits) only run in debug builds or when
//! the `strict-invariants`/`check-invariants` features are enabled.

use crate::net_error::BrepNetError;

/// Implemented by structures whose internal invariants can be audited.
pub trait DebugInvariants {
    /// Panic on the first violated invariant when invariant checking is
    /// enabled; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// Audit all invariants, returning the first violation found.
    fn validate_invariants(&self) -> Result<(), BrepNetError>;
}

/// Run a fallible invariant check and panic with context on failure, but only
/// when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

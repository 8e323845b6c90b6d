//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures, broken engine bookkeeping, and
//! domain failures. An unreachable goal is not an error: it is reported as
//! [`crate::SearchOutcome::NotFound`].

use thiserror::Error;

/// Typed failure for a search invocation.
///
/// Keys are rendered with `Debug` so the error type does not carry the
/// domain's key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<E> {
    /// The policy selected an option the engine refuses before starting.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// A frontier entry referenced a key with no visited-store entry.
    #[error("frontier popped key {key} with no visited-store entry")]
    InvalidNode { key: String },
    /// Path reconstruction hit a predecessor key that could not be resolved.
    #[error("predecessor chain broken at key {key}")]
    CorruptPredecessorChain { key: String },
    /// The domain model failed while expanding a state.
    #[error("domain failure during expansion: {0}")]
    Domain(#[source] E),
}

impl<E> SearchError<E> {
    /// Returns `true` for engine bookkeeping failures (as opposed to policy
    /// or domain failures).
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InvalidNode { .. } | Self::CorruptPredecessorChain { .. }
        )
    }
}

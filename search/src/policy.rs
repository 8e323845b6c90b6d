//! Search policy types.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The default is the unbounded base design: the engine runs until it finds
/// the goal or exhausts the frontier. A budget turns the run into a bounded
/// one that can end in [`crate::SearchOutcome::Aborted`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// Hard cap on non-stale expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Unbounded policy.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Policy that aborts after `max_expansions` expansions.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the start state.
    pub fn validate<E>(&self) -> Result<(), SearchError<E>> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` has used up the budget.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }

    /// JSON echo of the policy for stats and reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
        })
    }
}

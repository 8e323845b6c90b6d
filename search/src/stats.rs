//! `SearchStatsV1`: counters describing one search run.
//!
//! Stats are diagnostic. They are serialized through the kernel's canonical
//! JSON so two runs over the same inputs produce byte-identical output.

use lodestar_kernel::canon::{canonical_json_bytes, CanonError};

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped, non-stale node matched the goal.
    GoalReached { path_len: u64 },
    /// Frontier emptied without matching the goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Frontier pops, stale ones included.
    pub total_pops: u64,
    /// Non-stale pops whose state was expanded.
    pub total_expansions: u64,
    /// Pops discarded because a cheaper node had superseded the entry.
    pub stale_entries_skipped: u64,
    /// Successor states returned by `expand()`.
    pub successors_generated: u64,
    /// Successors rejected because an equal or cheaper path was known.
    pub successors_pruned: u64,
    /// Successful visited-store improvements (start node included).
    pub improvements_accepted: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Distinct keys in the visited store at termination.
    pub visited_size: u64,
    /// Why the run ended.
    pub termination_reason: TerminationReasonV1,
}

impl SearchStatsV1 {
    /// Serialize the stats to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "improvements_accepted": self.improvements_accepted,
            "stale_entries_skipped": self.stale_entries_skipped,
            "successors_generated": self.successors_generated,
            "successors_pruned": self.successors_pruned,
            "termination_reason": termination_reason_to_json(self.termination_reason),
            "total_expansions": self.total_expansions,
            "total_pops": self.total_pops,
            "visited_size": self.visited_size,
        })
    }
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { path_len } => {
            serde_json::json!({"path_len": path_len, "type": "goal_reached"})
        }
        TerminationReasonV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
    }
}

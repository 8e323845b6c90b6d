//! Runner: drive one search and package the outcome as a content-addressed report.
//!
//! The report body is canonical JSON; its digest is
//! `canonical_hash(DOMAIN_SOLVE_REPORT, body)`. Two runs over the same world,
//! start, goal, and policy produce the same digest.

use std::fmt::Display;

use lodestar_kernel::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::hash::{canonical_hash, ContentHash};
use lodestar_search::{search, Heuristic, SearchOutcome, SearchPolicyV1, SearchResult, SearchStatsV1};
use thiserror::Error;
use tracing::info;

/// Domain prefix for solve report hashing.
pub const DOMAIN_SOLVE_REPORT: &[u8] = b"LODESTAR::SOLVE_REPORT::V1\0";

/// Runner failure.
#[derive(Debug, Error)]
pub enum RunError {
    /// The search itself failed (policy, bookkeeping, or domain).
    #[error("search failed: {detail}")]
    Search { detail: String },
    /// The report body could not be canonicalized.
    #[error("report serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Content-addressed summary of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReportV1 {
    pub world_id: String,
    /// `"found"`, `"not_found"`, or `"aborted"`.
    pub outcome: &'static str,
    /// Display form of each path state's key, start first.
    pub path_keys: Vec<String>,
    pub path_cost: Option<i64>,
    pub policy: SearchPolicyV1,
    pub stats: SearchStatsV1,
    /// Digest of the canonical report body.
    pub digest: ContentHash,
}

impl SolveReportV1 {
    /// Report body as JSON (everything except the digest).
    #[must_use]
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::json!({
            "outcome": self.outcome,
            "path_cost": self.path_cost,
            "path_keys": self.path_keys,
            "policy": self.policy.to_json_value(),
            "stats": self.stats.to_json_value(),
            "world_id": self.world_id,
        })
    }

    /// Canonical bytes of the report body.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn body_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.body_json())
    }
}

fn outcome_str<S>(outcome: &SearchOutcome<S>) -> &'static str {
    match outcome {
        SearchOutcome::Found(_) => "found",
        SearchOutcome::NotFound => "not_found",
        SearchOutcome::Aborted => "aborted",
    }
}

/// Search from `start` to `goal` and build a [`SolveReportV1`].
///
/// Returns the raw search result alongside the report so callers can still
/// inspect the path states.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails and [`RunError::Canon`]
/// if the report cannot be serialized.
pub fn solve<S>(
    world_id: &str,
    start: S,
    goal: &S,
    policy: &SearchPolicyV1,
) -> Result<(SearchResult<S>, SolveReportV1), RunError>
where
    S: Heuristic,
    S::Key: Display,
    S::Error: Display,
{
    let result = search(start, goal, policy).map_err(|e| RunError::Search {
        detail: e.to_string(),
    })?;

    let path_keys = result
        .path()
        .map(|path| path.iter().map(|s| s.key().to_string()).collect())
        .unwrap_or_default();

    let mut report = SolveReportV1 {
        world_id: world_id.to_string(),
        outcome: outcome_str(&result.outcome),
        path_keys,
        path_cost: result.path_cost(),
        policy: policy.clone(),
        stats: result.stats.clone(),
        digest: canonical_hash(DOMAIN_SOLVE_REPORT, &[]),
    };
    report.digest = canonical_hash(DOMAIN_SOLVE_REPORT, &report.body_bytes()?);

    info!(
        world_id,
        outcome = report.outcome,
        path_cost = ?report.path_cost,
        expansions = report.stats.total_expansions,
        digest = %report.digest,
        "solve finished"
    );
    Ok((result, report))
}

//! Lock tests: engine behavior at the edges of the domain contract.
//!
//! Failing expansions, colliding keys, expansion budgets, and heuristics that
//! break admissibility.

use std::convert::Infallible;
use std::fmt;

use lock_tests::map_from_edges;
use lodestar_harness::worlds::road_map::Destination;
use lodestar_harness::worlds::sliding_puzzle::SlidingPuzzle;
use lodestar_search::{
    search, Heuristic, SearchError, SearchOutcome, SearchPolicyV1, TerminationReasonV1,
};

// ---------------------------------------------------------------------------
// Test domains
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExpansionRefused {
    at: u32,
}

impl fmt::Display for ExpansionRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot expand past {}", self.at)
    }
}

impl std::error::Error for ExpansionRefused {}

/// A number line walked upward one step at a time; expanding `wall` fails.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Counter {
    at: u32,
    wall: u32,
}

impl Heuristic for Counter {
    type Key = u32;
    type Error = ExpansionRefused;

    fn heuristic(&self, goal: &Self) -> i64 {
        i64::from(goal.at.saturating_sub(self.at))
    }

    fn cost(&self) -> i64 {
        i64::from(self.at)
    }

    fn matches(&self, goal: &Self) -> bool {
        self.at == goal.at
    }

    fn expand(&self) -> Result<Vec<Self>, Self::Error> {
        if self.at == self.wall {
            return Err(ExpansionRefused { at: self.at });
        }
        Ok(vec![Self {
            at: self.at + 1,
            wall: self.wall,
        }])
    }

    fn key(&self) -> u32 {
        self.at
    }
}

/// A puzzle whose keys all collide.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Collapsed(SlidingPuzzle);

impl Heuristic for Collapsed {
    type Key = ();
    type Error = Infallible;

    fn heuristic(&self, goal: &Self) -> i64 {
        self.0.heuristic(&goal.0)
    }

    fn cost(&self) -> i64 {
        self.0.cost()
    }

    fn matches(&self, goal: &Self) -> bool {
        self.0.matches(&goal.0)
    }

    fn expand(&self) -> Result<Vec<Self>, Self::Error> {
        Ok(self.0.expand()?.into_iter().map(Collapsed).collect())
    }

    fn key(&self) -> Self::Key {}
}

fn counter(at: u32, wall: u32) -> Counter {
    Counter { at, wall }
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[test]
fn expansion_failure_propagates_unchanged() {
    let err = search(counter(0, 3), &counter(10, 3), &SearchPolicyV1::default()).unwrap_err();

    assert_eq!(err, SearchError::Domain(ExpansionRefused { at: 3 }));
    assert!(!err.is_internal());
    assert_eq!(
        err.to_string(),
        "domain failure during expansion: cannot expand past 3"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn goal_before_the_wall_is_still_found() {
    let result = search(counter(0, 3), &counter(3, 3), &SearchPolicyV1::default()).unwrap();
    let path = result.into_path().unwrap();
    let steps: Vec<u32> = path.iter().map(|c| c.at).collect();
    assert_eq!(steps, vec![0, 1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Key collisions
// ---------------------------------------------------------------------------

#[test]
fn colliding_keys_collapse_the_search() {
    let start = Collapsed(SlidingPuzzle::parse("1 0 2 / 3 4 5 / 6 7 8").unwrap());
    let goal = Collapsed(SlidingPuzzle::solved(3, 3).unwrap());

    let result = search(start, &goal, &SearchPolicyV1::default()).unwrap();

    // Every successor looks like a costlier path to the start.
    assert_eq!(result.outcome, SearchOutcome::NotFound);
    assert_eq!(result.stats.visited_size, 1);
    assert_eq!(result.stats.total_expansions, 1);
    assert_eq!(result.stats.successors_pruned, 3);
}

// ---------------------------------------------------------------------------
// Expansion budget
// ---------------------------------------------------------------------------

#[test]
fn budget_aborts_long_search() {
    let policy = SearchPolicyV1::with_max_expansions(5);
    let result = search(counter(0, u32::MAX), &counter(100, u32::MAX), &policy).unwrap();

    assert_eq!(result.outcome, SearchOutcome::Aborted);
    assert_eq!(result.stats.total_expansions, 5);
    assert_eq!(
        result.stats.termination_reason,
        TerminationReasonV1::ExpansionBudgetExceeded
    );
    assert!(result.path().is_none());
    assert_eq!(result.path_cost(), None);
}

#[test]
fn budget_does_not_block_goal_found_in_time() {
    let policy = SearchPolicyV1::with_max_expansions(3);
    let result = search(counter(0, u32::MAX), &counter(3, u32::MAX), &policy).unwrap();
    assert_eq!(result.path_cost(), Some(3));
    assert_eq!(result.stats.total_expansions, 3);
}

#[test]
fn zero_budget_is_rejected() {
    let err = search(
        counter(0, 9),
        &counter(1, 9),
        &SearchPolicyV1::with_max_expansions(0),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
}

// ---------------------------------------------------------------------------
// Inadmissible heuristics
// ---------------------------------------------------------------------------

#[test]
fn overestimating_heuristic_still_terminates_with_a_valid_path() {
    // Node 1 is heavily overestimated, so the direct but costlier edge wins.
    let mut map = map_from_edges(&[(0, 1, 1), (1, 2, 1), (0, 2, 5)]);
    map.set_estimate(1, 100).unwrap();

    let result = search(map.at(0), &Destination(2), &SearchPolicyV1::default()).unwrap();
    let nodes: Vec<u32> = result.path().unwrap().iter().map(|s| s.node()).collect();
    assert_eq!(nodes, vec![0, 2]);
    assert_eq!(result.path_cost(), Some(5), "optimality is not promised here");
}

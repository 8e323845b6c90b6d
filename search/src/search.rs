//! Search entry point and expansion loop.
//!
//! One call to [`search`] owns one [`VisitedStore`] and one [`Frontier`].
//! Both are created here and dropped before the call returns; nothing is
//! shared between invocations.

use std::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::contract::Heuristic;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::NodeV1;
use crate::policy::SearchPolicyV1;
use crate::stats::{SearchStatsV1, TerminationReasonV1};
use crate::store::VisitedStore;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S> {
    /// Path from start to goal, both inclusive, in forward order.
    Found(Vec<S>),
    /// The frontier emptied without reaching the goal.
    NotFound,
    /// The policy's expansion budget ran out first.
    Aborted,
}

/// Result of a search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<S> {
    /// The tagged outcome.
    pub outcome: SearchOutcome<S>,
    /// Run counters.
    pub stats: SearchStatsV1,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// The found path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consume the result, returning the found path, if any.
    #[must_use]
    pub fn into_path(self) -> Option<Vec<S>> {
        match self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Total cost of the found path: the last state's `cost()` minus the first's.
    #[must_use]
    pub fn path_cost(&self) -> Option<i64>
    where
        S: Heuristic,
    {
        let path = self.path()?;
        let first = path.first()?;
        let last = path.last()?;
        Some(last.cost().saturating_sub(first.cost()))
    }
}

/// What one iteration of the loop decided.
#[derive(Debug)]
enum Step<K> {
    /// Popped entry was stale or was expanded; keep going.
    Continue,
    /// Popped entry matches the goal.
    Goal(K),
    /// Nothing left to pop.
    Exhausted,
    /// A non-goal entry was popped with no expansion budget left.
    BudgetExceeded,
}

/// Per-invocation search state.
struct SearchRun<'g, S, G: ?Sized>
where
    S: Heuristic<G>,
{
    goal: &'g G,
    store: VisitedStore<S, S::Key>,
    frontier: Frontier<S::Key>,
    total_pops: u64,
    total_expansions: u64,
    stale_entries_skipped: u64,
    successors_generated: u64,
    successors_pruned: u64,
}

impl<'g, S, G: ?Sized> SearchRun<'g, S, G>
where
    S: Heuristic<G>,
{
    fn new(goal: &'g G) -> Self {
        Self {
            goal,
            store: VisitedStore::new(),
            frontier: Frontier::new(),
            total_pops: 0,
            total_expansions: 0,
            stale_entries_skipped: 0,
            successors_generated: 0,
            successors_pruned: 0,
        }
    }

    /// Record the start node and seed the frontier.
    fn seed(&mut self, start: S) {
        let key = start.key();
        let g_cost = start.cost();
        let h_cost = start.heuristic(self.goal);
        let root = NodeV1::root(start, g_cost, h_cost);
        let f_cost = root.f_cost();
        if self.store.try_improve(key.clone(), root) {
            self.frontier.push(key, f_cost, 0);
        }
    }

    fn step(&mut self, policy: &SearchPolicyV1) -> Result<Step<S::Key>, SearchError<S::Error>> {
        let Some(pop) = self.frontier.pop_min() else {
            return Ok(Step::Exhausted);
        };
        self.total_pops += 1;

        let Some(current) = self.store.get(&pop.key) else {
            warn!(key = ?pop.key, "frontier entry has no visited-store node");
            return Err(SearchError::InvalidNode {
                key: format!("{:?}", pop.key),
            });
        };

        // Superseded by a cheaper node after this entry was pushed.
        if pop.f_cost != current.f_cost() {
            trace!(key = ?pop.key, popped_f = pop.f_cost, current_f = current.f_cost(), "skipping stale entry");
            self.stale_entries_skipped += 1;
            return Ok(Step::Continue);
        }

        if current.state.matches(self.goal) {
            return Ok(Step::Goal(pop.key));
        }

        if policy.budget_exhausted(self.total_expansions) {
            return Ok(Step::BudgetExceeded);
        }

        let depth = current.depth.saturating_add(1);
        trace!(key = ?pop.key, f = pop.f_cost, g = current.g_cost, depth = current.depth, "expanding");
        let successors = current.state.expand().map_err(SearchError::Domain)?;
        self.total_expansions += 1;

        for successor in successors {
            self.successors_generated += 1;
            let key = successor.key();
            let g_cost = successor.cost();
            let h_cost = successor.heuristic(self.goal);
            let candidate = NodeV1 {
                state: successor,
                predecessor_key: Some(pop.key.clone()),
                g_cost,
                h_cost,
                depth,
            };
            let f_cost = candidate.f_cost();
            if self.store.try_improve(key.clone(), candidate) {
                self.frontier.push(key, f_cost, depth);
            } else {
                self.successors_pruned += 1;
            }
        }

        Ok(Step::Continue)
    }

    fn stats(&self, termination_reason: TerminationReasonV1) -> SearchStatsV1 {
        SearchStatsV1 {
            total_pops: self.total_pops,
            total_expansions: self.total_expansions,
            stale_entries_skipped: self.stale_entries_skipped,
            successors_generated: self.successors_generated,
            successors_pruned: self.successors_pruned,
            improvements_accepted: self.store.improvements(),
            frontier_high_water: self.frontier.high_water(),
            visited_size: self.store.len() as u64,
            termination_reason,
        }
    }
}

/// Run A* from `start` towards `goal`.
///
/// Nodes are ordered by `f = g + h`, where `g` is the state's own `cost()`
/// and `h` its `heuristic(goal)`. The goal test runs when a node is popped,
/// not when it is generated, so with a consistent heuristic the returned path
/// is optimal. If `start` already matches, the result is `Found([start])`
/// and `expand` is never called.
///
/// An unreachable goal is `Ok` with [`SearchOutcome::NotFound`]; a spent
/// budget is `Ok` with [`SearchOutcome::Aborted`].
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] before any work, from policy validation.
/// - [`SearchError::Domain`] if `expand` fails; the search stops there.
/// - [`SearchError::InvalidNode`] / [`SearchError::CorruptPredecessorChain`]
///   if the engine's own bookkeeping is inconsistent.
pub fn search<S, G>(
    start: S,
    goal: &G,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<S>, SearchError<S::Error>>
where
    S: Heuristic<G>,
    G: ?Sized,
{
    policy.validate()?;

    let mut run: SearchRun<'_, S, G> = SearchRun::new(goal);
    debug!(start = ?start.key(), max_expansions = ?policy.max_expansions, "search started");
    run.seed(start);

    loop {
        match run.step(policy)? {
            Step::Continue => {}
            Step::Goal(goal_key) => {
                let visited = run.store.len();
                let path = reconstruct_path(&mut run.store, goal_key)?;
                let mut stats = run.stats(TerminationReasonV1::GoalReached {
                    path_len: path.len() as u64,
                });
                stats.visited_size = visited as u64;
                debug!(
                    path_len = path.len(),
                    expansions = stats.total_expansions,
                    visited = stats.visited_size,
                    "search reached goal"
                );
                return Ok(SearchResult {
                    outcome: SearchOutcome::Found(path),
                    stats,
                });
            }
            Step::Exhausted => {
                let stats = run.stats(TerminationReasonV1::FrontierExhausted);
                debug!(
                    expansions = stats.total_expansions,
                    visited = stats.visited_size,
                    "search exhausted frontier"
                );
                return Ok(SearchResult {
                    outcome: SearchOutcome::NotFound,
                    stats,
                });
            }
            Step::BudgetExceeded => {
                let stats = run.stats(TerminationReasonV1::ExpansionBudgetExceeded);
                debug!(
                    expansions = stats.total_expansions,
                    frontier = run.frontier.len(),
                    "search aborted on expansion budget"
                );
                return Ok(SearchResult {
                    outcome: SearchOutcome::Aborted,
                    stats,
                });
            }
        }
    }
}

/// Reconstruct the path ending at `goal_key` by walking predecessor keys.
///
/// Nodes are taken out of the store as the walk passes them, so the store is
/// left without the path's nodes. Returns states from start to goal.
///
/// # Errors
///
/// Returns [`SearchError::CorruptPredecessorChain`] if a key on the chain has
/// no node. A chain that revisits a key fails the same way, since its node
/// was already taken.
pub fn reconstruct_path<S, K, E>(
    store: &mut VisitedStore<S, K>,
    goal_key: K,
) -> Result<Vec<S>, SearchError<E>>
where
    K: Ord + Debug,
{
    let mut path = Vec::new();
    let mut current_key = Some(goal_key);

    while let Some(key) = current_key {
        let Some(node) = store.take(&key) else {
            warn!(key = ?key, "predecessor chain references a missing node");
            return Err(SearchError::CorruptPredecessorChain {
                key: format!("{key:?}"),
            });
        };
        current_key = node.predecessor_key;
        path.push(node.state);
    }

    path.reverse();
    Ok(path)
}

//! State capability contract.

use std::fmt::Debug;

/// Trait for states that support best-first search.
///
/// The engine never inspects a state's fields. Everything it knows about a
/// state comes through these five operations. `G` is the goal's type; it
/// defaults to `Self` because start and goal normally share a representation.
///
/// # Contract
///
/// - `heuristic` must be non-negative and must not overestimate the true
///   remaining cost. If it is also consistent (`h(a) <= cost(a, b) + h(b)`)
///   the returned path is optimal. Violations still terminate on finite
///   spaces but may return a suboptimal path.
/// - `cost` is the accumulated cost from the start to this state. It is the
///   authoritative `g` value; the engine does not add edge weights itself.
/// - `key` must be equal for states the engine should treat as the same
///   search position and distinct otherwise. The engine cannot detect a
///   collision: two distinct states sharing a key are silently merged, which
///   breaks deduplication and path reconstruction. A constant key collapses
///   the whole search into a single slot.
pub trait Heuristic<G: ?Sized = Self>: Sized {
    /// Identity used to deduplicate states in the visited store.
    type Key: Clone + Ord + Debug;

    /// Failure raised by [`Heuristic::expand`]. Propagated to the caller unchanged.
    type Error;

    /// Estimated remaining cost from this state to `goal`.
    fn heuristic(&self, goal: &G) -> i64;

    /// Accumulated path cost from the start to this state.
    fn cost(&self) -> i64;

    /// Exact goal test.
    fn matches(&self, goal: &G) -> bool;

    /// All direct successors reachable in one step. Order is not significant.
    ///
    /// # Errors
    ///
    /// Any domain failure; the search stops and returns it as
    /// [`crate::SearchError::Domain`].
    fn expand(&self) -> Result<Vec<Self>, Self::Error>;

    /// Stable identity of this state.
    fn key(&self) -> Self::Key;
}

//! Visited-store node and frontier ordering key.

/// An immutable search node held by the visited store.
///
/// Nodes refer to their predecessor by key, never by reference. The store
/// owns every node of a run; the back-reference is resolved only through a
/// store lookup. Superseding a node means inserting a new one under the same
/// key, not mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeV1<S, K> {
    /// The domain state.
    pub state: S,
    /// Key of the node this one was expanded from (`None` for the start).
    pub predecessor_key: Option<K>,
    /// Accumulated path cost, as reported by the state's `cost()`.
    pub g_cost: i64,
    /// Heuristic estimate cached at creation time.
    pub h_cost: i64,
    /// Number of expansions between the start and this node (start = 0).
    pub depth: u32,
}

impl<S, K> NodeV1<S, K> {
    /// Create the start node.
    #[must_use]
    pub fn root(state: S, g_cost: i64, h_cost: i64) -> Self {
        Self {
            state,
            predecessor_key: None,
            g_cost,
            h_cost,
            depth: 0,
        }
    }

    /// `f_cost = g_cost + h_cost` (the frontier ordering value).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// Whether this is the start node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.predecessor_key.is_none()
    }
}

/// Frontier ordering: lowest `f_cost`, then greatest `depth`, then lowest
/// `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(other.depth.cmp(&self.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

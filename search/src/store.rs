//! Visited store: the best node discovered so far for each state key.
//!
//! Uses a `BTreeMap` (not `HashMap`) so iteration order is a function of the
//! keys alone, which keeps any derived artifact reproducible.

use std::collections::BTreeMap;

use crate::node::NodeV1;

/// Mapping `Key → NodeV1`, owned by exactly one search invocation.
///
/// Invariant: for every key present, the stored node has the lowest `g_cost`
/// proposed for that key so far. [`VisitedStore::try_improve`] is the only
/// way an entry is created or overwritten.
#[derive(Debug)]
pub struct VisitedStore<S, K> {
    nodes: BTreeMap<K, NodeV1<S, K>>,
    improvements: u64,
}

impl<S, K: Ord> VisitedStore<S, K> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            improvements: 0,
        }
    }

    /// Look up the current best node for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&NodeV1<S, K>> {
        self.nodes.get(key)
    }

    /// Whether any node has been recorded for `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Insert `candidate` if `key` is absent or its current node is strictly
    /// more expensive.
    ///
    /// Returns `true` if the candidate was stored. On `false` the store is
    /// untouched: an equal or cheaper path to this state is already known.
    pub fn try_improve(&mut self, key: K, candidate: NodeV1<S, K>) -> bool {
        if let Some(existing) = self.nodes.get(&key) {
            if existing.g_cost <= candidate.g_cost {
                return false;
            }
        }
        self.nodes.insert(key, candidate);
        self.improvements += 1;
        true
    }

    /// Remove and return the node for `key`.
    ///
    /// Used by path reconstruction once the run is over; a key taken twice
    /// yields `None` the second time.
    pub fn take(&mut self, key: &K) -> Option<NodeV1<S, K>> {
        self.nodes.remove(key)
    }

    /// Number of distinct keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of successful `try_improve` calls (creations plus replacements).
    #[must_use]
    pub fn improvements(&self) -> u64 {
        self.improvements
    }
}

impl<S, K: Ord> Default for VisitedStore<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

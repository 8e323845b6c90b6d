//! Min-`f` frontier with lazy staleness.
//!
//! The frontier stores `(key, f_cost)` pairs, not nodes. A key may appear
//! several times at different costs; there is no decrease-key. Entries whose
//! store node has since been superseded are detected by the engine at pop
//! time and skipped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// A frontier entry: a state key plus its ordering key.
///
/// `BinaryHeap` is a max-heap, so the ordering key is wrapped in `Reverse`
/// to extract the minimum first. The state key does not take part in the
/// ordering.
#[derive(Debug)]
struct FrontierEntry<K> {
    order: Reverse<FrontierKey>,
    key: K,
}

impl<K> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<K> Eq for FrontierEntry<K> {}

impl<K> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.order.cmp(&other.order)
    }
}

/// The result of [`Frontier::pop_min`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierPop<K> {
    /// The state key of the popped entry.
    pub key: K,
    /// The `f_cost` recorded when the entry was pushed.
    pub f_cost: i64,
    /// The depth recorded when the entry was pushed.
    pub depth: u32,
}

/// Best-first frontier.
///
/// Ordering is [`FrontierKey`]: ascending `f_cost`, then deeper entries, then
/// insertion order. `creation_order` is assigned here, so two entries never
/// compare equal.
#[derive(Debug)]
pub struct Frontier<K> {
    heap: BinaryHeap<FrontierEntry<K>>,
    next_creation_order: u64,
    high_water: u64,
}

impl<K> Frontier<K> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push `key` with priority `f_cost`.
    pub fn push(&mut self, key: K, f_cost: i64, depth: u32) {
        let order = FrontierKey {
            f_cost,
            depth,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            order: Reverse(order),
            key,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the entry with the lowest ordering key.
    #[must_use]
    pub fn pop_min(&mut self) -> Option<FrontierPop<K>> {
        self.heap.pop().map(|e| FrontierPop {
            key: e.key,
            f_cost: e.order.0.f_cost,
            depth: e.order.0.depth,
        })
    }

    /// Current number of entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of pushes so far.
    #[must_use]
    pub fn total_pushed(&self) -> u64 {
        self.next_creation_order
    }
}

impl<K> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

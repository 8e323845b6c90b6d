//! Lodestar Search: best-first (A*) search over lazily expanded state spaces.
//!
//! This crate is the engine only. Domain models live in `lodestar_harness`
//! and plug in through the [`Heuristic`] capability trait.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_kernel  ←  lodestar_search  ←  lodestar_harness
//! (hashing, canon)    (store, frontier)    (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`Heuristic`] -- capability contract every searchable state satisfies
//! - [`NodeV1`] -- immutable visited-store entry with a predecessor back-reference
//! - [`VisitedStore`] -- best node per state key, the multiple-path pruning point
//! - [`Frontier`] -- min-`f` priority queue with lazy stale-entry handling
//! - [`SearchPolicyV1`] -- optional expansion budget
//! - [`SearchResult`] / [`SearchOutcome`] -- tagged result plus [`SearchStatsV1`]

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod store;

pub use contract::Heuristic;
pub use error::SearchError;
pub use frontier::{Frontier, FrontierPop};
pub use node::{FrontierKey, NodeV1};
pub use policy::SearchPolicyV1;
pub use search::{reconstruct_path, search, SearchOutcome, SearchResult};
pub use stats::{SearchStatsV1, TerminationReasonV1};
pub use store::VisitedStore;

//! Lodestar Harness: concrete worlds for the search engine.
//!
//! Worlds supply states that implement [`lodestar_search::Heuristic`]; the
//! runner drives a search and packages the outcome as a content-addressed
//! report. The harness does NOT implement search logic; it delegates to
//! `lodestar_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;

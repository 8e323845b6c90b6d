//! Lodestar Kernel: content addressing shared by the search engine and its worlds.
//!
//! # API Surface
//!
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 over raw bytes
//! - [`canon::canonical_json_bytes`] -- the single JSON canonicalizer used before hashing
//!
//! The kernel knows nothing about search. Worlds use it to derive strong state
//! keys; the search crate uses it to serialize run statistics.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;

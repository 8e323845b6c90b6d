//! World implementations for the harness runner.

pub mod road_map;
pub mod sliding_puzzle;

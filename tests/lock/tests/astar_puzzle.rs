//! Lock tests: A* over the sliding puzzle.
//!
//! Covers the single-swap and already-solved scenarios, the 26-move textbook
//! instance, an unreachable goal, path soundness, and run determinism.

use std::collections::BTreeSet;

use lock_tests::{is_valid_transition_chain, scramble};
use lodestar_kernel::hash::ContentHash;
use lodestar_harness::worlds::sliding_puzzle::SlidingPuzzle;
use lodestar_search::{search, Heuristic, SearchOutcome, SearchPolicyV1, TerminationReasonV1};
use proptest::prelude::*;

fn board(rows: &[[u8; 3]]) -> SlidingPuzzle {
    SlidingPuzzle::from_rows(rows).unwrap()
}

fn eight_puzzle_goal() -> SlidingPuzzle {
    board(&[[0, 1, 2], [3, 4, 5], [6, 7, 8]])
}

fn textbook_start() -> SlidingPuzzle {
    board(&[[7, 2, 4], [5, 0, 6], [8, 3, 1]])
}

// ---------------------------------------------------------------------------
// Single adjacent swap
// ---------------------------------------------------------------------------

#[test]
fn single_swap_returns_two_state_path() {
    let start = board(&[[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
    let goal = eight_puzzle_goal();

    let result = search(start.clone(), &goal, &SearchPolicyV1::default()).unwrap();

    let path = result.path().expect("goal is one move away");
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], start);
    assert!(path[1].matches(&goal));
    assert_eq!(result.path_cost(), Some(1));
    assert_eq!(result.stats.total_expansions, 1);
}

// ---------------------------------------------------------------------------
// Start already matches goal
// ---------------------------------------------------------------------------

#[test]
fn start_equal_to_goal_returns_single_state() {
    let goal = eight_puzzle_goal();
    let result = search(goal.clone(), &goal, &SearchPolicyV1::default()).unwrap();

    assert_eq!(result.outcome, SearchOutcome::Found(vec![goal]));
    assert_eq!(result.path_cost(), Some(0));
    assert_eq!(result.stats.total_pops, 1);
    assert_eq!(result.stats.total_expansions, 0, "no expansion for a trivial path");
    assert_eq!(result.stats.successors_generated, 0);
}

// ---------------------------------------------------------------------------
// Textbook instance: Manhattan distance 18, optimal solution 26 moves
// ---------------------------------------------------------------------------

#[test]
fn textbook_instance_is_solved_optimally() {
    let start = textbook_start();
    let goal = eight_puzzle_goal();
    assert_eq!(start.heuristic(&goal), 18);

    let result = search(start.clone(), &goal, &SearchPolicyV1::default()).unwrap();
    let path = result.path().expect("textbook instance is solvable");

    assert_eq!(result.path_cost(), Some(26));
    assert_eq!(path.len(), 27);
    assert_eq!(path.first(), Some(&start));
    assert!(path.last().is_some_and(|s| s.matches(&goal)));
    assert!(is_valid_transition_chain(path), "every step must be one legal move");
    assert_eq!(
        result.stats.termination_reason,
        TerminationReasonV1::GoalReached { path_len: 27 }
    );
}

#[test]
fn optimal_path_never_revisits_a_board() {
    let result = search(textbook_start(), &eight_puzzle_goal(), &SearchPolicyV1::default()).unwrap();
    let path = result.path().unwrap();
    let keys: BTreeSet<ContentHash> = path.iter().map(|s| s.key()).collect();
    assert_eq!(keys.len(), path.len());
}

#[test]
fn path_costs_increase_by_one_per_move() {
    let result = search(textbook_start(), &eight_puzzle_goal(), &SearchPolicyV1::default()).unwrap();
    let path = result.into_path().unwrap();
    for (i, state) in path.iter().enumerate() {
        assert_eq!(state.moves(), i as i64);
    }
}

// ---------------------------------------------------------------------------
// Unreachable goal
// ---------------------------------------------------------------------------

#[test]
fn wrong_parity_goal_exhausts_reachable_half() {
    // Two tiles swapped: odd permutation with the blank in place.
    let start = SlidingPuzzle::parse("0 2 1 / 3 4 5").unwrap();
    let goal = SlidingPuzzle::solved(3, 2).unwrap();
    assert!(!start.is_solvable_to(&goal));

    let result = search(start, &goal, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::NotFound);

    // 6! / 2 boards are reachable; each is expanded exactly once.
    assert_eq!(result.stats.visited_size, 360);
    assert_eq!(result.stats.total_expansions, 360);
    assert_eq!(
        result.stats.total_pops,
        result.stats.total_expansions + result.stats.stale_entries_skipped
    );
    assert_eq!(
        result.stats.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_produce_identical_stats_and_paths() {
    let policy = SearchPolicyV1::default();
    let first = search(textbook_start(), &eight_puzzle_goal(), &policy).unwrap();
    let first_bytes = first.stats.to_canonical_json_bytes().unwrap();

    for _ in 1..5 {
        let other = search(textbook_start(), &eight_puzzle_goal(), &policy).unwrap();
        assert_eq!(
            first_bytes,
            other.stats.to_canonical_json_bytes().unwrap(),
            "stats bytes differ across runs"
        );
        assert_eq!(first.path(), other.path());
    }

    let parsed: serde_json::Value = serde_json::from_slice(&first_bytes).unwrap();
    assert_eq!(parsed["termination_reason"]["type"], "goal_reached");
    assert_eq!(parsed["termination_reason"]["path_len"], 27);
}

#[test]
fn concurrent_searches_do_not_interfere() {
    let expected = search(textbook_start(), &eight_puzzle_goal(), &SearchPolicyV1::default())
        .unwrap()
        .into_path()
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    search(textbook_start(), &eight_puzzle_goal(), &SearchPolicyV1::default())
                        .unwrap()
                        .into_path()
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ---------------------------------------------------------------------------
// Scrambled boards
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scrambled_boards_solve_within_scramble_length(
        choices in proptest::collection::vec(0usize..4, 0..14)
    ) {
        let goal = eight_puzzle_goal();
        let start = scramble(&goal, &choices);
        prop_assert!(start.is_solvable_to(&goal));
        prop_assert!(start.heuristic(&goal) <= choices.len() as i64);

        let result = search(start.clone(), &goal, &SearchPolicyV1::default()).unwrap();
        let cost = result.path_cost().unwrap();
        prop_assert!(cost <= choices.len() as i64, "optimal cost never exceeds the scramble");
        prop_assert!(cost >= start.heuristic(&goal), "admissible heuristic is a lower bound");
        prop_assert_eq!(cost % 2, choices.len() as i64 % 2, "move parity is fixed");
        prop_assert!(is_valid_transition_chain(result.path().unwrap()));
    }
}

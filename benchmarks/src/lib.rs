//! Shared fixtures for lodestar benchmark suites.

use lodestar_harness::worlds::road_map::{NodeId, RoadMap};
use lodestar_harness::worlds::sliding_puzzle::SlidingPuzzle;

/// A named 8-puzzle start board with its known optimal solution length.
pub struct PuzzleRegime {
    pub name: &'static str,
    pub start: &'static str,
    pub optimal_moves: i64,
}

/// 8-puzzle instances of increasing difficulty, all solvable to the
/// blank-first goal.
pub const PUZZLE_REGIMES: &[PuzzleRegime] = &[
    PuzzleRegime {
        name: "one_move",
        start: "1 0 2 / 3 4 5 / 6 7 8",
        optimal_moves: 1,
    },
    PuzzleRegime {
        name: "twelve_moves",
        start: "3 1 0 / 6 4 2 / 5 7 8",
        optimal_moves: 12,
    },
    PuzzleRegime {
        name: "eighteen_moves",
        start: "3 2 6 / 8 7 1 / 0 5 4",
        optimal_moves: 18,
    },
    PuzzleRegime {
        name: "textbook",
        start: "7 2 4 / 5 0 6 / 8 3 1",
        optimal_moves: 26,
    },
];

/// Parse a regime's start board.
///
/// # Panics
///
/// Panics on a malformed fixture. Benchmark setup failures are fatal.
#[must_use]
pub fn puzzle_start(regime: &PuzzleRegime) -> SlidingPuzzle {
    SlidingPuzzle::parse(regime.start).expect("fixture board parses")
}

/// The blank-first 3×3 goal.
///
/// # Panics
///
/// Never in practice: 3×3 is a valid shape.
#[must_use]
pub fn eight_puzzle_goal() -> SlidingPuzzle {
    SlidingPuzzle::solved(3, 3).expect("3x3 is a valid shape")
}

/// A `side × side` four-connected grid with unit roads and Manhattan
/// estimates toward the far corner.
///
/// Returns the map together with the far-corner node id.
///
/// # Panics
///
/// Panics only if a fixture weight were negative.
#[must_use]
pub fn grid_map(side: NodeId) -> (RoadMap, NodeId) {
    let mut map = RoadMap::new();
    let id = |row: NodeId, col: NodeId| row * side + col;
    let target = id(side - 1, side - 1);
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                map.add_road(id(row, col), id(row, col + 1), 1)
                    .expect("unit weight");
            }
            if row + 1 < side {
                map.add_road(id(row, col), id(row + 1, col), 1)
                    .expect("unit weight");
            }
            let remaining = (side - 1 - row) + (side - 1 - col);
            map.set_estimate(id(row, col), i64::from(remaining))
                .expect("non-negative estimate");
        }
    }
    (map, target)
}

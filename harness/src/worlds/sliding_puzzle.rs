//! `SlidingPuzzle`: the N×M sliding-tile puzzle (3×3 is the 8-puzzle).
//!
//! Cells hold a permutation of `0..width*height`; `0` is the blank. A move
//! swaps the blank with one orthogonal neighbour and costs 1.
//!
//! Identity is the full cell arrangement (plus shape), hashed under
//! [`DOMAIN_PUZZLE_BOARD`]. The move count is not part of the key, so the
//! same board reached by different routes deduplicates.

use std::convert::Infallible;
use std::fmt;

use lodestar_kernel::hash::{canonical_hash, ContentHash};
use lodestar_search::Heuristic;
use thiserror::Error;

/// Domain prefix for board identity hashing.
pub const DOMAIN_PUZZLE_BOARD: &[u8] = b"LODESTAR::PUZZLE_BOARD::V1\0";

/// The blank tile.
pub const BLANK: u8 = 0;

/// Why a board could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Boards need at least two rows and two columns to have any moves.
    #[error("board must be at least 2x2, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    /// Tile labels are `u8`.
    #[error("board with {cells} cells does not fit u8 tile labels")]
    TooLarge { cells: usize },
    /// A row's length differs from the first row's.
    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRow { row: usize, len: usize, width: usize },
    /// Cells are not exactly `0..width*height`.
    #[error("tiles must be a permutation of 0..{cells}: {detail}")]
    NotAPermutation { cells: usize, detail: String },
    /// A token in textual input was not a tile number.
    #[error("cannot parse tile {token:?}")]
    BadToken { token: String },
}

/// A sliding-puzzle board plus the number of moves made to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingPuzzle {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    moves: i64,
}

impl SlidingPuzzle {
    /// Build a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the shape is degenerate or `cells` is not a
    /// permutation of `0..width*height`.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        if width < 2 || height < 2 {
            return Err(BoardError::TooSmall { width, height });
        }
        let count = width * height;
        if count > usize::from(u8::MAX) + 1 {
            return Err(BoardError::TooLarge { cells: count });
        }
        if cells.len() != count {
            return Err(BoardError::NotAPermutation {
                cells: count,
                detail: format!("got {} cells", cells.len()),
            });
        }
        let mut seen = vec![false; count];
        for &tile in &cells {
            let idx = usize::from(tile);
            if idx >= count {
                return Err(BoardError::NotAPermutation {
                    cells: count,
                    detail: format!("tile {tile} out of range"),
                });
            }
            if seen[idx] {
                return Err(BoardError::NotAPermutation {
                    cells: count,
                    detail: format!("tile {tile} appears twice"),
                });
            }
            seen[idx] = true;
        }
        Ok(Self {
            width,
            height,
            cells,
            moves: 0,
        })
    }

    /// Build a board from rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RaggedRow`] for rows of unequal length, otherwise
    /// as [`SlidingPuzzle::new`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    len: r.len(),
                    width,
                });
            }
            cells.extend_from_slice(r);
        }
        Self::new(width, rows.len(), cells)
    }

    /// Parse a board such as `"1 0 2 / 3 4 5 / 6 7 8"`.
    ///
    /// Rows are separated by `/` or newlines; tiles by whitespace or commas.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BadToken`] for non-numeric tiles, otherwise as
    /// [`SlidingPuzzle::from_rows`].
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in text.split(['/', '\n']) {
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| {
                    t.parse::<u8>().map_err(|_| BoardError::BadToken {
                        token: t.to_string(),
                    })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }

    /// The solved board: tiles in order with the blank in the top-left cell.
    ///
    /// # Errors
    ///
    /// As [`SlidingPuzzle::new`] for a degenerate shape.
    pub fn solved(width: usize, height: usize) -> Result<Self, BoardError> {
        let count = width.saturating_mul(height);
        if count > usize::from(u8::MAX) + 1 {
            return Err(BoardError::TooLarge { cells: count });
        }
        #[allow(clippy::cast_possible_truncation)]
        let cells = (0..count).map(|i| i as u8).collect();
        Self::new(width, height, cells)
    }

    /// The same board with its move count replaced.
    #[must_use]
    pub fn with_moves(mut self, moves: i64) -> Self {
        self.moves = moves;
        self
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Moves made from the start of the search to this board.
    #[must_use]
    pub fn moves(&self) -> i64 {
        self.moves
    }

    /// Tile at `(row, col)`, if in bounds.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// `(row, col)` of `tile`, if present.
    #[must_use]
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| (i / self.width, i % self.width))
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank_position(&self) -> (usize, usize) {
        // Construction guarantees the blank is present.
        self.position_of(BLANK).unwrap_or((0, 0))
    }

    /// Grid distance between `tile`'s cell here and its cell in `goal`.
    #[must_use]
    pub fn manhattan_distance(&self, tile: u8, goal: &Self) -> Option<usize> {
        let (r, c) = self.position_of(tile)?;
        let (gr, gc) = goal.position_of(tile)?;
        Some(r.abs_diff(gr) + c.abs_diff(gc))
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Whether `goal` is reachable from this board by legal moves.
    ///
    /// Every move is one transposition of the cell permutation and moves the
    /// blank one step, so the permutation parity from here to `goal` must
    /// equal the parity of the blank's grid distance. Boards of different
    /// shapes are never reachable.
    #[must_use]
    pub fn is_solvable_to(&self, goal: &Self) -> bool {
        if !self.same_shape(goal) {
            return false;
        }
        let count = self.cells.len();
        let mut goal_index = vec![0usize; count];
        for (i, &tile) in goal.cells.iter().enumerate() {
            goal_index[usize::from(tile)] = i;
        }
        let mapping: Vec<usize> = self
            .cells
            .iter()
            .map(|&tile| goal_index[usize::from(tile)])
            .collect();

        let mut visited = vec![false; count];
        let mut cycles = 0usize;
        for start in 0..count {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = mapping[i];
            }
        }
        let permutation_parity = (count - cycles) % 2;

        let (br, bc) = self.blank_position();
        let (gr, gc) = goal.blank_position();
        let blank_parity = (br.abs_diff(gr) + bc.abs_diff(gc)) % 2;

        permutation_parity == blank_parity
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        Self {
            width: self.width,
            height: self.height,
            cells,
            moves: self.moves + 1,
        }
    }
}

impl Heuristic for SlidingPuzzle {
    type Key = ContentHash;
    type Error = Infallible;

    /// Sum of Manhattan distances of every non-blank tile to its goal cell.
    ///
    /// Each move shifts exactly one tile by one cell, so this never
    /// overestimates and is consistent. Returns 0 against a goal of a
    /// different shape.
    fn heuristic(&self, goal: &Self) -> i64 {
        if !self.same_shape(goal) {
            return 0;
        }
        let mut goal_index = vec![0usize; goal.cells.len()];
        for (i, &tile) in goal.cells.iter().enumerate() {
            goal_index[usize::from(tile)] = i;
        }
        let total: usize = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| {
                let g = goal_index[usize::from(tile)];
                (i / self.width).abs_diff(g / self.width) + (i % self.width).abs_diff(g % self.width)
            })
            .sum();
        i64::try_from(total).unwrap_or(i64::MAX)
    }

    fn cost(&self) -> i64 {
        self.moves
    }

    fn matches(&self, goal: &Self) -> bool {
        self.same_shape(goal) && self.cells == goal.cells
    }

    fn expand(&self) -> Result<Vec<Self>, Self::Error> {
        let (row, col) = self.blank_position();
        let blank = row * self.width + col;
        let mut successors = Vec::with_capacity(4);
        if row > 0 {
            successors.push(self.swapped(blank, blank - self.width));
        }
        if row + 1 < self.height {
            successors.push(self.swapped(blank, blank + self.width));
        }
        if col > 0 {
            successors.push(self.swapped(blank, blank - 1));
        }
        if col + 1 < self.width {
            successors.push(self.swapped(blank, blank + 1));
        }
        Ok(successors)
    }

    fn key(&self) -> ContentHash {
        let mut data = Vec::with_capacity(8 + self.cells.len());
        #[allow(clippy::cast_possible_truncation)]
        {
            data.extend_from_slice(&(self.width as u32).to_le_bytes());
            data.extend_from_slice(&(self.height as u32).to_le_bytes());
        }
        data.extend_from_slice(&self.cells);
        canonical_hash(DOMAIN_PUZZLE_BOARD, &data)
    }
}

impl fmt::Display for SlidingPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

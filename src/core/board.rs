//! The sliding-tile board: a flat permutation over a square grid.
//!
//! ## Representation
//!
//! A board of side `n` is a `Vec<u8>` of length `n²` holding a permutation of
//! `0..n²` in row-major order. Value 0 is the empty cell; every other value
//! is a tile label. Index `i` sits at row `i / n`, column `i % n`.
//!
//! ## Value semantics
//!
//! Every operation takes `&self` and returns a fresh `Board`; nothing mutates
//! a board in place. Illegal slides (non-adjacent tiles, out-of-range
//! indices) return a board equal to the input, so callers detect "nothing
//! happened" by value equality rather than by an error path.
//!
//! ## Solvability
//!
//! Half of all permutations are unreachable from the solved state. Reachable
//! and unreachable boards are separated by a parity invariant over inversion
//! count (plus the empty cell's row on even sides); see [`Board::is_solvable`].

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::rng::PuzzleRng;

/// Smallest supported grid side.
pub const MIN_SIDE: usize = 2;

/// Largest supported grid side. `16² - 1 = 255`, so every tile label of
/// every supported board fits the `u8` cell representation.
pub const MAX_SIDE: usize = 16;

/// A square sliding-tile board.
///
/// Construct one with [`Board::solved`] or [`Board::from_cells`], then derive
/// new positions with [`Board::slide`] and [`Board::shuffled`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Create the solved board for a grid of the given side: tiles `1..n²`
    /// in reading order with the empty cell last.
    ///
    /// # Panics
    /// Panics if `side` is outside `2..=16`.
    #[must_use]
    pub fn solved(side: usize) -> Self {
        assert!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "side must be in range 2..=16"
        );
        let len = side * side;
        let cells = (0..len).map(|i| ((i + 1) % len) as u8).collect();
        Self { side, cells }
    }

    /// Create a board from explicit cells in row-major order.
    ///
    /// # Panics
    /// Panics if `side` is outside `2..=16`, if `cells.len() != side²`, or if
    /// the cells are not a permutation of `0..side²`.
    #[must_use]
    pub fn from_cells(side: usize, cells: Vec<u8>) -> Self {
        assert!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "side must be in range 2..=16"
        );
        assert_eq!(cells.len(), side * side, "expected side² cells");
        let mut seen = vec![false; cells.len()];
        for &v in &cells {
            let v = v as usize;
            assert!(
                v < cells.len() && !seen[v],
                "cells must be a permutation of 0..side²"
            );
            seen[v] = true;
        }
        Self { side, cells }
    }

    /// Grid side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count (`side²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cells as a flat slice in row-major order.
    ///
    /// This is the board representation at the presentation boundary: an
    /// ordered sequence of small non-negative integers of length `side²`.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.side && col < self.side, "cell out of range");
        self.cells[row * self.side + col]
    }

    /// Flat index of `(row, col)`.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// `(row, col)` of a flat index.
    #[must_use]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// Index of the empty cell.
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .expect("board invariant: exactly one empty cell")
    }

    /// Whether the tile at `tile_index` may slide into the empty cell:
    /// the index is in range and orthogonally adjacent to the empty cell
    /// (Manhattan distance exactly 1).
    #[must_use]
    pub fn is_legal_slide(&self, tile_index: usize) -> bool {
        if tile_index >= self.cells.len() {
            return false;
        }
        let (tr, tc) = self.row_col(tile_index);
        let (er, ec) = self.row_col(self.empty_index());
        tr.abs_diff(er) + tc.abs_diff(ec) == 1
    }

    /// Indices of the tiles that may slide right now, in above / left /
    /// right / below order relative to the empty cell. Two to four entries.
    #[must_use]
    pub fn legal_slides(&self) -> SmallVec<[usize; 4]> {
        let empty = self.empty_index();
        let (er, ec) = self.row_col(empty);
        let mut out = SmallVec::new();
        if er > 0 {
            out.push(empty - self.side);
        }
        if ec > 0 {
            out.push(empty - 1);
        }
        if ec + 1 < self.side {
            out.push(empty + 1);
        }
        if er + 1 < self.side {
            out.push(empty + self.side);
        }
        out
    }

    /// Slide the tile at `tile_index` into the empty cell.
    ///
    /// Returns the new board when the slide is legal; otherwise returns a
    /// board equal to `self` (illegal tiles and out-of-range indices are
    /// no-ops, never errors).
    #[must_use]
    pub fn slide(&self, tile_index: usize) -> Board {
        if !self.is_legal_slide(tile_index) {
            return self.clone();
        }
        let empty = self.empty_index();
        let mut cells = self.cells.clone();
        cells.swap(tile_index, empty);
        Board {
            side: self.side,
            cells,
        }
    }

    /// Index of the tile that would slide in `direction`, i.e. the neighbor
    /// of the empty cell on the opposite side. `None` when the empty cell
    /// sits on the corresponding edge.
    #[must_use]
    pub fn tile_toward(&self, direction: Direction) -> Option<usize> {
        let (er, ec) = self.row_col(self.empty_index());
        let (dr, dc) = direction.tile_offset();
        let tr = er.checked_add_signed(dr)?;
        let tc = ec.checked_add_signed(dc)?;
        if tr >= self.side || tc >= self.side {
            return None;
        }
        Some(self.index_of(tr, tc))
    }

    /// Slide in a direction: [`Board::tile_toward`] composed with
    /// [`Board::slide`]. No-op board when no tile can move that way.
    #[must_use]
    pub fn slide_toward(&self, direction: Direction) -> Board {
        match self.tile_toward(direction) {
            Some(tile_index) => self.slide(tile_index),
            None => self.clone(),
        }
    }

    /// Whether this board is the solved arrangement for its side.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let len = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &v)| v as usize == (i + 1) % len)
    }

    /// Number of inversions: pairs of tile labels that appear in the wrong
    /// relative order in the flat sequence. The empty cell does not count.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let mut count = 0;
        for (i, &a) in self.cells.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for &b in &self.cells[i + 1..] {
                if b != 0 && b < a {
                    count += 1;
                }
            }
        }
        count
    }

    /// Parity invariant identifying this board's reachability class.
    ///
    /// A horizontal slide never changes the inversion count; a vertical
    /// slide moves a tile past `side - 1` others (flipping inversion parity
    /// exactly when `side` is even) and shifts the empty cell's row by one.
    /// So inversion parity is invariant on odd sides, and inversion parity
    /// plus the empty row is invariant on even sides.
    fn class_parity(&self) -> usize {
        let inversions = self.inversions();
        if self.side % 2 == 1 {
            inversions % 2
        } else {
            (inversions + self.row_col(self.empty_index()).0) % 2
        }
    }

    /// Whether this board can reach the solved state via legal slides.
    ///
    /// The solved board has zero inversions and its empty cell on the last
    /// row, so its class parity is `(side - 1) % 2`.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.class_parity() == (self.side - 1) % 2
    }

    /// A uniformly shuffled board in the same reachability class as `self`,
    /// i.e. reachable from `self` via legal slides.
    ///
    /// Shuffles the cells and re-rolls candidates in the wrong class (half
    /// of all permutations, so two attempts on average). The result may
    /// coincide with the solved board or with `self`; callers wanting a
    /// strictly scrambled board re-roll on their side.
    #[must_use]
    pub fn shuffled(&self, rng: &mut PuzzleRng) -> Board {
        let target = self.class_parity();
        let mut candidate = self.clone();
        loop {
            rng.shuffle(&mut candidate.cells);
            if candidate.class_parity() == target {
                return candidate;
            }
        }
    }
}

impl fmt::Display for Board {
    /// Grid rendering with aligned columns; the empty cell prints as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    0 => write!(f, "{:>width$}", ".")?,
                    v => write!(f, "{v:>width$}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Slide directions for the keyboard input path.
//!
//! A direction names the way a *tile* travels, so the candidate tile is the
//! neighbor of the empty cell on the opposite side: pressing `Up` slides the
//! tile below the empty cell upward. Resolution to a concrete tile index
//! lives on [`Board::tile_toward`](crate::core::Board::tile_toward).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four orthogonal slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in `Up`, `Down`, `Left`, `Right` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset from the empty cell to the tile this direction
    /// moves. `Up` moves the tile one row below the empty cell, and so on.
    #[must_use]
    pub fn tile_offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}

//! Per-slide records for the session's move history.
//!
//! A record captures one applied slide: which tile moved, from where, and
//! into which cell (the empty cell at the time). Replaying the `from_index`
//! values in sequence over the starting board reproduces the final board.
//! Rejected slides never produce a record.

use serde::{Deserialize, Serialize};

/// One applied slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Zero-based position of this slide within its game.
    pub sequence: u32,

    /// Label of the tile that moved.
    pub tile: u8,

    /// Index the tile moved from.
    pub from_index: usize,

    /// Index the tile moved to (the empty cell before the slide).
    pub to_index: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(sequence: u32, tile: u8, from_index: usize, to_index: usize) -> Self {
        Self {
            sequence,
            tile,
            from_index,
            to_index,
        }
    }
}

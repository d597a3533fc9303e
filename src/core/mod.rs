//! Core engine types: boards, slide directions, move records, RNG.
//!
//! This module contains the pure puzzle mechanics. Nothing here tracks
//! time, scores, or input; sessions layer those on top.

pub mod board;
pub mod direction;
pub mod record;
pub mod rng;

pub use board::{Board, MAX_SIDE, MIN_SIDE};
pub use direction::Direction;
pub use record::MoveRecord;
pub use rng::{PuzzleRng, RngState};

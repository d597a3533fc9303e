//! # fifteen
//!
//! A sliding-tile puzzle engine (the 15-puzzle and its n-by-n relatives).
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Boards are immutable values. Sliding a tile returns a
//!    new board; an illegal request returns an unchanged one, so callers
//!    detect no-ops by value equality instead of error handling.
//!
//! 2. **Any Square Side**: Every API takes the side length as context.
//!    Nothing assumes the classic 4x4.
//!
//! 3. **Deterministic Randomness**: Scrambles come from a seeded RNG with
//!    explicit forking, so whole sessions replay exactly from one seed.
//!
//! ## Solvability
//!
//! Exactly half of all tile arrangements can reach the solved board by
//! legal slides. Scrambling shuffles until the arrangement lands in the
//! same reachable half as the starting board, so a scramble is always
//! solvable and never needs a solver to prove it.
//!
//! ## Modules
//!
//! - `core`: Boards, slide directions, move records, RNG
//! - `session`: A playable game with move counting, timing, best score
//! - `store`: Single-integer best-score persistence
//!
//! ## Example
//!
//! ```
//! use fifteen::{SessionBuilder, SlideOutcome};
//!
//! let mut session = SessionBuilder::new().side(4).build(42);
//! session.begin();
//!
//! let tile = session.board().legal_slides()[0];
//! assert_eq!(session.slide_tile(tile), SlideOutcome::Moved);
//! assert_eq!(session.moves(), 1);
//! ```

pub mod core;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Board, Direction, MoveRecord, PuzzleRng, RngState, MAX_SIDE, MIN_SIDE};

pub use crate::session::{
    format_mm_ss, GameClock, GameSession, SessionBuilder, SessionPhase, SlideOutcome,
};

pub use crate::store::{best_score_key, FileStore, MemoryStore, ScoreStore, StoreError};

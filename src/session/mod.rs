//! Session layer: a playable game wrapped around the core board.
//!
//! The board knows nothing about time, scores, or phases; this module
//! supplies them. Frontends drive a [`GameSession`] and read its state
//! back for display.

pub mod clock;
pub mod game;

pub use clock::{format_mm_ss, GameClock};
pub use game::{GameSession, SessionBuilder, SessionPhase, SlideOutcome};

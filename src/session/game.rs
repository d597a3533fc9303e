//! A playable puzzle session: board, move counting, timing, best score.
//!
//! ## Lifecycle
//!
//! A session is built in the `Ready` phase with a solved board. `begin`
//! scrambles the board and moves to `Running`; slides are only applied
//! while `Running`. Solving the board moves to `Solved`, stops the clock,
//! and updates the best score if this game beat it. `begin` can be called
//! again at any time to start a fresh game on the same session.
//!
//! ## Determinism
//!
//! The session owns a seeded [`PuzzleRng`] and forks it once per `begin`,
//! so the sequence of scrambles is fully determined by the build seed.

use im::Vector;

use crate::core::{Board, Direction, MoveRecord, PuzzleRng, MAX_SIDE, MIN_SIDE};

use super::clock::GameClock;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Built but not yet begun; the board is solved and slides are ignored.
    Ready,
    /// A scrambled game is in progress.
    Running,
    /// The current game has been solved; slides are ignored until `begin`.
    Solved,
}

/// What a slide request did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The tile slid into the empty cell.
    Moved,
    /// The tile slid in and completed the puzzle.
    Solved,
    /// Nothing happened: illegal tile, out-of-range index, or wrong phase.
    Rejected,
}

impl SlideOutcome {
    /// Whether the board changed.
    #[must_use]
    pub fn applied(self) -> bool {
        self != SlideOutcome::Rejected
    }
}

/// A single-player sliding puzzle session.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    phase: SessionPhase,
    moves: u32,
    /// One record per applied slide of the current game.
    history: Vector<MoveRecord>,
    clock: GameClock,
    rng: PuzzleRng,
    /// Fewest moves in any solved game, carried across `begin` calls.
    best: Option<u32>,
    /// Whether the most recent solve improved `best`.
    best_changed: bool,
}

/// Builder for creating a `GameSession`.
pub struct SessionBuilder {
    side: usize,
    best: Option<u32>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            side: 4,
            best: None,
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn side(mut self, side: usize) -> Self {
        assert!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "side must be between {MIN_SIDE} and {MAX_SIDE}"
        );
        self.side = side;
        self
    }

    /// Seed the best score, typically loaded from a score store.
    #[must_use]
    pub fn best(mut self, moves: u32) -> Self {
        self.best = Some(moves);
        self
    }

    /// Build the session in the `Ready` phase with a solved board.
    #[must_use]
    pub fn build(self, seed: u64) -> GameSession {
        GameSession {
            board: Board::solved(self.side),
            phase: SessionPhase::Ready,
            moves: 0,
            history: Vector::new(),
            clock: GameClock::new(),
            rng: PuzzleRng::new(seed),
            best: self.best,
            best_changed: false,
        }
    }
}

impl GameSession {
    // === Queries ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Grid side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.board.side()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Applied slides in the current game.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Records of the current game's applied slides, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The session clock. Runs while a game is in progress.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Elapsed whole seconds of the current game.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    /// Fewest moves in any solved game, if one has been recorded.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Whether the most recent solve improved the best score.
    ///
    /// Cleared by `begin`; callers persist the new best when this is set.
    #[must_use]
    pub fn best_changed(&self) -> bool {
        self.best_changed
    }

    // === Lifecycle ===

    /// Start a fresh game: scramble the board, zero the counters, start
    /// the clock.
    ///
    /// The scramble is re-rolled until it is not already solved, so a
    /// begun game always takes at least one move to finish.
    pub fn begin(&mut self) {
        let solved = Board::solved(self.board.side());
        let mut scramble_rng = self.rng.fork();

        let mut board = solved.shuffled(&mut scramble_rng);
        while board.is_solved() {
            board = solved.shuffled(&mut scramble_rng);
        }

        self.board = board;
        self.phase = SessionPhase::Running;
        self.moves = 0;
        self.history = Vector::new();
        self.best_changed = false;
        self.clock.reset();
        self.clock.start();
    }

    /// Try to slide the tile at `tile_index` into the empty cell.
    ///
    /// Counts a move and records it only when the board actually changes.
    /// Out-of-range indices, non-adjacent tiles, the empty cell itself,
    /// and any request outside the `Running` phase are all rejected.
    pub fn slide_tile(&mut self, tile_index: usize) -> SlideOutcome {
        if self.phase != SessionPhase::Running {
            return SlideOutcome::Rejected;
        }

        let next = self.board.slide(tile_index);
        if next == self.board {
            return SlideOutcome::Rejected;
        }

        let record = MoveRecord::new(
            self.moves,
            self.board.cells()[tile_index],
            tile_index,
            self.board.empty_index(),
        );
        self.history.push_back(record);
        self.moves += 1;
        self.board = next;

        if self.board.is_solved() {
            self.finish();
            SlideOutcome::Solved
        } else {
            SlideOutcome::Moved
        }
    }

    /// Try to slide the tile that travels in `direction`.
    ///
    /// Rejected when the empty cell is on the far edge for that direction.
    pub fn slide_toward(&mut self, direction: Direction) -> SlideOutcome {
        match self.board.tile_toward(direction) {
            Some(tile_index) => self.slide_tile(tile_index),
            None => SlideOutcome::Rejected,
        }
    }

    /// Finish the current game: stop the clock and settle the best score.
    ///
    /// Only a strictly lower move count replaces an existing best.
    fn finish(&mut self) {
        self.clock.stop();
        self.phase = SessionPhase::Solved;

        if self.best.map_or(true, |best| self.moves < best) {
            self.best = Some(self.moves);
            self.best_changed = true;
        }
    }
}

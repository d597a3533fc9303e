//! Terminal frontend for the sliding puzzle.
//!
//! Draws the board in the alternate screen and drives a `GameSession`
//! from arrow keys and mouse clicks. Best scores are read from and
//! written to a file store under the data directory; if the store is
//! unavailable the game still runs, it just forgets.

use std::env;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue, style::Print};

use fifteen::store::ScoreStore;
use fifteen::{
    best_score_key, format_mm_ss, Direction, FileStore, GameSession, MemoryStore, SessionBuilder,
    SessionPhase, SlideOutcome, MAX_SIDE, MIN_SIDE,
};

/// Screen cell where the top-left board cell starts.
const GRID_LEFT: u16 = 2;
const GRID_TOP: u16 = 2;

/// Character footprint of one board cell.
const CELL_W: u16 = 6;
const CELL_H: u16 = 2;

/// How long to wait for input before refreshing the clock display.
const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "fifteen", about = "Sliding tile puzzle for the terminal")]
struct Args {
    /// Board side length (classic 15-puzzle is 4)
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Scramble seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for best-score files (default: ~/.fifteen)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !(MIN_SIDE..=MAX_SIDE).contains(&args.size) {
        anyhow::bail!("--size must be between {MIN_SIDE} and {MAX_SIDE}");
    }

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let mut store: Box<dyn ScoreStore> = match FileStore::open(&data_dir) {
        Ok(store) => Box::new(store),
        Err(err) => {
            eprintln!(
                "warning: cannot open {} ({err}); best scores will not be saved",
                data_dir.display()
            );
            Box::new(MemoryStore::new())
        }
    };

    let key = best_score_key(args.size);
    let best = store.get(&key).unwrap_or(None);

    let mut builder = SessionBuilder::new().side(args.size);
    if let Some(best) = best {
        builder = builder.best(best);
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = builder.build(seed);

    let _guard = TerminalGuard::enter()?;
    run(&mut session, store.as_mut(), &key, seed)
}

fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".fifteen"),
        None => PathBuf::from(".fifteen"),
    }
}

/// Event loop: draw, wait for input, apply it, repeat.
fn run(
    session: &mut GameSession,
    store: &mut dyn ScoreStore,
    key: &str,
    seed: u64,
) -> anyhow::Result<()> {
    let mut out = io::stdout();
    let mut notice: Option<String> = None;

    loop {
        draw(&mut out, session, seed, notice.as_deref())?;

        if !event::poll(TICK)? {
            continue;
        }

        let outcome = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        notice = None;
                        session.begin();
                        continue;
                    }
                    KeyCode::Up => session.slide_toward(Direction::Up),
                    KeyCode::Down => session.slide_toward(Direction::Down),
                    KeyCode::Left => session.slide_toward(Direction::Left),
                    KeyCode::Right => session.slide_toward(Direction::Right),
                    _ => continue,
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => match cell_at(session.side(), column, row) {
                Some(tile_index) => session.slide_tile(tile_index),
                None => continue,
            },
            _ => continue,
        };

        if outcome == SlideOutcome::Solved && session.best_changed() {
            if let Some(best) = session.best() {
                if let Err(err) = store.put(key, best) {
                    notice = Some(format!("could not save best score: {err}"));
                }
            }
        }
    }
}

/// Map a screen position to a board cell index.
fn cell_at(side: usize, column: u16, row: u16) -> Option<usize> {
    let x = column.checked_sub(GRID_LEFT)?;
    let y = row.checked_sub(GRID_TOP)?;
    let col = (x / CELL_W) as usize;
    let board_row = (y / CELL_H) as usize;
    (board_row < side && col < side).then_some(board_row * side + col)
}

fn draw(
    out: &mut Stdout,
    session: &GameSession,
    seed: u64,
    notice: Option<&str>,
) -> io::Result<()> {
    let board = session.board();
    let side = board.side();

    let best = match session.best() {
        Some(best) => best.to_string(),
        None => "--".to_string(),
    };
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!(
            "  moves {:<5} time {:<7} best {best}    {side}x{side} seed {seed}",
            session.moves(),
            format_mm_ss(session.elapsed_secs()),
        ))
    )?;

    for row in 0..side {
        let mut line = String::new();
        for col in 0..side {
            let label = board.get(row, col);
            if label == 0 {
                line.push_str(&" ".repeat(CELL_W as usize));
            } else {
                line.push_str(&format!("{label:^width$}", width = CELL_W as usize));
            }
        }
        queue!(
            out,
            MoveTo(GRID_LEFT, GRID_TOP + row as u16 * CELL_H),
            Print(line)
        )?;
    }

    let message = match session.phase() {
        SessionPhase::Ready => "press n to scramble and start".to_string(),
        SessionPhase::Running => "slide the tiles into order".to_string(),
        SessionPhase::Solved => {
            let tag = if session.best_changed() { "  new best!" } else { "" };
            format!(
                "solved in {} moves in {}{tag}",
                session.moves(),
                format_mm_ss(session.elapsed_secs())
            )
        }
    };

    let footer_top = GRID_TOP + side as u16 * CELL_H + 1;
    queue!(out, MoveTo(GRID_LEFT, footer_top), Print(message))?;
    queue!(
        out,
        MoveTo(GRID_LEFT, footer_top + 1),
        Print("arrows slide   click a tile   n new game   q quit")
    )?;
    if let Some(notice) = notice {
        queue!(out, MoveTo(GRID_LEFT, footer_top + 2), Print(notice))?;
    }

    out.flush()
}

/// Puts the terminal into game mode on construction and restores it on
/// drop, so panics and errors cannot leave the shell in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_the_grid_origin() {
        assert_eq!(cell_at(4, GRID_LEFT, GRID_TOP), Some(0));
    }

    #[test]
    fn test_cell_at_maps_interior_cells() {
        // Anywhere within a cell's footprint maps to that cell.
        assert_eq!(cell_at(4, GRID_LEFT + CELL_W, GRID_TOP), Some(1));
        assert_eq!(
            cell_at(4, GRID_LEFT + 2 * CELL_W - 1, GRID_TOP + CELL_H - 1),
            Some(1)
        );
        // Last cell of a 4x4.
        assert_eq!(
            cell_at(4, GRID_LEFT + 3 * CELL_W, GRID_TOP + 3 * CELL_H),
            Some(15)
        );
    }

    #[test]
    fn test_cell_at_rejects_outside_positions() {
        assert_eq!(cell_at(4, 0, 0), None);
        assert_eq!(cell_at(4, GRID_LEFT + 4 * CELL_W, GRID_TOP), None);
        assert_eq!(cell_at(4, GRID_LEFT, GRID_TOP + 4 * CELL_H), None);
    }
}

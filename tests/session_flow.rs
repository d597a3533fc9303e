//! End-to-end session flows: scramble, play to completion, and carry
//! best scores across games and process restarts.
//!
//! The solving bot walks the shortest slide sequence found by
//! breadth-first search, so these tests stay on small grids.

use std::collections::{HashMap, VecDeque};

use fifteen::store::ScoreStore;
use fifteen::{
    best_score_key, Board, FileStore, GameSession, MemoryStore, SessionBuilder, SessionPhase,
    SlideOutcome,
};
use tempfile::tempdir;

/// Shortest slide sequence from `start` to the solved board.
fn shortest_solution(start: &Board) -> Vec<usize> {
    let mut parents: HashMap<Board, (Board, usize)> = HashMap::new();
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(board) = queue.pop_front() {
        if board.is_solved() {
            let mut path = Vec::new();
            let mut cursor = board;
            while &cursor != start {
                let (parent, tile) = parents[&cursor].clone();
                path.push(tile);
                cursor = parent;
            }
            path.reverse();
            return path;
        }

        for tile in board.legal_slides() {
            let next = board.slide(tile);
            if &next != start && !parents.contains_key(&next) {
                parents.insert(next.clone(), (board.clone(), tile));
                queue.push_back(next);
            }
        }
    }

    panic!("start board is not solvable");
}

/// Play the running session to completion along the shortest path.
fn solve(session: &mut GameSession) -> SlideOutcome {
    let path = shortest_solution(session.board());
    let mut outcome = SlideOutcome::Rejected;
    for tile in path {
        outcome = session.slide_tile(tile);
    }
    outcome
}

#[test]
fn test_full_game_on_a_3x3_board() {
    let mut session = SessionBuilder::new().side(3).build(21);
    session.begin();
    let start = session.board().clone();

    let outcome = solve(&mut session);

    assert_eq!(outcome, SlideOutcome::Solved);
    assert_eq!(session.phase(), SessionPhase::Solved);
    assert!(session.board().is_solved());
    assert!(!session.clock().is_running());
    assert_eq!(session.moves() as usize, session.history().len());

    // The recorded history replays from the scramble to the solved board.
    let mut replayed = start;
    for record in session.history() {
        replayed = replayed.slide(record.from_index);
    }
    assert!(replayed.is_solved());
}

#[test]
fn test_same_seed_sessions_play_identically() {
    let mut a = SessionBuilder::new().side(3).build(7);
    let mut b = SessionBuilder::new().side(3).build(7);
    a.begin();
    b.begin();
    assert_eq!(a.board(), b.board());

    let path = shortest_solution(a.board());
    for &tile in &path {
        a.slide_tile(tile);
        b.slide_tile(tile);
    }

    assert_eq!(a.board(), b.board());
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.best(), b.best());
}

#[test]
fn test_best_score_round_trip_through_a_store() {
    let mut store = MemoryStore::new();
    let key = best_score_key(2);
    assert_eq!(store.get(&key).unwrap(), None);

    // First launch: no stored best; solving establishes one.
    let mut session = SessionBuilder::new().side(2).build(5);
    session.begin();
    solve(&mut session);

    assert!(session.best_changed());
    let best = session.best().unwrap();
    store.put(&key, best).unwrap();

    // Second launch: seed the loaded best into a fresh session.
    let loaded = store.get(&key).unwrap().unwrap();
    let mut next = SessionBuilder::new().side(2).best(loaded).build(6);
    next.begin();
    solve(&mut next);

    if next.moves() < best {
        assert!(next.best_changed());
        assert_eq!(next.best(), Some(next.moves()));
    } else {
        assert!(!next.best_changed());
        assert_eq!(next.best(), Some(best));
    }
}

#[test]
fn test_best_score_survives_restart_via_file_store() {
    let dir = tempdir().unwrap();
    let key = best_score_key(2);

    let best = {
        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(&key).unwrap(), None);

        let mut session = SessionBuilder::new().side(2).build(5);
        session.begin();
        solve(&mut session);
        assert!(session.best_changed());

        let best = session.best().unwrap();
        store.put(&key, best).unwrap();
        best
    };

    // Reopen as a fresh process would.
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get(&key).unwrap(), Some(best));

    // Scores are tracked per grid size.
    assert_eq!(store.get(&best_score_key(3)).unwrap(), None);
}

#[test]
fn test_stores_are_interchangeable_behind_the_trait() {
    fn exercise(store: &mut dyn ScoreStore) {
        let key = best_score_key(4);
        assert_eq!(store.get(&key).unwrap(), None);
        store.put(&key, 80).unwrap();
        assert_eq!(store.get(&key).unwrap(), Some(80));
    }

    let dir = tempdir().unwrap();
    exercise(&mut MemoryStore::new());
    exercise(&mut FileStore::open(dir.path()).unwrap());
}

#[test]
fn test_many_games_on_one_session_track_the_minimum() {
    let mut session = SessionBuilder::new().side(2).build(17);
    let mut minimum: Option<u32> = None;

    for _ in 0..5 {
        session.begin();
        solve(&mut session);

        let moves = session.moves();
        let improved = minimum.map_or(true, |m| moves < m);
        assert_eq!(session.best_changed(), improved);
        if improved {
            minimum = Some(moves);
        }
        assert_eq!(session.best(), minimum);
    }
}

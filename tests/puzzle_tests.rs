//! Puzzle engine integration tests.
//!
//! These tests play whole rounds through the public API and check the
//! events a host would see.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pair_lock::{
    CardId, IgnoreReason, MatchingPuzzle, Phase, PuzzleConfig, PuzzleEvent, PuzzleEventKind,
    SelectOutcome, Symbol,
};

fn abc(seed: u64) -> MatchingPuzzle {
    MatchingPuzzle::new(PuzzleConfig::new(["A", "B", "C"]).with_seed(seed)).unwrap()
}

fn pair(puzzle: &MatchingPuzzle, glyph: &str) -> (CardId, CardId) {
    let ids = puzzle.board().positions_of(&Symbol::new(glyph));
    assert_eq!(ids.len(), 2, "{} should appear exactly twice", glyph);
    (ids[0], ids[1])
}

fn record(puzzle: &mut MatchingPuzzle) -> Rc<RefCell<Vec<PuzzleEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    puzzle.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    log
}

/// Matching A, B and C in turn solves the puzzle and fires Solved once.
#[test]
fn test_abc_scenario() {
    let mut puzzle = abc(42);
    assert_eq!(puzzle.board().len(), 6);

    let solved = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&solved);
    puzzle.subscribe_to(PuzzleEventKind::Solved, move |_| *counter.borrow_mut() += 1);

    let (a1, a2) = pair(&puzzle, "A");
    puzzle.select_card(a1);
    puzzle.select_card(a2);
    assert!(puzzle.board().get(a1).unwrap().matched);
    assert!(puzzle.board().get(a2).unwrap().matched);
    assert_eq!(puzzle.matched_pairs(), 1);
    assert_eq!(*solved.borrow(), 0);

    let (b1, b2) = pair(&puzzle, "B");
    puzzle.select_card(b1);
    puzzle.select_card(b2);
    assert_eq!(puzzle.matched_pairs(), 2);
    assert_eq!(*solved.borrow(), 0);

    let (c1, c2) = pair(&puzzle, "C");
    puzzle.select_card(c1);
    let outcome = puzzle.select_card(c2);
    assert_eq!(outcome, SelectOutcome::Solved { first: c1, second: c2 });
    assert_eq!(puzzle.matched_pairs(), 3);
    assert_eq!(puzzle.phase(), Phase::Solved);
    assert_eq!(*solved.borrow(), 1);

    // Further input is ignored and never re-fires Solved.
    for id in 0..6 {
        assert_eq!(
            puzzle.select_card(CardId::new(id)),
            SelectOutcome::Ignored(IgnoreReason::Solved)
        );
    }
    puzzle.advance(Duration::from_secs(10));
    assert_eq!(*solved.borrow(), 1);
}

/// A then B flips both up, then both back down after the delay.
#[test]
fn test_mismatch_scenario() {
    let mut puzzle = abc(7);
    let events = record(&mut puzzle);

    let (a, _) = pair(&puzzle, "A");
    let (b, _) = pair(&puzzle, "B");

    puzzle.select_card(a);
    puzzle.select_card(b);
    assert!(puzzle.board().get(a).unwrap().face_up);
    assert!(puzzle.board().get(b).unwrap().face_up);

    puzzle.advance(Duration::from_millis(1000));
    assert!(!puzzle.board().get(a).unwrap().face_up);
    assert!(!puzzle.board().get(b).unwrap().face_up);
    assert_eq!(puzzle.matched_pairs(), 0);
    assert_eq!(puzzle.phase(), Phase::Idle);

    assert_eq!(
        *events.borrow(),
        vec![
            PuzzleEvent::CardFlipped { card: a },
            PuzzleEvent::CardFlipped { card: b },
            PuzzleEvent::PairMismatched { first: a, second: b },
            PuzzleEvent::CardsHidden { first: a, second: b },
        ]
    );
}

/// Rapid clicks while a mismatch is on screen change nothing.
#[test]
fn test_input_during_mismatch_delay() {
    let mut puzzle = abc(3);
    let (a1, a2) = pair(&puzzle, "A");
    let (b, _) = pair(&puzzle, "B");

    puzzle.select_card(a1);
    puzzle.select_card(b);

    for _ in 0..5 {
        assert_eq!(
            puzzle.select_card(a2),
            SelectOutcome::Ignored(IgnoreReason::EvaluationPending)
        );
        puzzle.advance(Duration::from_millis(100));
    }
    assert_eq!(puzzle.selection(), &[a1, b]);
    assert!(!puzzle.board().get(a2).unwrap().face_up);

    puzzle.advance(Duration::from_millis(500));
    assert_eq!(puzzle.phase(), Phase::Idle);

    // Now the pair can be found.
    puzzle.select_card(a1);
    assert!(matches!(puzzle.select_card(a2), SelectOutcome::Matched { .. }));
}

/// Custom delays are honored.
#[test]
fn test_custom_mismatch_delay() {
    let config = PuzzleConfig::new(["A", "B"])
        .with_seed(5)
        .with_mismatch_delay(Duration::from_millis(250));
    let mut puzzle = MatchingPuzzle::new(config).unwrap();
    let (a, _) = pair(&puzzle, "A");
    let (b, _) = pair(&puzzle, "B");

    puzzle.advance(Duration::from_millis(40));
    puzzle.select_card(a);
    match puzzle.select_card(b) {
        SelectOutcome::Mismatched { hide_at, .. } => {
            assert_eq!(hide_at, Duration::from_millis(290));
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert_eq!(puzzle.advance_to(Duration::from_millis(289)), 0);
    assert_eq!(puzzle.advance_to(Duration::from_millis(290)), 1);
}

/// Reset during evaluation cancels the flip-back and deals a new board.
#[test]
fn test_reset_mid_evaluation() {
    let mut puzzle = abc(11);
    let events = record(&mut puzzle);

    let (a, _) = pair(&puzzle, "A");
    let (b, _) = pair(&puzzle, "B");
    puzzle.select_card(a);
    puzzle.select_card(b);
    assert_eq!(puzzle.phase(), Phase::Evaluating);

    puzzle.reset();
    assert_eq!(puzzle.phase(), Phase::Idle);
    assert_eq!(puzzle.matched_pairs(), 0);
    assert!(puzzle.board().iter().all(|c| !c.face_up && !c.matched));
    assert_eq!(puzzle.next_deadline(), None);

    // Flip the same positions on the new board, then let the old deadline pass.
    let first = puzzle.select_card(a);
    assert_eq!(first, SelectOutcome::Flipped(a));
    assert_eq!(puzzle.advance(Duration::from_secs(2)), 0);
    assert!(puzzle.board().get(a).unwrap().face_up);
    assert_eq!(puzzle.selection(), &[a]);

    let hidden = events
        .borrow()
        .iter()
        .filter(|e| e.kind() == PuzzleEventKind::CardsHidden)
        .count();
    assert_eq!(hidden, 0);
    assert!(events
        .borrow()
        .contains(&PuzzleEvent::BoardReset { generation: 1 }));
}

/// A solved puzzle can be replayed after reset.
#[test]
fn test_replay_after_reset() {
    let mut puzzle = abc(1);
    for glyph in ["A", "B", "C"] {
        let (x, y) = pair(&puzzle, glyph);
        puzzle.select_card(x);
        puzzle.select_card(y);
    }
    assert!(puzzle.is_solved());

    puzzle.reset();
    assert!(!puzzle.is_solved());
    assert_eq!(puzzle.round().total, 3);

    let (a1, a2) = pair(&puzzle, "A");
    puzzle.select_card(a1);
    assert!(matches!(puzzle.select_card(a2), SelectOutcome::Matched { .. }));
}

/// Unsubscribed listeners hear nothing further.
#[test]
fn test_unsubscribe() {
    let mut puzzle = abc(2);
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    let id = puzzle.subscribe(move |_| *c.borrow_mut() += 1);

    puzzle.select_card(CardId::new(0));
    assert_eq!(*count.borrow(), 1);

    assert!(puzzle.unsubscribe(id));
    puzzle.select_card(CardId::new(1));
    assert_eq!(*count.borrow(), 1);
}

/// Two puzzles never affect each other.
#[test]
fn test_independent_instances() {
    let mut left = abc(9);
    let mut right = abc(9);
    assert_eq!(left.board(), right.board());

    let (a, _) = pair(&left, "A");
    let (b, _) = pair(&left, "B");
    left.select_card(a);
    left.select_card(b);
    right.reset();

    assert_eq!(left.phase(), Phase::Evaluating);
    assert_eq!(left.advance(Duration::from_secs(1)), 1);
    assert_eq!(right.advance(Duration::from_secs(1)), 0);
    assert_eq!(left.generation(), 0);
    assert_eq!(right.generation(), 1);
}

/// The view never reveals a face-down symbol.
#[test]
fn test_view_during_play() {
    let mut puzzle = abc(4);
    let (a1, a2) = pair(&puzzle, "A");
    puzzle.select_card(a1);
    puzzle.select_card(a2);

    let view = puzzle.view();
    assert_eq!(view.visible_count(), 2);
    for card in &view.cards {
        assert_eq!(card.symbol.is_some(), card.face_up);
    }
}

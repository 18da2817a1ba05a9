//! # pair-lock
//!
//! A memory-matching puzzle engine that keeps page sections locked until
//! every pair of cards has been found.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never touches a DOM or a timer. The host
//!    forwards selections, advances a logical clock and renders `BoardView`s.
//!
//! 2. **Forgiving Input**: Selections that cannot be honored are ignored and
//!    reported, never errors. Only bad configuration fails.
//!
//! 3. **No Ambient State**: Every puzzle owns its board, round state, pending
//!    tasks, RNG and listeners. Locked sections never share a puzzle.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use pair_lock::{MatchingPuzzle, PuzzleConfig, SelectOutcome, Symbol};
//!
//! let mut puzzle = MatchingPuzzle::new(PuzzleConfig::new(["A", "B"]).with_seed(7)).unwrap();
//!
//! let a = puzzle.board().positions_of(&Symbol::new("A"));
//! puzzle.select_card(a[0]);
//! assert!(matches!(puzzle.select_card(a[1]), SelectOutcome::Matched { .. }));
//!
//! let b = puzzle.board().positions_of(&Symbol::new("B"));
//! puzzle.select_card(b[0]);
//! assert!(puzzle.select_card(b[1]).is_solved());
//!
//! // Nothing is pending once solved.
//! assert_eq!(puzzle.advance(Duration::from_secs(1)), 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Symbols, configuration, errors, RNG
//! - `cards`: Cards, boards and board views
//! - `engine`: The puzzle state machine and its task queue
//! - `events`: Puzzle events and listeners
//! - `lock`: Locked sections and unlock sinks

pub mod core;
pub mod cards;
pub mod engine;
pub mod events;
pub mod lock;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, PuzzleConfig, PuzzleError, PuzzleRng, PuzzleRngState, Result, Symbol,
    DEFAULT_GLYPHS, DEFAULT_MISMATCH_DELAY, MAX_PAIRS,
};

pub use crate::cards::{build_board, Board, BoardView, Card, CardId, CardView};

pub use crate::engine::{
    IgnoreReason, MatchingPuzzle, Phase, RoundState, ScheduledTask, SelectOutcome, TaskHandle,
    TaskQueue,
};

pub use crate::events::{EventBus, ListenerId, PuzzleEvent, PuzzleEventKind};

pub use crate::lock::{
    LockPrompt, LockRegistry, LockStatus, LockedSection, PuzzleKind, PuzzleLock, SectionId,
    UnlockSink,
};

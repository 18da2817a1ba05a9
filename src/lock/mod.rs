//! Locked page sections.
//!
//! Connects puzzles to the page: each `LockedSection` is guarded by its own
//! `MatchingPuzzle`, and an `UnlockSink` reveals it when solved.

mod gate;
mod registry;
mod section;

pub use gate::PuzzleLock;
pub use registry::LockRegistry;
pub use section::{LockPrompt, LockStatus, LockedSection, PuzzleKind, SectionId, UnlockSink};

//! Matching puzzle engine.
//!
//! - `MatchingPuzzle`: board, round state and clock for one puzzle
//! - `RoundState` / `Phase`: selection and progress
//! - `TaskQueue`: cancellable delayed tasks (mismatch flip-back)

mod puzzle;
mod schedule;
mod state;

pub use puzzle::{IgnoreReason, MatchingPuzzle, SelectOutcome};
pub use schedule::{ScheduledTask, TaskHandle, TaskQueue};
pub use state::{Phase, RoundState};

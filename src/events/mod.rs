//! Event system.
//!
//! Puzzles report what happened through `PuzzleEvent`s delivered to
//! listeners registered on an `EventBus`.

mod bus;
mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{PuzzleEvent, PuzzleEventKind};

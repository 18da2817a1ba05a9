//! Puzzle events.
//!
//! The engine emits an event for every visible change so a host can animate
//! cards and react to the solve without polling.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Symbol;

/// Event kind, used to filter subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleEventKind {
    CardFlipped,
    PairMatched,
    PairMismatched,
    CardsHidden,
    Solved,
    BoardReset,
}

/// Something that happened to a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A card was turned face-up by a selection.
    CardFlipped { card: CardId },

    /// Two selected cards share a symbol and are now matched.
    PairMatched {
        first: CardId,
        second: CardId,
        symbol: Symbol,
    },

    /// Two selected cards differ; they will flip back after the delay.
    PairMismatched { first: CardId, second: CardId },

    /// A mismatched pair was turned face-down again.
    CardsHidden { first: CardId, second: CardId },

    /// Every pair has been found.
    Solved { matched_pairs: usize },

    /// The board was rebuilt. `generation` counts rebuilds.
    BoardReset { generation: u64 },
}

impl PuzzleEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> PuzzleEventKind {
        match self {
            PuzzleEvent::CardFlipped { .. } => PuzzleEventKind::CardFlipped,
            PuzzleEvent::PairMatched { .. } => PuzzleEventKind::PairMatched,
            PuzzleEvent::PairMismatched { .. } => PuzzleEventKind::PairMismatched,
            PuzzleEvent::CardsHidden { .. } => PuzzleEventKind::CardsHidden,
            PuzzleEvent::Solved { .. } => PuzzleEventKind::Solved,
            PuzzleEvent::BoardReset { .. } => PuzzleEventKind::BoardReset,
        }
    }

    /// Cards touched by this event, if any.
    #[must_use]
    pub fn cards(&self) -> Vec<CardId> {
        match self {
            PuzzleEvent::CardFlipped { card } => vec![*card],
            PuzzleEvent::PairMatched { first, second, .. }
            | PuzzleEvent::PairMismatched { first, second }
            | PuzzleEvent::CardsHidden { first, second } => vec![*first, *second],
            PuzzleEvent::Solved { .. } | PuzzleEvent::BoardReset { .. } => Vec::new(),
        }
    }
}

//! Cards - one face of a pair.
//!
//! A `Card` wraps a symbol and tracks whether it is currently face-up and
//! whether its pair has been found. Cards live on a `Board` and are mutated
//! in place; they are never moved between positions.

use serde::{Deserialize, Serialize};

use crate::core::Symbol;

/// Card identifier: the card's position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board index for this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position on the board.
    pub id: CardId,

    /// The symbol this card shares with exactly one other card.
    pub symbol: Symbol,

    /// Is the symbol currently visible?
    pub face_up: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Can this card be picked right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Is this card part of the pending selection?
    #[must_use]
    pub fn is_revealed_unmatched(&self) -> bool {
        self.face_up && !self.matched
    }

    /// Do these two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Matched cards stay face-up.
    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

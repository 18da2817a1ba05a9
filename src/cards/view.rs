//! Public board view for renderers.
//!
//! Face-down cards hide their symbol, so a view can be handed to a UI layer
//! (or serialized across a wasm boundary) without leaking the solution.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::card::{Card, CardId};
use crate::core::Symbol;

/// What a player can see of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` while the card is face-down.
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            symbol: card.face_up.then(|| card.symbol.clone()),
            face_up: card.face_up,
            matched: card.matched,
        }
    }
}

/// What a player can see of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub cards: Vec<CardView>,
}

impl BoardView {
    /// Project a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            cards: board.iter().map(CardView::from).collect(),
        }
    }

    /// Number of cards showing their symbol.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.symbol.is_some()).count()
    }
}

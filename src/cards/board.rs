//! Board generation.
//!
//! A board holds every card of one puzzle round in shuffled order. Each
//! symbol of the alphabet appears on exactly two cards, and a card's id is
//! its position after shuffling.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use crate::core::{Alphabet, PuzzleRng, Result, Symbol};

/// The shuffled cards of one puzzle round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

/// Build a board from raw symbols.
///
/// Fails with `InvalidConfiguration` if `symbols` is empty or repeats a symbol.
pub fn build_board(symbols: &[Symbol], rng: &mut PuzzleRng) -> Result<Board> {
    let alphabet = Alphabet::new(symbols.iter().cloned())?;
    Ok(Board::build(&alphabet, rng))
}

impl Board {
    /// Duplicate every symbol into a pair and shuffle the result.
    #[must_use]
    pub fn build(alphabet: &Alphabet, rng: &mut PuzzleRng) -> Self {
        let mut symbols: Vec<Symbol> = alphabet
            .symbols()
            .iter()
            .chain(alphabet.symbols().iter())
            .cloned()
            .collect();
        rng.shuffle(&mut symbols);

        // Alphabet::new caps the pair count, so every position fits a u32 id.
        let cards = symbols
            .into_iter()
            .enumerate()
            .map_while(|(pos, symbol)| {
                u32::try_from(pos)
                    .ok()
                    .map(|id| Card::new(CardId::new(id), symbol))
            })
            .collect();

        log::debug!("built board with {} pairs", alphabet.len());
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// IDs of the cards carrying `symbol`.
    #[must_use]
    pub fn positions_of(&self, symbol: &Symbol) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| &c.symbol == symbol)
            .map(|c| c.id)
            .collect()
    }

    /// How many cards carry each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<&Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Cards that are face-up but not yet matched.
    #[must_use]
    pub fn revealed_unmatched(&self) -> usize {
        self.cards.iter().filter(|c| c.is_revealed_unmatched()).count()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

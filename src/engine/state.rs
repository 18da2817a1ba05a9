//! Round state.
//!
//! `RoundState` is the only mutable game state besides the board itself.
//! The phase is derived from it rather than stored, so the two can never
//! disagree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Where a round is in its flip / compare cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card selected.
    Idle,
    /// Exactly one unmatched card face-up.
    OneSelected,
    /// Two cards face-up, waiting for the flip-back.
    Evaluating,
    /// Every pair found. Terminal for this board.
    Solved,
}

/// Selection and progress of the current board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Face-up unmatched cards, in selection order. Never more than two.
    pub selection: SmallVec<[CardId; 2]>,

    /// Pairs found so far.
    pub matched_pairs: usize,

    /// Pairs on the board.
    pub total: usize,
}

impl RoundState {
    /// Fresh state for a board with `total` pairs.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            selection: SmallVec::new(),
            matched_pairs: 0,
            total,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_solved() {
            return Phase::Solved;
        }
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::Evaluating,
        }
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.matched_pairs == self.total
    }

    /// Check if a comparison is waiting to resolve.
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.selection.len() >= 2
    }

    /// Pairs still hidden.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.total - self.matched_pairs
    }
}

//! Error types.
//!
//! Only configuration problems are errors. Selections the engine cannot honor
//! (unknown card, card already face-up, evaluation pending) are reported as
//! `SelectOutcome::Ignored` instead.

use crate::lock::SectionId;

/// Errors produced while configuring puzzles and locks.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The alphabet or another setting cannot produce a valid board.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A locked section with this id is already registered.
    #[error("duplicate locked section: {0}")]
    DuplicateSection(SectionId),
}

impl PuzzleError {
    /// Check if this is an `InvalidConfiguration` error.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, PuzzleError::InvalidConfiguration(_))
    }
}

/// Result alias for fallible puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;

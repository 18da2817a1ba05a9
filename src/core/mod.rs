//! Core types: configuration, errors, RNG.
//!
//! These are shared by the board, the engine and the lock layer.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    Alphabet, PuzzleConfig, Symbol, DEFAULT_GLYPHS, DEFAULT_MISMATCH_DELAY, MAX_PAIRS,
};
pub use error::{PuzzleError, Result};
pub use rng::{PuzzleRng, PuzzleRngState};

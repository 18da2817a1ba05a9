//! Puzzle configuration types.
//!
//! Hosts configure a puzzle by providing:
//! - `Symbol`: the glyphs that appear on cards
//! - `Alphabet`: a validated set of distinct symbols
//! - `PuzzleConfig`: alphabet, mismatch delay and RNG seed
//!
//! The engine never hardcodes glyphs - the default set is only a default.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, Result};

/// Default time both cards of a mismatched pair stay visible.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Glyphs used by the default memory lock.
pub const DEFAULT_GLYPHS: [&str; 3] = ["♥️", "💍", "🏡"];

/// Largest alphabet whose board still fits `u32` card ids.
pub const MAX_PAIRS: usize = (u32::MAX / 2) as usize;

/// A matchable category shown on the face of a card.
///
/// Symbols are opaque to the engine; only equality matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// Get the glyph text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

impl From<String> for Symbol {
    fn from(glyph: String) -> Self {
        Self(glyph)
    }
}

/// A validated, non-empty set of distinct symbols.
///
/// Order is preserved so that board generation is reproducible for a seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Validate a list of symbols.
    ///
    /// Fails with `InvalidConfiguration` if the list is empty, has more than
    /// `MAX_PAIRS` symbols, or contains the same symbol twice.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        check_pair_count(symbols.len())?;

        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(PuzzleError::InvalidConfiguration(format!(
                    "symbol {} appears more than once in the alphabet",
                    symbol
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// The alphabet used by the default memory lock.
    #[must_use]
    pub fn default_glyphs() -> Self {
        Self {
            symbols: DEFAULT_GLYPHS.iter().map(|g| Symbol::new(*g)).collect(),
        }
    }

    /// Number of distinct symbols (= number of pairs on the board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in declaration order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

fn check_pair_count(pairs: usize) -> Result<()> {
    if pairs == 0 {
        return Err(PuzzleError::InvalidConfiguration(
            "alphabet must contain at least one symbol".to_string(),
        ));
    }
    if pairs > MAX_PAIRS {
        return Err(PuzzleError::InvalidConfiguration(format!(
            "alphabet has {} symbols, at most {} fit on a board",
            pairs, MAX_PAIRS
        )));
    }
    Ok(())
}

/// Configuration for a single matching puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Symbols to pair up. Validated when the engine is created.
    pub alphabet: Vec<Symbol>,

    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_delay: Duration,

    /// Seed for board shuffling.
    pub seed: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_GLYPHS.iter().map(|g| Symbol::new(*g)).collect(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: 0,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration with the given symbols and default timing.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            alphabet: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the mismatch delay (builder pattern).
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the shuffle seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the alphabet.
    pub fn validated_alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.alphabet.iter().cloned())
    }
}

//! Registry of locked sections.
//!
//! Each section gets its own `PuzzleLock` with its own board, clock and
//! listeners. Nothing is shared between sections except the registry seed,
//! from which each section derives an independent shuffle stream.

use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::cards::CardId;
use crate::core::{PuzzleConfig, PuzzleError, PuzzleRng, Result};
use crate::engine::SelectOutcome;

use super::gate::PuzzleLock;
use super::section::{LockStatus, LockedSection, SectionId, UnlockSink};

/// All locked sections of a page.
#[derive(Debug)]
pub struct LockRegistry {
    rng: PuzzleRng,
    locks: FxHashMap<SectionId, PuzzleLock>,
    /// Registration order.
    order: Vec<SectionId>,
}

impl LockRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PuzzleRng::new(seed),
            locks: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Lock a section.
    ///
    /// The seed in `config` is replaced by one derived from the registry seed
    /// and the section id.
    pub fn register(
        &mut self,
        section: LockedSection,
        config: PuzzleConfig,
        sink: impl UnlockSink + 'static,
    ) -> Result<()> {
        if self.locks.contains_key(&section.id) {
            return Err(PuzzleError::DuplicateSection(section.id));
        }

        let seed = self.rng.for_context(section.id.as_str()).seed();
        let id = section.id.clone();
        let lock = PuzzleLock::new(section, config.with_seed(seed), sink)?;

        self.order.push(id.clone());
        self.locks.insert(id, lock);
        Ok(())
    }

    /// Forward a selection. `None` if the section is unknown.
    pub fn select(&mut self, section: &SectionId, card: CardId) -> Option<SelectOutcome> {
        self.locks.get_mut(section).map(|lock| lock.select_card(card))
    }

    /// Deal a fresh board for one section. Returns false if unknown.
    pub fn reset(&mut self, section: &SectionId) -> bool {
        match self.locks.get_mut(section) {
            Some(lock) => {
                lock.reset();
                true
            }
            None => false,
        }
    }

    /// Advance every section's clock. Returns total flip-backs applied.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.locks.values_mut().map(|lock| lock.advance(dt)).sum()
    }

    /// Lock status of a section.
    #[must_use]
    pub fn status(&self, section: &SectionId) -> Option<LockStatus> {
        self.locks.get(section).map(PuzzleLock::status)
    }

    #[must_use]
    pub fn get(&self, section: &SectionId) -> Option<&PuzzleLock> {
        self.locks.get(section)
    }

    #[must_use]
    pub fn get_mut(&mut self, section: &SectionId) -> Option<&mut PuzzleLock> {
        self.locks.get_mut(section)
    }

    /// Section ids in registration order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionId> {
        self.order.iter()
    }

    /// Number of sections already unlocked.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.locks.values().filter(|l| l.is_unlocked()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

//! A single locked section and its puzzle.

use std::time::Duration;

use crate::cards::CardId;
use crate::core::{PuzzleConfig, Result};
use crate::engine::{MatchingPuzzle, SelectOutcome};
use crate::events::{ListenerId, PuzzleEvent};

use super::section::{LockStatus, LockedSection, UnlockSink};

/// A section, the puzzle guarding it, and the sink that reveals it.
///
/// The sink fires on the first solve only. Unlocking lasts for the session:
/// resetting the puzzle afterwards does not lock the section again.
pub struct PuzzleLock {
    section: LockedSection,
    puzzle: MatchingPuzzle,
    sink: Box<dyn UnlockSink>,
    status: LockStatus,
}

impl std::fmt::Debug for PuzzleLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleLock")
            .field("section", &self.section)
            .field("puzzle", &self.puzzle)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl PuzzleLock {
    /// Lock `section` behind a puzzle built from `config`.
    pub fn new(
        section: LockedSection,
        config: PuzzleConfig,
        sink: impl UnlockSink + 'static,
    ) -> Result<Self> {
        let puzzle = MatchingPuzzle::new(config)?;
        log::debug!("locked section {}", section.id);
        Ok(Self {
            section,
            puzzle,
            sink: Box::new(sink),
            status: LockStatus::Locked,
        })
    }

    /// Forward a selection to the puzzle, unlocking on the first solve.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let outcome = self.puzzle.select_card(id);
        if outcome.is_solved() && self.status == LockStatus::Locked {
            self.status = LockStatus::Unlocked;
            log::info!("unlocked section {}", self.section.id);
            self.sink.unlock(&self.section.id);
        }
        outcome
    }

    /// Advance the puzzle clock.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.puzzle.advance(dt)
    }

    /// Deal a fresh board. The lock status is unchanged.
    pub fn reset(&mut self) {
        self.puzzle.reset();
    }

    /// Listen to the puzzle's events.
    pub fn subscribe(&mut self, callback: impl FnMut(&PuzzleEvent) + 'static) -> ListenerId {
        self.puzzle.subscribe(callback)
    }

    #[must_use]
    pub fn section(&self) -> &LockedSection {
        &self.section
    }

    #[must_use]
    pub fn puzzle(&self) -> &MatchingPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn status(&self) -> LockStatus {
        self.status
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.status == LockStatus::Unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use std::cell::Cell;
    use std::rc::Rc;

    fn solve(lock: &mut PuzzleLock) {
        let symbols: Vec<Symbol> = lock.puzzle().alphabet().symbols().to_vec();
        for symbol in symbols {
            let ids = lock.puzzle().board().positions_of(&symbol);
            lock.select_card(ids[0]);
            lock.select_card(ids[1]);
        }
    }

    #[test]
    fn test_unlock_fires_once() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let mut lock = PuzzleLock::new(
            LockedSection::memory("video-section"),
            PuzzleConfig::new(["A", "B"]).with_seed(1),
            move |_: &crate::lock::SectionId| c.set(c.get() + 1),
        )
        .unwrap();

        assert_eq!(lock.status(), LockStatus::Locked);
        solve(&mut lock);
        assert!(lock.is_unlocked());
        assert_eq!(calls.get(), 1);

        lock.reset();
        solve(&mut lock);
        assert!(lock.is_unlocked());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let err = PuzzleLock::new(
            LockedSection::memory("video-section"),
            PuzzleConfig::new(Vec::<Symbol>::new()),
            |_: &crate::lock::SectionId| {},
        )
        .unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}

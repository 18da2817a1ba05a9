//! The matching puzzle engine.
//!
//! Drives one board through flip / compare / flip-back until every pair is
//! found. The engine is single-threaded and never reads wall time: the host
//! forwards selections and advances a logical clock, and the engine reports
//! progress through `SelectOutcome`s and `PuzzleEvent`s.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --select--> OneSelected --select--> Evaluating
//!   ^                                        |   |
//!   +------ flip-back task (mismatch) -------+   +--(last pair)--> Solved
//!   +------------- match --------------------+
//! ```
//!
//! A mismatch schedules a flip-back task `mismatch_delay` in the future.
//! Selections are refused until it runs. `reset()` cancels it and the task
//! carries the board generation, so a stale task can never touch a new board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::schedule::{TaskHandle, TaskQueue};
use super::state::{Phase, RoundState};
use crate::cards::{Board, BoardView, CardId};
use crate::core::{Alphabet, PuzzleConfig, PuzzleRng, Result};
use crate::events::{EventBus, ListenerId, PuzzleEvent, PuzzleEventKind};

/// Why a selection was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The puzzle is already solved.
    Solved,
    /// Two cards are face-up and waiting to flip back.
    EvaluationPending,
    /// No card has this id.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFaceUp,
    /// The card's pair was already found.
    AlreadyMatched,
}

/// Result of `select_card`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Flipped(CardId),
    /// Second card completed a pair.
    Matched { first: CardId, second: CardId },
    /// Second card completed the last pair.
    Solved { first: CardId, second: CardId },
    /// Second card differs; both flip back at `hide_at`.
    Mismatched {
        first: CardId,
        second: CardId,
        hide_at: Duration,
    },
}

impl SelectOutcome {
    /// Check if the selection was refused.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// Check if this selection solved the puzzle.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SelectOutcome::Solved { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FlipBack {
    generation: u64,
    first: CardId,
    second: CardId,
}

/// One memory-matching puzzle.
#[derive(Debug)]
pub struct MatchingPuzzle {
    config: PuzzleConfig,
    alphabet: Alphabet,
    rng: PuzzleRng,
    board: Board,
    round: RoundState,
    tasks: TaskQueue<FlipBack>,
    pending: Option<TaskHandle>,
    now: Duration,
    generation: u64,
    events: EventBus,
}

impl MatchingPuzzle {
    /// Validate `config` and deal the first board.
    ///
    /// Fails with `InvalidConfiguration` for an empty or repeating alphabet.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        let alphabet = config.validated_alphabet()?;
        let mut rng = PuzzleRng::new(config.seed);
        let board = Board::build(&alphabet, &mut rng);
        let round = RoundState::new(alphabet.len());

        Ok(Self {
            config,
            alphabet,
            rng,
            board,
            round,
            tasks: TaskQueue::new(),
            pending: None,
            now: Duration::ZERO,
            generation: 0,
            events: EventBus::new(),
        })
    }

    /// Puzzle with the default glyphs and timing.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(PuzzleConfig::default().with_seed(seed))
    }

    // === Operations ===

    /// Turn a card face-up.
    ///
    /// Refused (without touching state) when the puzzle is solved, two cards
    /// are already waiting, or the card is unknown, face-up or matched.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if let Some(reason) = self.refusal(id) {
            log::trace!("ignored selection of {}: {:?}", id, reason);
            return SelectOutcome::Ignored(reason);
        }

        if let Some(card) = self.board.get_mut(id) {
            card.flip_up();
        }
        self.round.selection.push(id);
        log::trace!("flipped {}", id);
        self.events.emit(&PuzzleEvent::CardFlipped { card: id });

        if self.round.selection.len() == 2 {
            let (first, second) = (self.round.selection[0], self.round.selection[1]);
            return self.evaluate(first, second);
        }
        SelectOutcome::Flipped(id)
    }

    fn refusal(&self, id: CardId) -> Option<IgnoreReason> {
        if self.round.is_solved() {
            return Some(IgnoreReason::Solved);
        }
        if self.round.is_evaluating() {
            return Some(IgnoreReason::EvaluationPending);
        }
        match self.board.get(id) {
            None => Some(IgnoreReason::UnknownCard),
            Some(card) if card.matched => Some(IgnoreReason::AlreadyMatched),
            Some(card) if card.face_up => Some(IgnoreReason::AlreadyFaceUp),
            Some(_) => None,
        }
    }

    fn evaluate(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        let symbol = match (self.board.get(first), self.board.get(second)) {
            (Some(a), Some(b)) if a.pairs_with(b) => Some(a.symbol.clone()),
            _ => None,
        };

        let Some(symbol) = symbol else {
            let hide_at = self.now.saturating_add(self.config.mismatch_delay);
            let handle = self.tasks.schedule(
                hide_at,
                FlipBack {
                    generation: self.generation,
                    first,
                    second,
                },
            );
            self.pending = Some(handle);
            log::trace!("{} and {} differ, hiding at {:?}", first, second, hide_at);
            self.events.emit(&PuzzleEvent::PairMismatched { first, second });
            return SelectOutcome::Mismatched {
                first,
                second,
                hide_at,
            };
        };

        for id in [first, second] {
            if let Some(card) = self.board.get_mut(id) {
                card.mark_matched();
            }
        }
        self.round.matched_pairs += 1;
        self.round.selection.clear();
        self.events.emit(&PuzzleEvent::PairMatched {
            first,
            second,
            symbol,
        });

        if self.round.is_solved() {
            log::info!("puzzle solved with {} pairs", self.round.matched_pairs);
            self.events.emit(&PuzzleEvent::Solved {
                matched_pairs: self.round.matched_pairs,
            });
            SelectOutcome::Solved { first, second }
        } else {
            SelectOutcome::Matched { first, second }
        }
    }

    /// Deal a fresh board and forget all progress.
    ///
    /// Any pending flip-back is cancelled.
    pub fn reset(&mut self) {
        let cancelled = self.tasks.cancel_all();
        self.pending = None;
        self.generation += 1;
        self.board = Board::build(&self.alphabet, &mut self.rng);
        self.round = RoundState::new(self.alphabet.len());

        log::debug!(
            "reset puzzle to generation {} ({} pending task(s) cancelled)",
            self.generation,
            cancelled
        );
        self.events.emit(&PuzzleEvent::BoardReset {
            generation: self.generation,
        });
    }

    // === Clock ===

    /// Move the clock forward by `dt` and run due tasks.
    ///
    /// Returns how many flip-backs were applied.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.advance_to(self.now.saturating_add(dt))
    }

    /// Move the clock to `now` and run due tasks. The clock never goes back.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        self.now = self.now.max(now);
        let due = self.tasks.pop_due(self.now);
        due.into_iter()
            .filter(|task| self.flip_back(task.payload))
            .count()
    }

    /// Run every pending task now, ignoring deadlines.
    pub fn flush_pending(&mut self) -> usize {
        let tasks = self.tasks.drain_all();
        tasks
            .into_iter()
            .filter(|task| self.flip_back(task.payload))
            .count()
    }

    /// When the next task is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.next_due()
    }

    /// Hide a mismatched pair. No-op for a stale or already-resolved task.
    fn flip_back(&mut self, task: FlipBack) -> bool {
        if task.generation != self.generation {
            log::trace!("dropping flip-back from generation {}", task.generation);
            return false;
        }
        if self.round.selection.as_slice() != [task.first, task.second] {
            return false;
        }

        for id in [task.first, task.second] {
            if let Some(card) = self.board.get_mut(id) {
                if card.is_revealed_unmatched() {
                    card.flip_down();
                }
            }
        }
        self.round.selection.clear();
        self.pending = None;
        self.events.emit(&PuzzleEvent::CardsHidden {
            first: task.first,
            second: task.second,
        });
        true
    }

    // === Subscriptions ===

    /// Listen to every event.
    pub fn subscribe(&mut self, callback: impl FnMut(&PuzzleEvent) + 'static) -> ListenerId {
        self.events.subscribe(callback)
    }

    /// Listen to one kind of event.
    pub fn subscribe_to(
        &mut self,
        kind: PuzzleEventKind,
        callback: impl FnMut(&PuzzleEvent) + 'static,
    ) -> ListenerId {
        self.events.subscribe_to(kind, callback)
    }

    /// Stop listening. Returns false if the listener was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Cards currently face-up and unmatched.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.round.selection
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.round.is_solved()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.round.matched_pairs
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of boards dealt after the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle of the pending flip-back, if a mismatch is on screen.
    #[must_use]
    pub fn pending_flip_back(&self) -> Option<TaskHandle> {
        self.pending
    }

    /// The board as a player sees it.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::of(&self.board)
    }
}

//! Locked sections and unlock sinks.
//!
//! A locked section is a page region hidden behind a puzzle. When the puzzle
//! is solved the section's `UnlockSink` is told, once, to reveal it.

use serde::{Deserialize, Serialize};

/// Identifier of a locked page region (an element id or class name).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(pub String);

impl SectionId {
    /// Create a new section ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which mini-game guards a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PuzzleKind {
    /// Memory matching.
    #[default]
    Memory,
}

/// Copy shown on the lock overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockPrompt {
    pub title: String,
    pub description: String,
    /// Replaces the overlay content once solved.
    pub success: String,
}

impl Default for LockPrompt {
    fn default() -> Self {
        Self {
            title: "Unlock this Memory 🔒".to_string(),
            description: "Match the symbols of our love to view.".to_string(),
            success: "Unlocked! ♥️".to_string(),
        }
    }
}

/// A page region guarded by a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedSection {
    pub id: SectionId,
    pub kind: PuzzleKind,
    pub prompt: LockPrompt,
}

impl LockedSection {
    /// A section guarded by the memory puzzle, with the default prompt.
    pub fn memory(id: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            kind: PuzzleKind::Memory,
            prompt: LockPrompt::default(),
        }
    }

    /// Replace the overlay copy (builder pattern).
    #[must_use]
    pub fn with_prompt(mut self, prompt: LockPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Sections locked on the default page.
    #[must_use]
    pub fn default_sections() -> Vec<Self> {
        vec![Self::memory("video-section")]
    }
}

/// Whether a section is still hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockStatus {
    Locked,
    /// Unlocked for the rest of the session.
    Unlocked,
}

/// Receives the one-time unlock signal for a section.
///
/// Implemented for any `FnMut(&SectionId)` closure.
pub trait UnlockSink {
    /// Reveal `section`.
    fn unlock(&mut self, section: &SectionId);
}

impl<F> UnlockSink for F
where
    F: FnMut(&SectionId),
{
    fn unlock(&mut self, section: &SectionId) {
        self(section)
    }
}

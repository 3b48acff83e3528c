//! Yes/no tally for a deck session.
//!
//! The tally is owned by the deck that feeds it. Nothing else can write to
//! it, and it is cleared when the deck resets.

use serde::{Deserialize, Serialize};

/// A decision recorded by a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    Yes,
    No,
}

/// Running count of yes and no decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwipeTally {
    yes: u32,
    no: u32,
}

impl SwipeTally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision.
    pub fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Yes => self.yes += 1,
            Vote::No => self.no += 1,
        }
    }

    /// Number of yes decisions.
    #[must_use]
    pub fn yes_count(&self) -> u32 {
        self.yes
    }

    /// Number of no decisions.
    #[must_use]
    pub fn no_count(&self) -> u32 {
        self.no
    }

    /// Total decisions recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.yes + self.no
    }

    /// Strictly more yes than no?
    #[must_use]
    pub fn is_majority_yes(&self) -> bool {
        self.yes > self.no
    }

    /// Clear both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for SwipeTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "yes={} no={}", self.yes, self.no)
    }
}

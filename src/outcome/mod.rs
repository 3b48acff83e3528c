//! Outcome panels shown once every card in a deck has been decided.
//!
//! There are exactly two panels and at most one is ever active.

use serde::{Deserialize, Serialize};

use crate::core::OutcomeThreshold;
use crate::tally::SwipeTally;

/// One of the two mutually exclusive outcome panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomePanel {
    /// More yes than no.
    Match,
    /// As many or more no than yes.
    NoMatch,
}

impl OutcomePanel {
    /// Both panels, in a fixed order.
    pub const ALL: [OutcomePanel; 2] = [OutcomePanel::Match, OutcomePanel::NoMatch];

    /// The panel a finished tally calls for.
    #[must_use]
    pub fn for_tally(tally: &SwipeTally) -> Self {
        if tally.is_majority_yes() {
            OutcomePanel::Match
        } else {
            OutcomePanel::NoMatch
        }
    }
}

impl std::fmt::Display for OutcomePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomePanel::Match => write!(f, "Match"),
            OutcomePanel::NoMatch => write!(f, "NoMatch"),
        }
    }
}

/// Decide the outcome if the deck is complete.
///
/// Returns `None` when no threshold is configured or the tally has not
/// reached it.
#[must_use]
pub fn decide_outcome(tally: &SwipeTally, threshold: Option<OutcomeThreshold>) -> Option<OutcomePanel> {
    let threshold = threshold?;
    threshold
        .is_reached(tally.total())
        .then(|| OutcomePanel::for_tally(tally))
}

/// Visibility of the two outcome panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomePanels {
    active: Option<OutcomePanel>,
}

impl OutcomePanels {
    /// Both panels hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `panel`, deactivating the other.
    pub fn show(&mut self, panel: OutcomePanel) {
        self.active = Some(panel);
    }

    /// Hide both panels.
    pub fn hide_all(&mut self) {
        self.active = None;
    }

    /// The active panel, if any.
    #[must_use]
    pub fn active(&self) -> Option<OutcomePanel> {
        self.active
    }

    /// Is `panel` currently visible?
    #[must_use]
    pub fn is_active(&self, panel: OutcomePanel) -> bool {
        self.active == Some(panel)
    }
}

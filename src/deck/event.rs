//! Deck events.
//!
//! Every state change a deck goes through is recorded as a `SwipeEvent` in
//! its history. `tick` also returns the events it produced so a host can
//! react without diffing state.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, SwipeDirection};
use crate::outcome::OutcomePanel;

/// Something that happened in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeEvent {
    /// Pointer went down on a card.
    DragStarted(CardId),
    /// A release fell short and the card went back.
    SnappedBack(CardId),
    /// A release passed the threshold; the vote is already tallied.
    Swiped { card: CardId, direction: SwipeDirection },
    /// A swipe-out finished and the card left the scene.
    CardRemoved(CardId),
    /// All cards are decided and a panel is showing.
    OutcomeRevealed(OutcomePanel),
    /// Tally cleared and deck redealt.
    Reset,
}

impl SwipeEvent {
    /// The card this event is about, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            SwipeEvent::DragStarted(card)
            | SwipeEvent::SnappedBack(card)
            | SwipeEvent::CardRemoved(card) => Some(*card),
            SwipeEvent::Swiped { card, .. } => Some(*card),
            SwipeEvent::OutcomeRevealed(_) | SwipeEvent::Reset => None,
        }
    }
}

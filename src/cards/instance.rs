//! Card instances - per-card interaction state.
//!
//! `CardState` tracks where a card rests, where the current drag started,
//! where it is now, how opaque it is and which phase of the interaction it
//! is in.
//!
//! ## Phases
//!
//! ```text
//! Resting --drag start--> Dragging --release < threshold--> Resting
//!                            |
//!                            +--release >= threshold--> SwipingOut --done--> Removed
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::tally::Vote;

/// Card identifier, assigned in deal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which way a released card was flung.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Not swiped (yet).
    #[default]
    Undecided,
    /// Flung left: a "no".
    Left,
    /// Flung right: a "yes".
    Right,
}

impl SwipeDirection {
    /// Classify a release at `current_x` for a drag that began at `initial_x`.
    ///
    /// Anything not strictly left of the start counts as right.
    #[must_use]
    pub fn classify(initial_x: f32, current_x: f32) -> Self {
        if current_x < initial_x {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }

    /// The decision this direction records.
    #[must_use]
    pub fn vote(self) -> Option<Vote> {
        match self {
            SwipeDirection::Left => Some(Vote::No),
            SwipeDirection::Right => Some(Vote::Yes),
            SwipeDirection::Undecided => None,
        }
    }

    /// Sign of travel along x: -1 left, +1 right, 0 undecided.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
            SwipeDirection::Undecided => 0.0,
        }
    }
}

/// Where a card is in its interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPhase {
    /// On the table, not being touched.
    #[default]
    Resting,
    /// Following the pointer.
    Dragging,
    /// Easing off-screen; accepts no input.
    SwipingOut,
    /// Gone from the scene.
    Removed,
}

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Unique ID within the deck.
    pub id: CardId,

    /// Where the card was dealt. Restored on deck reset.
    pub rest_position: Vec2,

    /// Position when the current drag began.
    pub initial_position: Vec2,

    /// Current position.
    pub position: Vec2,

    /// Direction of the swipe, once decided.
    pub direction: SwipeDirection,

    /// Opacity in [0, 1].
    pub opacity: f32,

    /// Interaction phase.
    pub phase: CardPhase,
}

impl CardState {
    /// Deal a card at `position`, fully opaque and resting.
    #[must_use]
    pub fn new(id: CardId, position: Vec2) -> Self {
        Self {
            id,
            rest_position: position,
            initial_position: position,
            position,
            direction: SwipeDirection::Undecided,
            opacity: 1.0,
            phase: CardPhase::Resting,
        }
    }

    /// Horizontal distance covered by the current drag.
    #[must_use]
    pub fn drag_distance(&self) -> f32 {
        self.position.horizontal_distance(self.initial_position)
    }

    /// Is the card still in the scene?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != CardPhase::Removed
    }

    /// Can the card take drag input?
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, CardPhase::Resting | CardPhase::Dragging)
    }
}

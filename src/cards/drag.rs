//! Drag handling: follow the pointer, classify the release.
//!
//! The controller is pure policy. It mutates the `CardState` it is handed
//! and, on a swipe, the tally it is handed; starting the swipe-out is the
//! caller's job once `release` reports `Swiped`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::instance::{CardPhase, CardState, SwipeDirection};
use crate::core::{SwipeConfig, SwipeError, Viewport};
use crate::tally::SwipeTally;

/// What a release did to the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragResolution {
    /// Released short of the threshold; back where the drag began.
    SnappedBack,
    /// Released past the threshold; a swipe-out should start.
    Swiped(SwipeDirection),
}

/// Drag policy for cards in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragController {
    snap_threshold_fraction: f32,
}

impl DragController {
    /// Create a controller using the deck's threshold.
    #[must_use]
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            snap_threshold_fraction: config.snap_threshold_fraction,
        }
    }

    /// Pointer went down on the card: remember where it is.
    pub fn begin(&self, card: &mut CardState) -> Result<(), SwipeError> {
        ensure_accepts_input(card)?;
        card.initial_position = card.position;
        card.phase = CardPhase::Dragging;
        debug!(card = %card.id, position = %card.position, "drag started");
        Ok(())
    }

    /// Pointer moved by `delta_x`: follow it horizontally.
    pub fn drag(&self, card: &mut CardState, delta_x: f32) -> Result<(), SwipeError> {
        ensure_dragging(card)?;
        if !delta_x.is_finite() {
            return Err(SwipeError::InvalidDragDelta(delta_x));
        }
        card.position = card.position.shifted_x(delta_x);
        Ok(())
    }

    /// Pointer released: snap back or swipe.
    ///
    /// On a swipe the direction is stored on the card, the card enters
    /// `SwipingOut` and the matching vote is recorded in `tally`.
    pub fn release(
        &self,
        card: &mut CardState,
        viewport: Viewport,
        tally: &mut SwipeTally,
    ) -> Result<DragResolution, SwipeError> {
        ensure_dragging(card)?;

        let distance = card.drag_distance();
        let threshold = self.snap_threshold_fraction * viewport.width();

        if distance < threshold {
            card.position = card.initial_position;
            card.phase = CardPhase::Resting;
            debug!(card = %card.id, distance, threshold, "snapped back");
            return Ok(DragResolution::SnappedBack);
        }

        let direction = SwipeDirection::classify(card.initial_position.x, card.position.x);
        card.direction = direction;
        card.phase = CardPhase::SwipingOut;
        if let Some(vote) = direction.vote() {
            tally.record(vote);
        }
        debug!(card = %card.id, ?direction, distance, "swiped");
        Ok(DragResolution::Swiped(direction))
    }
}

fn ensure_accepts_input(card: &CardState) -> Result<(), SwipeError> {
    match card.phase {
        CardPhase::Resting | CardPhase::Dragging => Ok(()),
        CardPhase::SwipingOut => Err(SwipeError::CardAnimating(card.id)),
        CardPhase::Removed => Err(SwipeError::CardRemoved(card.id)),
    }
}

fn ensure_dragging(card: &CardState) -> Result<(), SwipeError> {
    ensure_accepts_input(card)?;
    if card.phase == CardPhase::Dragging {
        Ok(())
    } else {
        Err(SwipeError::NotDragging(card.id))
    }
}

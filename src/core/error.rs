//! Errors surfaced to the host.
//!
//! The interaction itself cannot fail; these cover input the host should
//! never send (unknown cards, drags out of order, bad frame times).

use thiserror::Error;

use crate::cards::CardId;

/// Rejected host input or configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SwipeError {
    #[error("{0} was never dealt into this deck")]
    UnknownCard(CardId),

    #[error("{0} has already been swiped out")]
    CardRemoved(CardId),

    #[error("{0} is swiping out and accepts no drag input")]
    CardAnimating(CardId),

    #[error("{0} received drag input without a drag start")]
    NotDragging(CardId),

    #[error("viewport width must be finite and positive, got {0}")]
    InvalidViewport(f32),

    #[error("frame delta must be finite and non-negative, got {0}")]
    InvalidFrameDelta(f32),

    #[error("drag delta must be finite, got {0}")]
    InvalidDragDelta(f32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

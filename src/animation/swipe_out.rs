//! Swipe-out animation as an explicit per-frame state machine.
//!
//! Each call to `step` is one frame: elapsed time grows by the frame delta,
//! the interpolation parameter becomes `min(1, ease_rate * elapsed)`, and
//! both the card's x and its opacity are smooth-stepped with it. The
//! animation terminates on the frame the parameter reaches 1, at which
//! point the card sits exactly on its target with opacity exactly 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::easing::{clamp01, smooth_step};
use crate::cards::{CardId, CardState, SwipeDirection};
use crate::core::{SwipeError, Vec2, Viewport};

/// Where an animation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationStatus {
    /// More frames to go.
    Running,
    /// Card has reached its target and is fully transparent.
    Terminated,
}

/// What a single step produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub position: Vec2,
    pub opacity: f32,
    pub status: AnimationStatus,
}

/// Eases one swiped card off-screen while fading it out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeOutAnimator {
    card: CardId,
    direction: SwipeDirection,
    /// x at release.
    from_x: f32,
    /// Drag start x plus or minus one viewport width.
    target_x: f32,
    y: f32,
    ease_rate: f32,
    elapsed: f32,
    status: AnimationStatus,
}

impl SwipeOutAnimator {
    /// Start a swipe-out for a card that was just released past the threshold.
    ///
    /// The travel target is fixed here: the drag's initial x moved one
    /// viewport width in the swipe direction.
    #[must_use]
    pub fn start(card: &CardState, viewport: Viewport, ease_rate: f32) -> Self {
        let target_x = card.initial_position.x + card.direction.sign() * viewport.width();
        Self {
            card: card.id,
            direction: card.direction,
            from_x: card.position.x,
            target_x,
            y: card.position.y,
            ease_rate,
            elapsed: 0.0,
            status: AnimationStatus::Running,
        }
    }

    /// Card being animated.
    #[must_use]
    pub fn card(&self) -> CardId {
        self.card
    }

    /// Direction of travel.
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Final x of the card.
    #[must_use]
    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    /// Seconds of animation so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Interpolation parameter in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        clamp01(self.ease_rate * self.elapsed)
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Has the animation finished?
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.status == AnimationStatus::Terminated
    }

    /// Position and opacity at the current progress.
    #[must_use]
    pub fn frame(&self) -> AnimationFrame {
        let t = self.progress();
        AnimationFrame {
            position: Vec2::new(smooth_step(self.from_x, self.target_x, t), self.y),
            opacity: smooth_step(1.0, 0.0, t),
            status: self.status,
        }
    }

    /// Advance by one frame of `dt` seconds.
    ///
    /// Stepping a terminated animation is a no-op that returns the final frame.
    pub fn step(&mut self, dt: f32) -> Result<AnimationFrame, SwipeError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SwipeError::InvalidFrameDelta(dt));
        }
        if self.status == AnimationStatus::Running {
            self.elapsed += dt;
            if self.progress() >= 1.0 {
                self.status = AnimationStatus::Terminated;
                debug!(card = %self.card, elapsed = self.elapsed, "swipe-out finished");
            }
        }
        Ok(self.frame())
    }
}

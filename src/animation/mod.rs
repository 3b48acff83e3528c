//! Swipe-out animation.
//!
//! A swiped card is eased one viewport width away from where its drag began
//! while fading to fully transparent. The animation is a plain state
//! machine: the host's frame loop calls `step` once per frame with the
//! frame's elapsed time, so tests can drive it with synthetic ticks.
//!
//! ## Example Usage
//!
//! ```
//! use swipe_deck::animation::{AnimationStatus, SwipeOutAnimator};
//! use swipe_deck::cards::{CardId, CardState, SwipeDirection};
//! use swipe_deck::core::{Vec2, Viewport};
//!
//! let mut card = CardState::new(CardId::new(0), Vec2::ZERO);
//! card.position = Vec2::new(300.0, 0.0);
//! card.direction = SwipeDirection::Right;
//!
//! let viewport = Viewport::new(1000.0).unwrap();
//! let mut animator = SwipeOutAnimator::start(&card, viewport, 2.0);
//!
//! let mut frames = 0;
//! while animator.step(1.0 / 60.0).unwrap().status == AnimationStatus::Running {
//!     frames += 1;
//! }
//! assert!(frames > 0);
//! assert_eq!(animator.frame().opacity, 0.0);
//! ```

mod easing;
mod swipe_out;

pub use easing::{clamp01, smooth_step};
pub use swipe_out::{AnimationFrame, AnimationStatus, SwipeOutAnimator};

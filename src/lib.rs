//! # swipe-deck
//!
//! A headless swipe-card interaction: drag a card sideways, release it, and
//! it either snaps back or eases off-screen while a yes/no tally counts the
//! decision. Once every card in the deck is decided a match or no-match
//! panel is revealed.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: The deck never renders, dispatches input or loads
//!    scenes. The host forwards drag callbacks and frame ticks, and applies
//!    what the deck tells it through `SceneHost`.
//!
//! 2. **Owned State**: The tally belongs to the deck that feeds it. There is
//!    no process-wide counter.
//!
//! 3. **Explicit Frames**: Swipe-outs are state machines advanced once per
//!    `tick`. Tests drive them with synthetic frame deltas.
//!
//! ## Modules
//!
//! - `core`: Positions, viewport, configuration, errors
//! - `tally`: Yes/no counts
//! - `cards`: Card state and drag handling
//! - `animation`: Easing and the swipe-out state machine
//! - `outcome`: Match/no-match panels
//! - `host`: The `SceneHost` seam and a headless recording host
//! - `deck`: `SwipeDeck`, which ties the rest together

pub mod core;
pub mod tally;
pub mod cards;
pub mod animation;
pub mod outcome;
pub mod host;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{OutcomeThreshold, SwipeConfig, SwipeError, Vec2, Viewport};

pub use crate::tally::{SwipeTally, Vote};

pub use crate::cards::{CardId, CardPhase, CardState, DragController, DragResolution, SwipeDirection};

pub use crate::animation::{smooth_step, AnimationFrame, AnimationStatus, SwipeOutAnimator};

pub use crate::outcome::{decide_outcome, OutcomePanel, OutcomePanels};

pub use crate::host::{HostCommand, RecordingHost, SceneHost};

pub use crate::deck::{SwipeDeck, SwipeEvent};

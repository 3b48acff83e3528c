//! Cards and drag handling.
//!
//! - `CardState`: per-card position, opacity and phase
//! - `DragController`: turns drag callbacks into snap-backs or swipes

pub mod instance;
pub mod drag;

pub use instance::{CardId, CardPhase, CardState, SwipeDirection};
pub use drag::{DragController, DragResolution};

//! Core types: positions, viewport, configuration, errors.
//!
//! Everything here is independent of how a deck is played; the other
//! modules build the interaction on top of these.

pub mod geometry;
pub mod config;
pub mod error;

pub use geometry::{Vec2, Viewport};
pub use config::{OutcomeThreshold, SwipeConfig, DEFAULT_EASE_RATE, DEFAULT_SNAP_THRESHOLD_FRACTION};
pub use error::SwipeError;

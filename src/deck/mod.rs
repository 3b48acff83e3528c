//! Deck sessions.
//!
//! `SwipeDeck` wires the pieces together: drag callbacks go through the
//! `DragController`, swipes feed the deck's own `SwipeTally` and start a
//! `SwipeOutAnimator`, and `tick` drives every running animator and reveals
//! the outcome once the last card is gone.
//!
//! ## Example Usage
//!
//! ```
//! use swipe_deck::cards::CardId;
//! use swipe_deck::core::{SwipeConfig, Vec2, Viewport};
//! use swipe_deck::deck::SwipeDeck;
//! use swipe_deck::host::RecordingHost;
//! use swipe_deck::outcome::OutcomePanel;
//!
//! let config = SwipeConfig::default().with_final_card_count(1);
//! let mut deck = SwipeDeck::new(config, [Vec2::ZERO]).unwrap();
//! let mut host = RecordingHost::new();
//! let viewport = Viewport::new(800.0).unwrap();
//!
//! let card = CardId::new(0);
//! deck.drag_start(card).unwrap();
//! deck.drag_move(card, 300.0, &mut host).unwrap();
//! deck.drag_end(card, viewport, &mut host).unwrap();
//!
//! while deck.is_animating() {
//!     deck.tick(1.0 / 60.0, &mut host).unwrap();
//! }
//!
//! assert_eq!(deck.tally().yes_count(), 1);
//! assert!(host.is_panel_active(OutcomePanel::Match));
//! ```

mod event;
mod session;

pub use event::SwipeEvent;
pub use session::SwipeDeck;

//! A deck session: cards, tally, running swipe-outs and outcome panels.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::event::SwipeEvent;
use crate::animation::SwipeOutAnimator;
use crate::cards::{CardId, CardPhase, CardState, DragController, DragResolution};
use crate::core::{SwipeConfig, SwipeError, Vec2, Viewport};
use crate::host::SceneHost;
use crate::outcome::{decide_outcome, OutcomePanel, OutcomePanels};
use crate::tally::SwipeTally;

/// A dealt deck of swipeable cards.
///
/// Owns the tally that its swipes feed, so independent decks never share
/// counts. All methods are meant to be called from the host's frame loop:
/// drag callbacks as they arrive, `tick` once per frame.
#[derive(Clone, Debug)]
pub struct SwipeDeck {
    config: SwipeConfig,
    controller: DragController,
    tally: SwipeTally,
    cards: FxHashMap<CardId, CardState>,
    /// Cards as dealt, restored on reset.
    dealt: Vector<CardState>,
    animations: SmallVec<[SwipeOutAnimator; 4]>,
    panels: OutcomePanels,
    history: Vector<SwipeEvent>,
}

impl SwipeDeck {
    /// Deal one card per position, in order. Card IDs count up from 0.
    pub fn new(
        config: SwipeConfig,
        positions: impl IntoIterator<Item = Vec2>,
    ) -> Result<Self, SwipeError> {
        config.validate()?;

        let dealt: Vector<CardState> = positions
            .into_iter()
            .zip(0u32..)
            .map(|(position, id)| CardState::new(CardId::new(id), position))
            .collect();

        if let Some(threshold) = config.outcome {
            if threshold.final_card_count() as usize > dealt.len() {
                warn!(
                    final_card_count = threshold.final_card_count(),
                    dealt = dealt.len(),
                    "outcome needs more cards than were dealt"
                );
            }
        }

        let cards = dealt.iter().map(|card| (card.id, card.clone())).collect();
        info!(cards = dealt.len(), "deck dealt");

        Ok(Self {
            controller: DragController::new(&config),
            config,
            tally: SwipeTally::new(),
            cards,
            dealt,
            animations: SmallVec::new(),
            panels: OutcomePanels::new(),
            history: Vector::new(),
        })
    }

    // === Drag Input ===

    /// Pointer went down on `card`.
    pub fn drag_start(&mut self, card: CardId) -> Result<(), SwipeError> {
        let state = lookup(&mut self.cards, card)?;
        self.controller
            .begin(state)
            .inspect_err(|err| warn!(%err, "rejected drag start"))?;
        self.history.push_back(SwipeEvent::DragStarted(card));
        Ok(())
    }

    /// Pointer moved horizontally by `delta_x` while dragging `card`.
    pub fn drag_move(
        &mut self,
        card: CardId,
        delta_x: f32,
        host: &mut impl SceneHost,
    ) -> Result<(), SwipeError> {
        let state = lookup(&mut self.cards, card)?;
        self.controller
            .drag(state, delta_x)
            .inspect_err(|err| warn!(%err, "rejected drag move"))?;
        host.move_card(card, state.position);
        Ok(())
    }

    /// Pointer released `card`.
    ///
    /// A short drag puts the card back where the drag began. A long one
    /// tallies the vote and starts the card's swipe-out.
    pub fn drag_end(
        &mut self,
        card: CardId,
        viewport: Viewport,
        host: &mut impl SceneHost,
    ) -> Result<DragResolution, SwipeError> {
        let state = lookup(&mut self.cards, card)?;
        let resolution = self
            .controller
            .release(state, viewport, &mut self.tally)
            .inspect_err(|err| warn!(%err, "rejected drag end"))?;

        match resolution {
            DragResolution::SnappedBack => {
                host.move_card(card, state.position);
                self.history.push_back(SwipeEvent::SnappedBack(card));
            }
            DragResolution::Swiped(direction) => {
                self.animations
                    .push(SwipeOutAnimator::start(state, viewport, self.config.ease_rate));
                self.history.push_back(SwipeEvent::Swiped { card, direction });
                info!(%card, ?direction, tally = %self.tally, "card swiped");
            }
        }
        Ok(resolution)
    }

    // === Frame Loop ===

    /// Advance every running swipe-out by one frame of `dt` seconds.
    ///
    /// Finished cards are removed from the scene. When the last running
    /// swipe-out finishes and the tally has reached the configured final
    /// count, the matching outcome panel is shown and the other hidden.
    pub fn tick(&mut self, dt: f32, host: &mut impl SceneHost) -> Result<Vec<SwipeEvent>, SwipeError> {
        if !(dt.is_finite() && dt >= 0.0) {
            warn!(dt, "rejected frame delta");
            return Err(SwipeError::InvalidFrameDelta(dt));
        }

        let mut events = Vec::new();
        for animator in &mut self.animations {
            let frame = animator.step(dt)?;
            let card = animator.card();
            host.move_card(card, frame.position);
            host.set_card_opacity(card, frame.opacity);

            if let Some(state) = self.cards.get_mut(&card) {
                state.position = frame.position;
                state.opacity = frame.opacity;
                if animator.is_terminated() {
                    state.phase = CardPhase::Removed;
                }
            }
            if animator.is_terminated() {
                host.remove_card(card);
                events.push(SwipeEvent::CardRemoved(card));
                info!(%card, "card removed");
            }
        }

        let any_finished = !events.is_empty();
        self.animations.retain(|animator| !animator.is_terminated());

        if any_finished && self.animations.is_empty() {
            if let Some(panel) = decide_outcome(&self.tally, self.config.outcome) {
                self.show_outcome(panel, host);
                events.push(SwipeEvent::OutcomeRevealed(panel));
            }
        }

        self.history.extend(events.iter().copied());
        Ok(events)
    }

    fn show_outcome(&mut self, panel: OutcomePanel, host: &mut impl SceneHost) {
        self.panels.show(panel);
        for candidate in OutcomePanel::ALL {
            host.set_panel_active(candidate, candidate == panel);
        }
        info!(%panel, tally = %self.tally, "outcome revealed");
    }

    // === Reset ===

    /// Clear the tally, redeal the deck as it was first dealt, then ask the
    /// host to reload the scene.
    ///
    /// Running swipe-outs are dropped; their votes are cleared with the tally.
    pub fn reset(&mut self, host: &mut impl SceneHost) {
        self.tally.reset();
        self.cards = self.dealt.iter().map(|card| (card.id, card.clone())).collect();
        self.animations.clear();
        self.panels.hide_all();
        self.history.push_back(SwipeEvent::Reset);
        info!(cards = self.dealt.len(), "deck reset");
        host.reload_scene();
    }

    // === Queries ===

    /// Deck configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current tally.
    #[must_use]
    pub fn tally(&self) -> &SwipeTally {
        &self.tally
    }

    /// A card by ID, including removed ones.
    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&CardState> {
        self.cards.get(&card)
    }

    /// Cards dealt into this deck.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }

    /// Cards still in the scene, swiping ones included.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.values().filter(|card| card.is_active()).count()
    }

    /// Is any card swiping out?
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Number of cards swiping out.
    #[must_use]
    pub fn animating_count(&self) -> usize {
        self.animations.len()
    }

    /// Outcome panel visibility.
    #[must_use]
    pub fn panels(&self) -> &OutcomePanels {
        &self.panels
    }

    /// Everything that has happened, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SwipeEvent> {
        &self.history
    }
}

fn lookup(cards: &mut FxHashMap<CardId, CardState>, card: CardId) -> Result<&mut CardState, SwipeError> {
    cards.get_mut(&card).ok_or_else(|| {
        debug!(%card, "unknown card");
        SwipeError::UnknownCard(card)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SwipeDirection;
    use crate::host::RecordingHost;

    fn viewport() -> Viewport {
        Viewport::new(1000.0).unwrap()
    }

    fn deck(count: usize, config: SwipeConfig) -> SwipeDeck {
        SwipeDeck::new(config, (0..count).map(|i| Vec2::new(0.0, i as f32 * 10.0))).unwrap()
    }

    fn swipe(deck: &mut SwipeDeck, card: CardId, delta_x: f32, host: &mut RecordingHost) -> DragResolution {
        deck.drag_start(card).unwrap();
        deck.drag_move(card, delta_x, host).unwrap();
        deck.drag_end(card, viewport(), host).unwrap()
    }

    fn run_out(deck: &mut SwipeDeck, host: &mut RecordingHost) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        let mut frames = 0;
        while deck.is_animating() {
            events.extend(deck.tick(1.0 / 60.0, host).unwrap());
            frames += 1;
            assert!(frames < 1000, "swipe-out never finished");
        }
        events
    }

    #[test]
    fn test_new_deals_in_order() {
        let deck = deck(3, SwipeConfig::default());
        assert_eq!(deck.dealt_count(), 3);
        assert_eq!(deck.remaining(), 3);
        assert_eq!(deck.card(CardId::new(2)).unwrap().position, Vec2::new(0.0, 20.0));
        assert!(deck.card(CardId::new(3)).is_none());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result = SwipeDeck::new(SwipeConfig::default().with_ease_rate(0.0), [Vec2::ZERO]);
        assert!(matches!(result, Err(SwipeError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_card() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();
        let card = CardId::new(9);

        assert_eq!(deck.drag_start(card), Err(SwipeError::UnknownCard(card)));
        assert_eq!(
            deck.drag_move(card, 10.0, &mut host),
            Err(SwipeError::UnknownCard(card))
        );
        assert_eq!(
            deck.drag_end(card, viewport(), &mut host),
            Err(SwipeError::UnknownCard(card))
        );
        assert!(host.commands().is_empty());
    }

    #[test]
    fn test_non_finite_drag_move_is_rejected() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();
        let card = CardId::new(0);

        deck.drag_start(card).unwrap();
        assert_eq!(
            deck.drag_move(card, f32::INFINITY, &mut host),
            Err(SwipeError::InvalidDragDelta(f32::INFINITY))
        );
        assert!(host.commands().is_empty());

        let resolution = deck.drag_end(card, viewport(), &mut host).unwrap();
        assert_eq!(resolution, DragResolution::SnappedBack);
        assert_eq!(deck.tally().total(), 0);
        assert!(!deck.is_animating());
        assert_eq!(deck.card(card).unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_snap_back_moves_host_card_home() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();
        let card = CardId::new(0);

        let resolution = swipe(&mut deck, card, 50.0, &mut host);

        assert_eq!(resolution, DragResolution::SnappedBack);
        assert_eq!(host.position(card), Some(Vec2::new(0.0, 0.0)));
        assert!(!deck.is_animating());
        assert_eq!(deck.tally().total(), 0);
    }

    #[test]
    fn test_swipe_runs_to_removal() {
        let mut deck = deck(2, SwipeConfig::default());
        let mut host = RecordingHost::new();
        let card = CardId::new(1);

        let resolution = swipe(&mut deck, card, 400.0, &mut host);
        assert_eq!(resolution, DragResolution::Swiped(SwipeDirection::Right));
        assert_eq!(deck.tally().yes_count(), 1);
        assert!(deck.is_animating());

        let events = run_out(&mut deck, &mut host);

        assert_eq!(events, vec![SwipeEvent::CardRemoved(card)]);
        assert!(host.is_removed(card));
        assert_eq!(host.opacity(card), Some(0.0));
        assert_eq!(host.position(card), Some(Vec2::new(1000.0, 10.0)));
        assert_eq!(deck.card(card).unwrap().phase, CardPhase::Removed);
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_no_panels_without_threshold() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();

        swipe(&mut deck, CardId::new(0), 400.0, &mut host);
        run_out(&mut deck, &mut host);

        assert_eq!(deck.panels().active(), None);
        assert!(!host.is_panel_active(OutcomePanel::Match));
        assert!(!host.is_panel_active(OutcomePanel::NoMatch));
    }

    #[test]
    fn test_outcome_waits_for_last_running_swipe() {
        let mut deck = deck(2, SwipeConfig::default().with_final_card_count(2));
        let mut host = RecordingHost::new();

        swipe(&mut deck, CardId::new(0), 400.0, &mut host);
        deck.tick(0.3, &mut host).unwrap();
        swipe(&mut deck, CardId::new(1), 400.0, &mut host);

        // First card finishes while the second is still running.
        let events = deck.tick(0.3, &mut host).unwrap();
        assert_eq!(events, vec![SwipeEvent::CardRemoved(CardId::new(0))]);
        assert_eq!(deck.panels().active(), None);

        let events = run_out(&mut deck, &mut host);
        assert_eq!(
            events,
            vec![
                SwipeEvent::CardRemoved(CardId::new(1)),
                SwipeEvent::OutcomeRevealed(OutcomePanel::Match),
            ]
        );
        assert!(host.is_panel_active(OutcomePanel::Match));
        assert!(!host.is_panel_active(OutcomePanel::NoMatch));
    }

    #[test]
    fn test_bad_delta_changes_nothing() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();
        swipe(&mut deck, CardId::new(0), 400.0, &mut host);
        host.clear_commands();

        assert_eq!(
            deck.tick(f32::INFINITY, &mut host),
            Err(SwipeError::InvalidFrameDelta(f32::INFINITY))
        );
        assert!(host.commands().is_empty());
        assert!(deck.is_animating());
    }

    #[test]
    fn test_history() {
        let mut deck = deck(1, SwipeConfig::default());
        let mut host = RecordingHost::new();
        let card = CardId::new(0);

        swipe(&mut deck, card, 10.0, &mut host);
        swipe(&mut deck, card, -300.0, &mut host);
        run_out(&mut deck, &mut host);
        deck.reset(&mut host);

        let history: Vec<_> = deck.history().iter().copied().collect();
        assert_eq!(
            history,
            vec![
                SwipeEvent::DragStarted(card),
                SwipeEvent::SnappedBack(card),
                SwipeEvent::DragStarted(card),
                SwipeEvent::Swiped { card, direction: SwipeDirection::Left },
                SwipeEvent::CardRemoved(card),
                SwipeEvent::Reset,
            ]
        );
    }
}

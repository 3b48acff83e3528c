//! The seam between a deck and the engine that renders it.
//!
//! The deck never draws anything or loads scenes. It tells a `SceneHost`
//! what changed and the host applies it to its own objects.
//!
//! `RecordingHost` is a headless host that keeps the resulting scene in
//! memory, for tests and for running a deck without an engine.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Vec2;
use crate::outcome::OutcomePanel;

/// Engine-side operations a deck needs.
///
/// ## Implementation Notes
///
/// - Calls arrive on the thread that drives the deck, in frame order
/// - `remove_card` is called once per swiped card, after its last
///   `set_card_opacity`
/// - `set_panel_active` is always called for both panels together, so at
///   most one is active
pub trait SceneHost {
    /// Move a card's visual to `position`.
    fn move_card(&mut self, card: CardId, position: Vec2);

    /// Set a card's visual opacity in [0, 1].
    fn set_card_opacity(&mut self, card: CardId, opacity: f32);

    /// Deactivate or destroy a card's visual.
    fn remove_card(&mut self, card: CardId);

    /// Show or hide an outcome panel.
    fn set_panel_active(&mut self, panel: OutcomePanel, active: bool);

    /// Reload the current scene from scratch.
    fn reload_scene(&mut self);
}

/// A call received by a `RecordingHost`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostCommand {
    MoveCard(CardId, Vec2),
    SetCardOpacity(CardId, f32),
    RemoveCard(CardId),
    SetPanelActive(OutcomePanel, bool),
    ReloadScene,
}

/// Headless scene host.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    commands: Vec<HostCommand>,
    positions: FxHashMap<CardId, Vec2>,
    opacities: FxHashMap<CardId, f32>,
    removed: FxHashSet<CardId>,
    active_panels: FxHashSet<OutcomePanel>,
    reloads: u32,
}

impl RecordingHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Last position pushed for a card.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<Vec2> {
        self.positions.get(&card).copied()
    }

    /// Last opacity pushed for a card.
    #[must_use]
    pub fn opacity(&self, card: CardId) -> Option<f32> {
        self.opacities.get(&card).copied()
    }

    /// Has the card been removed since the last reload?
    #[must_use]
    pub fn is_removed(&self, card: CardId) -> bool {
        self.removed.contains(&card)
    }

    /// Is the panel visible?
    #[must_use]
    pub fn is_panel_active(&self, panel: OutcomePanel) -> bool {
        self.active_panels.contains(&panel)
    }

    /// Number of scene reloads.
    #[must_use]
    pub fn reload_count(&self) -> u32 {
        self.reloads
    }

    /// Forget the recorded command log, keeping the scene.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl SceneHost for RecordingHost {
    fn move_card(&mut self, card: CardId, position: Vec2) {
        self.commands.push(HostCommand::MoveCard(card, position));
        self.positions.insert(card, position);
    }

    fn set_card_opacity(&mut self, card: CardId, opacity: f32) {
        self.commands.push(HostCommand::SetCardOpacity(card, opacity));
        self.opacities.insert(card, opacity);
    }

    fn remove_card(&mut self, card: CardId) {
        self.commands.push(HostCommand::RemoveCard(card));
        self.removed.insert(card);
    }

    fn set_panel_active(&mut self, panel: OutcomePanel, active: bool) {
        self.commands.push(HostCommand::SetPanelActive(panel, active));
        if active {
            self.active_panels.insert(panel);
        } else {
            self.active_panels.remove(&panel);
        }
    }

    fn reload_scene(&mut self) {
        self.commands.push(HostCommand::ReloadScene);
        self.positions.clear();
        self.opacities.clear();
        self.removed.clear();
        self.active_panels.clear();
        self.reloads += 1;
    }
}

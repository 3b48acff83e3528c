//! Deck configuration.
//!
//! Policy knobs are fixed at authoring time and never change while a deck is
//! in play:
//! - `snap_threshold_fraction`: how far (as a share of viewport width) a card
//!   must travel before release counts as a swipe
//! - `ease_rate`: how fast the swipe-out interpolation parameter grows
//! - `outcome`: optional final card count that enables the outcome panels

use serde::{Deserialize, Serialize};

use super::error::SwipeError;

/// Share of the viewport width a drag must cover to count as a swipe.
pub const DEFAULT_SNAP_THRESHOLD_FRACTION: f32 = 0.2;

/// Interpolation parameter growth per second of swipe-out.
///
/// At 2.0 a swipe-out lasts half a second.
pub const DEFAULT_EASE_RATE: f32 = 2.0;

/// Number of cards that must be decided before an outcome is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeThreshold {
    final_card_count: u32,
}

impl OutcomeThreshold {
    /// Create a threshold for a deck of `final_card_count` cards.
    #[must_use]
    pub fn new(final_card_count: u32) -> Self {
        assert!(final_card_count > 0, "Outcome needs at least 1 card");
        Self { final_card_count }
    }

    /// Expected total of yes and no decisions.
    #[must_use]
    pub const fn final_card_count(self) -> u32 {
        self.final_card_count
    }

    /// Has every expected card been decided?
    #[must_use]
    pub fn is_reached(self, decided: u32) -> bool {
        decided == self.final_card_count
    }
}

/// Complete deck configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Fraction of viewport width below which a release snaps back (default: 0.2).
    pub snap_threshold_fraction: f32,

    /// Interpolation parameter per second of swipe-out (default: 2.0).
    pub ease_rate: f32,

    /// Reveal a match/no-match panel once this many cards are decided.
    /// `None` disables the panels entirely.
    #[serde(default)]
    pub outcome: Option<OutcomeThreshold>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            snap_threshold_fraction: DEFAULT_SNAP_THRESHOLD_FRACTION,
            ease_rate: DEFAULT_EASE_RATE,
            outcome: None,
        }
    }
}

impl SwipeConfig {
    /// Set the snap-back threshold fraction.
    #[must_use]
    pub fn with_snap_threshold(mut self, fraction: f32) -> Self {
        self.snap_threshold_fraction = fraction;
        self
    }

    /// Set the ease rate.
    #[must_use]
    pub fn with_ease_rate(mut self, rate: f32) -> Self {
        self.ease_rate = rate;
        self
    }

    /// Enable outcome panels for a deck of `final_card_count` cards.
    #[must_use]
    pub fn with_final_card_count(mut self, final_card_count: u32) -> Self {
        self.outcome = Some(OutcomeThreshold::new(final_card_count));
        self
    }

    /// Check the knobs are usable.
    pub fn validate(&self) -> Result<(), SwipeError> {
        let fraction = self.snap_threshold_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
            return Err(SwipeError::InvalidConfig(format!(
                "snap_threshold_fraction must be in (0, 1], got {fraction}"
            )));
        }
        if !(self.ease_rate.is_finite() && self.ease_rate > 0.0) {
            return Err(SwipeError::InvalidConfig(format!(
                "ease_rate must be finite and positive, got {}",
                self.ease_rate
            )));
        }
        if let Some(threshold) = self.outcome {
            if threshold.final_card_count() == 0 {
                return Err(SwipeError::InvalidConfig(
                    "outcome final_card_count must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Distance a release must reach to count as a swipe.
    #[must_use]
    pub fn snap_threshold(&self, viewport_width: f32) -> f32 {
        self.snap_threshold_fraction * viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwipeConfig::default();
        assert_eq!(config.snap_threshold_fraction, 0.2);
        assert_eq!(config.ease_rate, 2.0);
        assert_eq!(config.outcome, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SwipeConfig::default()
            .with_snap_threshold(0.5)
            .with_ease_rate(4.0)
            .with_final_card_count(7);

        assert_eq!(config.snap_threshold_fraction, 0.5);
        assert_eq!(config.ease_rate, 4.0);
        assert_eq!(config.outcome.map(OutcomeThreshold::final_card_count), Some(7));
    }

    #[test]
    fn test_snap_threshold_scales_with_width() {
        let config = SwipeConfig::default();
        assert!((config.snap_threshold(1000.0) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_validate_rejects_bad_knobs() {
        assert!(SwipeConfig::default().with_snap_threshold(0.0).validate().is_err());
        assert!(SwipeConfig::default().with_snap_threshold(1.5).validate().is_err());
        assert!(SwipeConfig::default().with_ease_rate(-1.0).validate().is_err());
        assert!(SwipeConfig::default().with_ease_rate(f32::NAN).validate().is_err());
        assert!(SwipeConfig::default().with_snap_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn test_outcome_threshold() {
        let threshold = OutcomeThreshold::new(7);
        assert!(!threshold.is_reached(6));
        assert!(threshold.is_reached(7));
    }

    #[test]
    #[should_panic(expected = "Outcome needs at least 1 card")]
    fn test_outcome_threshold_zero() {
        OutcomeThreshold::new(0);
    }

    #[test]
    fn test_serialization() {
        let config = SwipeConfig::default().with_final_card_count(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SwipeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_validate_rejects_zero_final_count_from_json() {
        let json = r#"{"snap_threshold_fraction":0.2,"ease_rate":2.0,"outcome":{"final_card_count":0}}"#;
        let config: SwipeConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(config.validate(), Err(SwipeError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_outcome_defaults_to_none() {
        let json = r#"{"snap_threshold_fraction":0.2,"ease_rate":2.0}"#;
        let config: SwipeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.outcome, None);
    }
}

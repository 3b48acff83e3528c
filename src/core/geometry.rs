//! Positions and the viewport.
//!
//! Cards live in the host's local 2D space. Only the x axis takes part in
//! swiping; y is carried through untouched.

use serde::{Deserialize, Serialize};

use super::error::SwipeError;

/// A point in the host's local 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point shifted horizontally by `dx`.
    #[must_use]
    pub fn shifted_x(self, dx: f32) -> Self {
        Self { x: self.x + dx, y: self.y }
    }

    /// Same point with a different x.
    #[must_use]
    pub fn with_x(self, x: f32) -> Self {
        Self { x, y: self.y }
    }

    /// Absolute horizontal distance to another point.
    #[must_use]
    pub fn horizontal_distance(self, other: Vec2) -> f32 {
        (self.x - other.x).abs()
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// The visible area the deck is laid out in.
///
/// Only the width matters: it scales both the snap-back threshold and the
/// distance a swiped card travels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f32,
}

impl Viewport {
    /// Create a viewport, rejecting widths that are not finite and positive.
    pub fn new(width: f32) -> Result<Self, SwipeError> {
        if width.is_finite() && width > 0.0 {
            Ok(Self { width })
        } else {
            Err(SwipeError::InvalidViewport(width))
        }
    }

    /// Viewport width in host units.
    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_keeps_y() {
        let p = Vec2::new(10.0, 4.0).shifted_x(-3.5);
        assert_eq!(p, Vec2::new(6.5, 4.0));
    }

    #[test]
    fn test_horizontal_distance_ignores_y() {
        let a = Vec2::new(-20.0, 100.0);
        let b = Vec2::new(30.0, -7.0);
        assert_eq!(a.horizontal_distance(b), 50.0);
        assert_eq!(b.horizontal_distance(a), 50.0);
    }

    #[test]
    fn test_viewport_rejects_bad_widths() {
        assert!(Viewport::new(800.0).is_ok());
        assert_eq!(Viewport::new(0.0), Err(SwipeError::InvalidViewport(0.0)));
        assert!(Viewport::new(-1.0).is_err());
        assert!(Viewport::new(f32::NAN).is_err());
        assert!(Viewport::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vec2::new(1.0, 2.5)), "(1.0, 2.5)");
    }
}

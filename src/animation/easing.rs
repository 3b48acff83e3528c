//! Easing curves.

/// Clamp an interpolation parameter to [0, 1].
///
/// NaN clamps to 0 so a bad parameter never leaks into positions.
#[must_use]
pub fn clamp01(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Hermite smooth step between `from` and `to`.
///
/// `t` is clamped to [0, 1]; the curve has zero slope at both ends, so
/// motion starts and finishes gently. `t = 0` yields `from` and `t = 1`
/// yields `to` exactly.
#[must_use]
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = clamp01(t);
    let t = clamp01(-2.0 * t * t * t + 3.0 * t * t);
    to * t + from * (1.0 - t)
}

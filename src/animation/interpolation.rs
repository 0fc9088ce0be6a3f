//! Centralized interpolation utilities for the section animations.
//!
//! Every section ramp is one of: a [`Ramp`] between two constants, an
//! opacity blend with the previous section, or the apple's fall-and-bounce
//! curve. Keeping them here lets the section code read as a table of
//! constants.

use std::f32::consts::PI;

use super::easing::EasingFunction;

/// Lerp two f32 values.
#[inline]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// A value that moves from `from` to `to` as progress goes 0 → 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Value at progress 0.
    pub from: f32,
    /// Value at full (eased) progress.
    pub to: f32,
    /// Curve applied to progress before interpolating.
    pub easing: EasingFunction,
}

impl Ramp {
    /// Linear ramp.
    pub fn linear(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            easing: EasingFunction::Linear,
        }
    }

    /// Ramp with a custom easing curve.
    pub fn eased(from: f32, to: f32, easing: EasingFunction) -> Self {
        Self { from, to, easing }
    }

    /// Value at raw progress `t` (clamped by the easing).
    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        lerp_f32(self.from, self.to, self.easing.evaluate(t))
    }
}

/// Opacity for a section that fades in from its predecessor's trailing
/// edge: `min(max(previous, 0) + progress, 1)`.
///
/// A section whose predecessor already completed starts fully opaque, so
/// it does not pop when it becomes active.
#[inline]
pub fn blend_with_previous(previous: f32, progress: f32) -> f32 {
    (previous.max(0.0) + progress.max(0.0)).min(1.0)
}

/// Fall-then-bounce height curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallBounce {
    /// Height at progress 0.
    pub start_y: f32,
    /// Height the object comes to rest at.
    pub rest_y: f32,
    /// Progress at which the fall ends and bouncing starts.
    pub threshold: f32,
    /// Number of half-period bounces over the bounce phase.
    pub bounces: f32,
}

impl FallBounce {
    /// Height at progress `t`.
    ///
    /// Below the threshold the fall is linear from `start_y` to `rest_y`.
    /// Past it, with `b` the progress through the bounce phase, the height
    /// is `rest_y + |sin(b·π·bounces)|·(1 − b)`: damped hops that begin and
    /// end on the rest height, so both phase boundaries are continuous.
    pub fn height(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let threshold = self.threshold.clamp(f32::EPSILON, 1.0);
        if t <= threshold {
            return lerp_f32(self.start_y, self.rest_y, t / threshold);
        }
        let span = 1.0 - threshold;
        let bounce_t = if span > 0.0 {
            ((t - threshold) / span).min(1.0)
        } else {
            1.0
        };
        self.rest_y
            + (bounce_t * PI * self.bounces).sin().abs() * (1.0 - bounce_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> FallBounce {
        FallBounce {
            start_y: 5.0,
            rest_y: -1.5,
            threshold: 0.75,
            bounces: 3.0,
        }
    }

    #[test]
    fn test_lerp_f32() {
        assert!((lerp_f32(0.0, 100.0, 0.25) - 25.0).abs() < 0.001);
        assert!(lerp_f32(-3.0, 3.0, 0.5).abs() < 0.001);
    }

    #[test]
    fn test_ramp_uses_easing() {
        let ramp = Ramp::eased(0.1, 0.4, EasingFunction::DoubleSpeed);
        assert!((ramp.at(0.0) - 0.1).abs() < 1e-6);
        assert!((ramp.at(0.25) - 0.25).abs() < 1e-6);
        assert!((ramp.at(0.5) - 0.4).abs() < 1e-6);
        assert!((Ramp::linear(0.1, 0.4).at(0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_blend_with_previous_clamps() {
        assert_eq!(blend_with_previous(0.0, 0.3), 0.3);
        assert_eq!(blend_with_previous(1.0, 0.3), 1.0);
        assert_eq!(blend_with_previous(-2.0, 0.5), 0.5);
        assert!((blend_with_previous(0.4, 0.2) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_fall_is_linear_before_threshold() {
        let curve = apple();
        assert_eq!(curve.height(0.0), 5.0);
        // Half way through the fall phase
        let mid = curve.height(0.375);
        assert!((mid - 1.75).abs() < 1e-5, "got {mid}");
        assert!((curve.height(0.75) - -1.5).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_formula_past_threshold() {
        let curve = apple();
        let t = 0.8;
        let bounce_t = (t - 0.75) / 0.25;
        let expected =
            -1.5 + (bounce_t * PI * 3.0).sin().abs() * (1.0 - bounce_t);
        assert!((curve.height(t) - expected).abs() < 1e-5);
        // Linear-fall formula would keep extrapolating below rest height
        let linear = lerp_f32(5.0, -1.5, t / 0.75);
        assert!(curve.height(t) > linear);
    }

    #[test]
    fn test_bounce_ends_at_rest() {
        let curve = apple();
        assert!((curve.height(1.0) - -1.5).abs() < 1e-5);
        for i in 0..=100 {
            let t = 0.75 + 0.25 * (i as f32 / 100.0);
            assert!(curve.height(t) >= -1.5 - 1e-5);
        }
    }
}

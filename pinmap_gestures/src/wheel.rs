// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel recognizer: map discrete scroll steps to multiplicative zoom factors.
//!
//! Wheel input has no begin/update/end lifecycle; every step is independent
//! and applies a fixed factor to the *current* scale, so repeated steps feel
//! proportional rather than linear.
//!
//! Only construct a [`WheelRecognizer`] for input sources that actually
//! deliver discrete step events (desktop-class pointers). Touch-only hosts
//! simply never create one; the recognizer itself never checks the platform.
//!
//! ## Minimal example
//!
//! ```
//! use pinmap_gestures::wheel::{WheelDirection, WheelRecognizer};
//!
//! let wheel = WheelRecognizer::new();
//!
//! assert_eq!(wheel.step(1.0, WheelDirection::In), Some(1.05));
//! assert_eq!(wheel.step(1.0, WheelDirection::Out), Some(0.95));
//! ```

/// Per-step factor for zooming in. One step multiplies the scale by 5%.
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Per-step factor for zooming out.
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

/// Direction of a discrete wheel/scroll zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Zoom in (content grows).
    In,
    /// Zoom out (content shrinks).
    Out,
}

/// Turns discrete wheel steps into candidate scales.
///
/// The candidate is unclamped; the viewport that owns the transform state
/// clamps it into its scale bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelRecognizer {
    zoom_in: f64,
    zoom_out: f64,
}

impl Default for WheelRecognizer {
    fn default() -> Self {
        Self {
            zoom_in: ZOOM_IN_FACTOR,
            zoom_out: ZOOM_OUT_FACTOR,
        }
    }
}

impl WheelRecognizer {
    /// Creates a recognizer with the default step factors
    /// ([`ZOOM_IN_FACTOR`], [`ZOOM_OUT_FACTOR`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer with custom step factors.
    ///
    /// Factors are taken as-is; steps with a non-finite or non-positive
    /// factor are dropped at [`WheelRecognizer::step`] time.
    #[must_use]
    pub fn with_factors(zoom_in: f64, zoom_out: f64) -> Self {
        Self { zoom_in, zoom_out }
    }

    /// Returns the factor applied per step in the given direction.
    #[must_use]
    pub fn factor(&self, direction: WheelDirection) -> f64 {
        match direction {
            WheelDirection::In => self.zoom_in,
            WheelDirection::Out => self.zoom_out,
        }
    }

    /// Applies one step to the current scale, returning the candidate scale.
    ///
    /// Non-finite or non-positive factors (or a non-finite candidate) are
    /// dropped (`None`); the previous scale remains valid.
    #[must_use]
    pub fn step(&self, current_scale: f64, direction: WheelDirection) -> Option<f64> {
        let factor = self.factor(direction);
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }
        let candidate = current_scale * factor;
        if !candidate.is_finite() {
            return None;
        }
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factors() {
        let wheel = WheelRecognizer::new();
        assert_eq!(wheel.factor(WheelDirection::In), ZOOM_IN_FACTOR);
        assert_eq!(wheel.factor(WheelDirection::Out), ZOOM_OUT_FACTOR);
    }

    #[test]
    fn step_multiplies_current_scale() {
        let wheel = WheelRecognizer::new();
        assert_eq!(wheel.step(2.0, WheelDirection::In), Some(2.0 * 1.05));
        assert_eq!(wheel.step(2.0, WheelDirection::Out), Some(2.0 * 0.95));
    }

    #[test]
    fn steps_compound_multiplicatively() {
        let wheel = WheelRecognizer::new();

        let mut scale = 1.0;
        for _ in 0..3 {
            scale = wheel.step(scale, WheelDirection::In).unwrap();
        }
        assert!((scale - 1.05_f64.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn custom_factors() {
        let wheel = WheelRecognizer::with_factors(2.0, 0.5);
        assert_eq!(wheel.step(1.0, WheelDirection::In), Some(2.0));
        assert_eq!(wheel.step(1.0, WheelDirection::Out), Some(0.5));
    }

    #[test]
    fn malformed_factor_is_dropped() {
        let wheel = WheelRecognizer::with_factors(f64::NAN, -1.0);
        assert_eq!(wheel.step(1.0, WheelDirection::In), None);
        assert_eq!(wheel.step(1.0, WheelDirection::Out), None);
    }

    #[test]
    fn non_finite_candidate_is_dropped() {
        let wheel = WheelRecognizer::new();
        assert_eq!(wheel.step(f64::MAX, WheelDirection::In), None);
    }
}

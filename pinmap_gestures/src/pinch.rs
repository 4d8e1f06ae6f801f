// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognizer: rebase cumulative scale ratios onto a begin-snapshot.
//!
//! ## Usage
//!
//! 1) Call [`PinchRecognizer::begin`] with the live scale when the pinch
//!    starts.
//! 2) On each sample, call [`PinchRecognizer::update`] with the scale ratio
//!    accumulated **since the gesture began** to get the candidate scale.
//! 3) Call [`PinchRecognizer::end`] (or [`PinchRecognizer::cancel`]) when the
//!    pinch finishes.
//!
//! The candidate is unclamped; the viewport that owns the transform state
//! clamps it into its scale bounds on every update.
//!
//! ## Minimal example
//!
//! ```
//! use pinmap_gestures::pinch::PinchRecognizer;
//!
//! let mut pinch = PinchRecognizer::new();
//!
//! pinch.begin(1.0);
//! assert_eq!(pinch.update(1.0, 2.5), Some(2.5));
//!
//! // A ratio of zero is not a physical pinch; the sample is dropped.
//! assert_eq!(pinch.update(2.5, 0.0), None);
//!
//! pinch.end();
//! ```

/// Lifecycle of a single pinch session. The begin-snapshot only exists while
/// the gesture is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PinchPhase {
    #[default]
    Idle,
    Active {
        /// Scale at gesture begin.
        base_scale: f64,
    },
}

/// Recognizes a continuous pinch gesture and turns cumulative scale ratios
/// into candidate scales.
///
/// Ratios are relative to the gesture's begin state, so a re-delivered sample
/// yields the same candidate and consecutive pinches compose without drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchRecognizer {
    phase: PinchPhase,
}

impl PinchRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pinch session, snapshotting the live scale.
    pub fn begin(&mut self, current_scale: f64) {
        self.phase = PinchPhase::Active {
            base_scale: current_scale,
        };
    }

    /// Applies a cumulative-since-begin ratio, returning the candidate scale
    /// `base_scale * ratio`.
    ///
    /// `current_scale` is the live scale; it is only consulted when an update
    /// arrives without a prior begin, in which case it becomes an implicit
    /// snapshot.
    ///
    /// Ratios that are non-finite or not strictly positive are dropped
    /// (`None`); a non-positive scale is not physically meaningful for a
    /// pinch.
    pub fn update(&mut self, current_scale: f64, ratio: f64) -> Option<f64> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return None;
        }
        let base_scale = match self.phase {
            PinchPhase::Active { base_scale } => base_scale,
            PinchPhase::Idle => {
                self.phase = PinchPhase::Active {
                    base_scale: current_scale,
                };
                current_scale
            }
        };
        Some(base_scale * ratio)
    }

    /// Ends the pinch session. The last emitted scale persists.
    pub fn end(&mut self) {
        self.phase = PinchPhase::Idle;
    }

    /// Cancels the pinch session. Identical to [`PinchRecognizer::end`].
    pub fn cancel(&mut self) {
        self.end();
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, PinchPhase::Active { .. })
    }
}

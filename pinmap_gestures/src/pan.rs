// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan recognizer: rebase cumulative drag deltas onto a begin-snapshot.
//!
//! ## Usage
//!
//! 1) Call [`PanRecognizer::begin`] with the live translation when the drag
//!    starts.
//! 2) On each move sample, call [`PanRecognizer::update`] with the delta
//!    accumulated **since the gesture began** to get the new translation.
//! 3) Call [`PanRecognizer::end`] (or [`PanRecognizer::cancel`]) when the
//!    drag finishes; the last translation stays wherever the caller put it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use pinmap_gestures::pan::PanRecognizer;
//!
//! let mut pan = PanRecognizer::new();
//!
//! // Drag begins with the content at (10, -4).
//! pan.begin(Vec2::new(10.0, -4.0));
//! assert!(pan.is_active());
//!
//! // The pointer has moved (30, 5) since the drag began.
//! let translation = pan.update(Vec2::new(10.0, -4.0), Vec2::new(30.0, 5.0)).unwrap();
//! assert_eq!(translation, Vec2::new(40.0, 1.0));
//!
//! pan.end();
//! assert!(!pan.is_active());
//! ```

use kurbo::Vec2;

/// Lifecycle of a single drag session. The begin-snapshot only exists while
/// the gesture is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PanPhase {
    #[default]
    Idle,
    Active {
        /// Translation at gesture begin.
        base: Vec2,
    },
}

/// Recognizes a continuous drag gesture and turns cumulative translation
/// deltas into absolute translations.
///
/// Deltas are relative to the gesture's begin state, so delivering the same
/// update twice yields the same translation, and consecutive drags compose
/// without drift: each [`PanRecognizer::begin`] re-snapshots from the live
/// translation.
///
/// Translations are deliberately unbounded; the render surface clips
/// overflowing content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanRecognizer {
    phase: PanPhase,
}

impl PanRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag session, snapshotting the live translation.
    ///
    /// A begin while a session is already active replaces the snapshot.
    pub fn begin(&mut self, current: Vec2) {
        self.phase = PanPhase::Active { base: current };
    }

    /// Applies a cumulative-since-begin delta, returning the new translation.
    ///
    /// `current` is the live translation; it is only consulted when an update
    /// arrives without a prior begin (host replay), in which case it becomes
    /// an implicit snapshot and the worst outcome is a one-frame jump.
    ///
    /// Non-finite deltas are dropped (`None`); the previous translation
    /// remains valid.
    pub fn update(&mut self, current: Vec2, delta: Vec2) -> Option<Vec2> {
        if !delta.x.is_finite() || !delta.y.is_finite() {
            return None;
        }
        let base = match self.phase {
            PanPhase::Active { base } => base,
            PanPhase::Idle => {
                self.phase = PanPhase::Active { base: current };
                current
            }
        };
        Some(base + delta)
    }

    /// Ends the drag session. The last emitted translation persists.
    pub fn end(&mut self) {
        self.phase = PanPhase::Idle;
    }

    /// Cancels the drag session. Identical to [`PanRecognizer::end`]: no
    /// rollback to the pre-gesture translation.
    pub fn cancel(&mut self) {
        self.end();
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, PanPhase::Active { .. })
    }
}

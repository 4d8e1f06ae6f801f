// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinmap_pointer --heading-base-level=0

//! Pinmap Pointer: encode `ui-events` pointer streams into viewport gestures.
//!
//! This crate bridges a raw [`PointerEvent`] stream to a
//! [`MapViewport`](pinmap_viewport::MapViewport). [`PointerEncoder`] tracks
//! just enough per-pointer state to translate event transitions into the
//! viewport's gesture operations:
//!
//! - Button press / move / release drive a drag (`pan_begin` /
//!   `pan_update` with the offset accumulated since the press / `pan_end`).
//! - Platform pinch gestures drive the scale (`pinch_begin` /
//!   `pinch_update` with the ratio accumulated since the first sample).
//! - Scroll events become discrete wheel zoom steps; scrolling away from the
//!   user zooms in, towards the user zooms out.
//!
//! `encode` returns `true` when the event was captured by the viewport, so a
//! host embedded in a scrollable surface knows when to suppress its default
//! scroll/navigation handling.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pinmap_pointer::PointerEncoder;
//! use pinmap_viewport::MapViewport;
//! use ui_events::pointer::PointerEvent;
//!
//! fn on_pointer_event(
//!     encoder: &mut PointerEncoder,
//!     viewport: &mut MapViewport,
//!     event: &PointerEvent,
//! ) -> bool {
//!     // `true` means the event is consumed; don't let it scroll the page.
//!     encoder.encode(event, viewport)
//! }
//! ```
//!
//! [`PointerEncoder::encode`] is a thin match over the event enum; all of
//! the encoding arithmetic lives in the plain-value transition methods
//! ([`PointerEncoder::press`], [`PointerEncoder::motion`], and friends), so
//! hosts whose input source is not `ui-events` can call those directly.
//!
//! The encoder never clamps or stores transform values itself; the viewport
//! owns all of that. It also never asks what platform it runs on: scroll
//! events only zoom when the host attached a
//! [`WheelRecognizer`](pinmap_gestures::WheelRecognizer) to the viewport.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerGesture, PointerScrollEvent};

use pinmap_gestures::WheelDirection;
use pinmap_viewport::MapViewport;

/// Pixels per scroll line, for `ScrollDelta::LineDelta` sources.
const SCROLL_LINE_SIZE: f64 = 20.0;

/// Pixels per scroll page, for `ScrollDelta::PageDelta` sources.
const SCROLL_PAGE_SIZE: f64 = 600.0;

/// Drag tracking across press/move/release transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragPhase {
    /// No button held; moves are ignored.
    #[default]
    Idle,
    /// Button held since `start`; moves carry the offset from it.
    Active {
        /// Pointer position at the press, in logical coordinates.
        start: Point,
    },
}

/// Pinch tracking across a run of platform pinch gesture samples.
///
/// `ui-events` delivers pinch as incremental per-sample deltas with no
/// explicit begin or end, so the session opens on the first sample, folds
/// each delta into a cumulative ratio, and settles on the next non-gesture
/// pointer transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PinchSession {
    #[default]
    Idle,
    Active {
        /// Scale ratio accumulated since the session opened.
        ratio: f64,
    },
}

impl PinchSession {
    /// Folds one incremental delta in, returning the cumulative ratio and
    /// whether this sample opened the session.
    ///
    /// A sample whose per-step factor `1.0 + delta` is non-finite or not
    /// strictly positive is dropped (`None`) without touching the session,
    /// so one non-physical sample cannot zero out the cumulative ratio and
    /// deaden the rest of the gesture.
    fn advance(&mut self, delta: f64) -> Option<(f64, bool)> {
        let factor = 1.0 + delta;
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }
        match *self {
            Self::Idle => {
                *self = Self::Active { ratio: factor };
                Some((factor, true))
            }
            Self::Active { ratio } => {
                let ratio = ratio * factor;
                *self = Self::Active { ratio };
                Some((ratio, false))
            }
        }
    }
}

/// Translates a [`PointerEvent`] stream into [`MapViewport`] gestures.
///
/// One encoder per pointer stream; state is self-contained and `Default`
/// gives a fresh encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerEncoder {
    drag: DragPhase,
    pinch: PinchSession,
}

impl PointerEncoder {
    /// Creates an encoder with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a drag is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Active { .. })
    }

    /// Processes one pointer event against the viewport.
    ///
    /// Returns `true` if the event was captured by the viewport. For scroll
    /// events this is exactly [`MapViewport::wheel_step`]'s capture flag, so
    /// hosts can suppress default scrolling when (and only when) the
    /// viewport has a wheel recognizer attached.
    pub fn encode(&mut self, event: &PointerEvent, viewport: &mut MapViewport) -> bool {
        match event {
            PointerEvent::Down(e) => self.press(e.state.logical_point(), viewport),
            PointerEvent::Move(update) => self.motion(update.current.logical_point(), viewport),
            PointerEvent::Up(_) => self.release(viewport),
            PointerEvent::Cancel(_) => self.interrupt(viewport),
            PointerEvent::Gesture(e) => {
                let PointerGesture::Pinch(delta) = &e.gesture else {
                    return false;
                };
                self.pinch_sample(f64::from(*delta), viewport)
            }
            PointerEvent::Scroll(e) => self.scroll_by(scroll_amount_y(e), viewport),
            _ => false,
        }
    }

    /// A button press at `position`: settles any pinch session and opens a
    /// drag.
    pub fn press(&mut self, position: Point, viewport: &mut MapViewport) -> bool {
        self.settle_pinch(viewport);
        self.drag = DragPhase::Active { start: position };
        viewport.pan_begin();
        true
    }

    /// A pointer move to `position`: while a drag is open, feeds the offset
    /// accumulated since the press into the viewport.
    ///
    /// The offset is always `position - start`, never a sum of per-move
    /// steps, so a re-delivered or skipped sample cannot drift the
    /// translation.
    pub fn motion(&mut self, position: Point, viewport: &mut MapViewport) -> bool {
        let DragPhase::Active { start } = self.drag else {
            return false;
        };
        viewport.pan_update(position - start);
        true
    }

    /// A button release: settles any pinch session and closes the drag.
    pub fn release(&mut self, viewport: &mut MapViewport) -> bool {
        let settled = self.settle_pinch(viewport);
        if self.is_dragging() {
            self.drag = DragPhase::Idle;
            viewport.pan_end();
            true
        } else {
            settled
        }
    }

    /// A pointer cancel: like [`PointerEncoder::release`], with the drag
    /// cancelled instead of ended. The viewport keeps the last published
    /// state either way.
    pub fn interrupt(&mut self, viewport: &mut MapViewport) -> bool {
        let settled = self.settle_pinch(viewport);
        if self.is_dragging() {
            self.drag = DragPhase::Idle;
            viewport.pan_cancel();
            true
        } else {
            settled
        }
    }

    /// One incremental pinch sample: opens the session on the first sample
    /// and feeds the cumulative ratio into the viewport.
    ///
    /// Samples whose per-step factor is non-finite or non-positive are
    /// dropped; the session and the viewport are left untouched.
    pub fn pinch_sample(&mut self, delta: f64, viewport: &mut MapViewport) -> bool {
        let Some((ratio, opened)) = self.pinch.advance(delta) else {
            return false;
        };
        if opened {
            viewport.pinch_begin();
        }
        viewport.pinch_update(ratio);
        true
    }

    /// A resolved vertical scroll amount in logical pixels: maps the sign to
    /// a wheel zoom step. A zero amount is no step and is not captured.
    pub fn scroll_by(&mut self, amount_y: f64, viewport: &mut MapViewport) -> bool {
        let Some(direction) = wheel_direction(amount_y) else {
            return false;
        };
        viewport.wheel_step(direction)
    }

    fn settle_pinch(&mut self, viewport: &mut MapViewport) -> bool {
        if self.pinch == PinchSession::Idle {
            return false;
        }
        self.pinch = PinchSession::Idle;
        viewport.pinch_end();
        true
    }
}

/// Resolves a scroll event's vertical amount into logical pixels.
fn scroll_amount_y(event: &PointerScrollEvent) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => pos.to_logical(event.state.scale_factor).y,
        ScrollDelta::LineDelta(_, y) => f64::from(*y) * SCROLL_LINE_SIZE,
        ScrollDelta::PageDelta(_, y) => f64::from(*y) * SCROLL_PAGE_SIZE,
    }
}

/// Maps a vertical scroll amount to a zoom direction.
///
/// Positive `y` is scrolling down (towards the user), which zooms out; a
/// zero amount is no step at all.
fn wheel_direction(y: f64) -> Option<WheelDirection> {
    if y > 0.0 {
        Some(WheelDirection::Out)
    } else if y < 0.0 {
        Some(WheelDirection::In)
    } else {
        None
    }
}

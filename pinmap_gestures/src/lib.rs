// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmap Gestures: Continuous gesture recognizers for viewport pan and zoom.
//!
//! This crate provides small, focused recognizers for the continuous input
//! gestures that drive a pannable/zoomable viewport. Each module handles one
//! gesture type:
//!
//! - [`pan`]: One- or two-finger drag, producing a translation from a
//!   begin-snapshot plus a cumulative delta.
//! - [`pinch`]: Two-finger pinch, producing a candidate scale from a
//!   begin-snapshot times a cumulative ratio.
//! - [`wheel`]: Discrete scroll-wheel steps, producing a candidate scale from
//!   the current scale times a fixed per-step factor.
//!
//! ## Design Philosophy
//!
//! Each recognizer is designed to be:
//!
//! - **Minimal and focused**: One gesture type per recognizer.
//! - **Explicit about lifecycle**: Pan and pinch model their
//!   begin/update/end lifecycle as a two-state machine (`Idle` / `Active`),
//!   with the begin-snapshot stored inside the `Active` state so it cannot
//!   be read outside a live gesture.
//! - **Cumulative**: Update values are expressed relative to the gesture's
//!   begin state, not to the previous update, so re-delivered samples are
//!   idempotent and no per-update accumulation error builds up.
//! - **Integration-friendly**: Recognizers accept normalized values and know
//!   nothing about event routing, windowing, or rendering.
//!
//! Recognizers emit *candidate* values and never clamp: the viewport that
//! owns the transform state applies scale bounds, so there is exactly one
//! place where the clamp invariant lives.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Vec2;
//! use pinmap_gestures::{PanRecognizer, PinchRecognizer};
//!
//! let mut pan = PanRecognizer::new();
//! let mut pinch = PinchRecognizer::new();
//!
//! // Drag begins at the live translation (10, -4).
//! pan.begin(Vec2::new(10.0, -4.0));
//! let moved = pan.update(Vec2::new(10.0, -4.0), Vec2::new(30.0, 5.0)).unwrap();
//! assert_eq!(moved, Vec2::new(40.0, 1.0));
//! pan.end();
//!
//! // Pinch begins at the live scale 1.0; updates carry cumulative ratios.
//! pinch.begin(1.0);
//! let candidate = pinch.update(1.0, 2.5).unwrap();
//! assert_eq!(candidate, 2.5);
//! pinch.end();
//! ```
//!
//! Malformed samples (non-finite deltas, non-positive scale ratios) are
//! dropped by returning `None`, leaving the previous valid state in place.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod pinch;
pub mod wheel;

pub use pan::PanRecognizer;
pub use pinch::PinchRecognizer;
pub use wheel::{WheelDirection, WheelRecognizer, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

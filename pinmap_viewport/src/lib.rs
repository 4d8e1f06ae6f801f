// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinmap_viewport --heading-base-level=0

//! Pinmap Viewport: pan/zoom transform state with scale clamping and a
//! per-change publisher.
//!
//! This crate provides a small, headless controller for a pannable/zoomable
//! viewport. [`MapViewport`] owns a translation plus a uniform scale, routes
//! gesture samples through the recognizers in [`pinmap_gestures`], clamps the
//! scale into its [`ScaleBounds`] on every update, and republishes a
//! [`RenderTransform`] whenever the state changes.
//!
//! It does **not** own any scene graph, rendering backend, or event loop.
//! Callers are expected to:
//! - Maintain their own content tree and render surface.
//! - Wire input events (for example, from `ui-events`) into the
//!   `pan_*`/`pinch_*`/`wheel_step` operations at a higher layer.
//! - Consume the published [`RenderTransform`] — either the raw
//!   translation/scale pair or its [`kurbo::Affine`] form — on each change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use pinmap_gestures::{WheelDirection, WheelRecognizer};
//! use pinmap_viewport::MapViewport;
//!
//! let mut view = MapViewport::new();
//! view.attach_wheel(WheelRecognizer::new());
//! view.set_on_change(|t| {
//!     // Hand the new transform to the render surface.
//!     let _ = t.to_affine();
//! });
//!
//! // A drag: deltas are cumulative since the gesture began.
//! view.pan_begin();
//! view.pan_update(Vec2::new(30.0, 5.0));
//! view.pan_end();
//!
//! // A pinch: ratios are cumulative since the gesture began, and the
//! // resulting scale is clamped into the bounds on every update.
//! view.pinch_begin();
//! view.pinch_update(2.5);
//! view.pinch_end();
//!
//! // A wheel step: returns `true`, so the host suppresses its default
//! // scroll handling.
//! assert!(view.wheel_step(WheelDirection::In));
//! assert_eq!(view.translation(), Vec2::new(30.0, 5.0));
//! ```
//!
//! ## Design notes
//!
//! - Pan and pinch write disjoint fields (translation vs. scale), so a
//!   simultaneous drag-and-pinch composes without coordination and any
//!   interleaving of their updates yields the same final state.
//! - Translation is deliberately unbounded; only the scale is clamped.
//! - Ending or cancelling a gesture keeps the last published state. There is
//!   no rollback and no end-of-gesture animation.
//! - The wheel path exists only when a [`WheelRecognizer`] is attached;
//!   attachment is a capability decision made by the host, not a platform
//!   check made here.
//! - Rotation and inertia are intentionally left out and can be added later
//!   as backwards-compatible extensions.
//!
//! [`WheelRecognizer`]: pinmap_gestures::WheelRecognizer
//!
//! This crate is `no_std`, but requires `alloc` for the boxed change
//! observer.

#![no_std]

extern crate alloc;

mod bounds;
mod transform;
mod viewport;

pub use bounds::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ScaleBounds};
pub use transform::RenderTransform;
pub use viewport::{MapViewport, MapViewportDebugInfo};

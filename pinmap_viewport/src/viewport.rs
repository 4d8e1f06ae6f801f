// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::Vec2;
use pinmap_gestures::{PanRecognizer, PinchRecognizer, WheelDirection, WheelRecognizer};

use crate::bounds::ScaleBounds;
use crate::transform::RenderTransform;

/// Observer invoked with the freshly published transform after every
/// observable change.
type ChangeListener = Box<dyn FnMut(RenderTransform)>;

/// Pan/zoom transform state for one viewport instance.
///
/// `MapViewport` owns the translation and uniform scale of a viewport's
/// content, feeds gesture samples through the recognizers in
/// [`pinmap_gestures`], clamps the scale into its [`ScaleBounds`] on every
/// update, and republishes a [`RenderTransform`] whenever the state changes.
///
/// One instance per viewport: the state is an owned value, never shared, so
/// multiple viewports cannot cross-talk. All methods take `&mut self`; the
/// host is expected to deliver gesture callbacks from a single interaction
/// thread (or serialize them onto one queue) — there is no interior locking.
///
/// Pan and pinch write disjoint fields, so their updates commute: any
/// interleaving of a simultaneous drag-and-pinch yields the same final
/// state. Wheel and pinch both project onto the clamped scale,
/// last-write-wins.
pub struct MapViewport {
    translation: Vec2,
    scale: f64,
    bounds: ScaleBounds,
    pan: PanRecognizer,
    pinch: PinchRecognizer,
    wheel: Option<WheelRecognizer>,
    published: RenderTransform,
    on_change: Option<ChangeListener>,
}

impl core::fmt::Debug for MapViewport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapViewport")
            .field("translation", &self.translation)
            .field("scale", &self.scale)
            .field("bounds", &self.bounds)
            .field("pan", &self.pan)
            .field("pinch", &self.pinch)
            .field("wheel", &self.wheel)
            .field("published", &self.published)
            .field("on_change", &self.on_change.as_ref().map(|_| "<listener>"))
            .finish()
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl MapViewport {
    /// Creates a viewport with the default scale bounds (`1.0..=4.0`).
    ///
    /// Initial state is no offset at natural size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bounds(ScaleBounds::default())
    }

    /// Creates a viewport with the given scale bounds.
    ///
    /// The initial scale of `1.0` is clamped into the bounds so the clamp
    /// invariant holds from the first published transform onward.
    #[must_use]
    pub fn with_bounds(bounds: ScaleBounds) -> Self {
        let scale = bounds.clamp(1.0);
        let translation = Vec2::ZERO;
        Self {
            translation,
            scale,
            bounds,
            pan: PanRecognizer::new(),
            pinch: PinchRecognizer::new(),
            wheel: None,
            published: RenderTransform::new(translation, scale),
            on_change: None,
        }
    }

    /// Returns the current content translation in viewport pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the scale bounds.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Returns the last published transform.
    ///
    /// This is kept in sync with the state by every mutating call, so it is
    /// always safe to hand to a render surface.
    #[must_use]
    pub fn render_transform(&self) -> RenderTransform {
        self.published
    }

    /// Installs the change observer.
    ///
    /// The observer fires once per observable change, synchronously at the
    /// end of the recognizer update that caused it, and is not called for
    /// updates that leave the transform unchanged. It replaces any previous
    /// observer.
    pub fn set_on_change(&mut self, listener: impl FnMut(RenderTransform) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Attaches a wheel recognizer.
    ///
    /// Only call this when the host's input source delivers discrete
    /// wheel/scroll steps; touch-only hosts simply never attach one. This is
    /// a capability, not a platform check.
    pub fn attach_wheel(&mut self, wheel: WheelRecognizer) {
        self.wheel = Some(wheel);
    }

    /// Returns `true` if a wheel recognizer is attached.
    #[must_use]
    pub fn has_wheel(&self) -> bool {
        self.wheel.is_some()
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    /// Returns `true` while a pinch gesture is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Starts a drag gesture, snapshotting the live translation.
    pub fn pan_begin(&mut self) {
        self.pan.begin(self.translation);
    }

    /// Applies a drag update with the translation delta accumulated since
    /// the gesture began.
    ///
    /// Translation is never clamped; content may be dragged fully
    /// off-screen and the render surface clips it.
    pub fn pan_update(&mut self, delta: Vec2) {
        if let Some(translation) = self.pan.update(self.translation, delta) {
            self.translation = translation;
            self.publish();
        }
    }

    /// Ends the drag gesture; the last published translation persists.
    pub fn pan_end(&mut self) {
        self.pan.end();
    }

    /// Cancels the drag gesture. Identical to [`MapViewport::pan_end`]: no
    /// rollback.
    pub fn pan_cancel(&mut self) {
        self.pan.cancel();
    }

    /// Starts a pinch gesture, snapshotting the live scale.
    pub fn pinch_begin(&mut self) {
        self.pinch.begin(self.scale);
    }

    /// Applies a pinch update with the scale ratio accumulated since the
    /// gesture began.
    ///
    /// The candidate scale is clamped into the bounds on every update, so
    /// the published scale never overshoots the limits even transiently.
    pub fn pinch_update(&mut self, ratio: f64) {
        if let Some(candidate) = self.pinch.update(self.scale, ratio) {
            self.scale = self.bounds.clamp(candidate);
            self.publish();
        }
    }

    /// Ends the pinch gesture; the last published scale persists.
    pub fn pinch_end(&mut self) {
        self.pinch.end();
    }

    /// Cancels the pinch gesture. Identical to [`MapViewport::pinch_end`].
    pub fn pinch_cancel(&mut self) {
        self.pinch.cancel();
    }

    /// Applies one discrete wheel zoom step to the current scale, clamped
    /// into the bounds.
    ///
    /// Returns `true` when a wheel recognizer is attached, i.e. the step was
    /// captured by the viewport; hosts should suppress their default
    /// scroll/navigation handling exactly when this returns `true`. Without
    /// an attached recognizer the step is ignored and `false` is returned.
    pub fn wheel_step(&mut self, direction: WheelDirection) -> bool {
        let Some(wheel) = self.wheel else {
            return false;
        };
        if let Some(candidate) = wheel.step(self.scale, direction) {
            self.scale = self.bounds.clamp(candidate);
            self.publish();
        }
        true
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            translation: self.translation,
            scale: self.scale,
            min_scale: self.bounds.min(),
            max_scale: self.bounds.max(),
            panning: self.is_panning(),
            pinching: self.is_pinching(),
            wheel_attached: self.has_wheel(),
        }
    }

    fn publish(&mut self) {
        let next = RenderTransform::new(self.translation, self.scale);
        if next == self.published {
            return;
        }
        self.published = next;
        if let Some(listener) = self.on_change.as_mut() {
            listener(next);
        }
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Current content translation in viewport pixels.
    pub translation: Vec2,
    /// Current uniform scale.
    pub scale: f64,
    /// Minimum scale bound.
    pub min_scale: f64,
    /// Maximum scale bound.
    pub max_scale: f64,
    /// Whether a drag gesture is active.
    pub panning: bool,
    /// Whether a pinch gesture is active.
    pub pinching: bool,
    /// Whether a wheel recognizer is attached.
    pub wheel_attached: bool,
}

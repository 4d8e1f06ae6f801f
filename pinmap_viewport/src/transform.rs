// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// The published output of a viewport: an unscaled translation plus a
/// uniform scale.
///
/// This is a pure projection of the transform state, cheap enough to rebuild
/// on every input sample. Render surfaces either consume the triple directly
/// or go through [`RenderTransform::to_affine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTransform {
    /// Content offset in viewport pixels.
    pub translation: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl RenderTransform {
    /// The identity transform: no offset, natural size.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub fn new(translation: Vec2, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// Returns the equivalent affine map.
    ///
    /// Content → view: scale about the origin, then translate. The
    /// translation is in view pixels and is not itself scaled.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

impl Default for RenderTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<RenderTransform> for Affine {
    fn from(transform: RenderTransform) -> Self {
        transform.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::RenderTransform;

    #[test]
    fn identity_maps_points_to_themselves() {
        let affine = RenderTransform::IDENTITY.to_affine();
        let p = Point::new(12.5, -3.0);
        assert_eq!(affine * p, p);
    }

    #[test]
    fn origin_maps_to_the_translation() {
        let t = RenderTransform::new(Vec2::new(40.0, 1.0), 3.0);
        let mapped = t.to_affine() * Point::ZERO;
        assert!((mapped.x - 40.0).abs() < 1e-12);
        assert!((mapped.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn translation_is_not_scaled() {
        // Point (1, 0) lands at translation + scale * (1, 0); the offset
        // itself is unaffected by the zoom factor.
        let t = RenderTransform::new(Vec2::new(10.0, 20.0), 2.0);
        let mapped = t.to_affine() * Point::new(1.0, 0.0);
        assert!((mapped.x - 12.0).abs() < 1e-12);
        assert!((mapped.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn into_affine_matches_to_affine() {
        let t = RenderTransform::new(Vec2::new(-5.0, 7.0), 1.5);
        assert_eq!(Affine::from(t), t.to_affine());
    }
}

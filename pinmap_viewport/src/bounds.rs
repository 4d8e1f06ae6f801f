// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default minimum scale factor (fits the content at its natural size).
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Default maximum scale factor.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Static scale limits for a viewport, fixed at construction.
///
/// Only the scale is bounded; translation is deliberately unbounded so
/// content can be dragged fully off-screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    /// Creates bounds from the given limits.
    ///
    /// The provided range is normalized so that `min <= max`, and both limits
    /// are forced positive; construction never fails.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        let (min, max) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        // f64::max ignores NaN operands, so this also repairs NaN inputs.
        let min = min.max(f64::MIN_POSITIVE);
        let max = max.max(min);
        Self { min, max }
    }

    /// Returns the minimum scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a scale into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_one_to_four() {
        let bounds = ScaleBounds::default();
        assert_eq!(bounds.min(), 1.0);
        assert_eq!(bounds.max(), 4.0);
    }

    #[test]
    fn clamp_constrains_into_range() {
        let bounds = ScaleBounds::new(1.0, 4.0);
        assert_eq!(bounds.clamp(0.5), 1.0);
        assert_eq!(bounds.clamp(2.5), 2.5);
        assert_eq!(bounds.clamp(5.0), 4.0);
    }

    #[test]
    fn swapped_limits_are_reordered() {
        let bounds = ScaleBounds::new(4.0, 1.0);
        assert_eq!(bounds.min(), 1.0);
        assert_eq!(bounds.max(), 4.0);
    }

    #[test]
    fn non_positive_limits_are_forced_positive() {
        let bounds = ScaleBounds::new(-2.0, 3.0);
        assert!(bounds.min() > 0.0);
        assert_eq!(bounds.max(), 3.0);

        let degenerate = ScaleBounds::new(-2.0, -1.0);
        assert!(degenerate.min() > 0.0);
        assert!(degenerate.max() >= degenerate.min());
    }

    #[test]
    fn nan_limits_do_not_poison_the_bounds() {
        let bounds = ScaleBounds::new(f64::NAN, f64::NAN);
        assert!(bounds.min() > 0.0);
        assert!(bounds.max() >= bounds.min());
        assert!(bounds.clamp(2.0).is_finite());
    }

    #[test]
    fn point_range_clamps_everything_to_one_value() {
        let bounds = ScaleBounds::new(2.0, 2.0);
        assert_eq!(bounds.clamp(0.1), 2.0);
        assert_eq!(bounds.clamp(9.0), 2.0);
    }
}

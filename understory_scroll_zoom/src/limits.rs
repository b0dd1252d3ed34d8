// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive bounds on the committed scale.
///
/// Every scale request, whether it comes from a wheel tick, an explicit
/// [`crate::ViewportController::scale_to`] call, or a controlled value handed
/// in by the owner, passes through [`ScaleLimits::clamp`] before it is
/// committed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Default lower bound.
    pub const DEFAULT_MIN: f64 = 0.1;
    /// Default upper bound.
    pub const DEFAULT_MAX: f64 = 10.0;

    /// Creates limits covering `[min, max]`.
    ///
    /// `min > 0` and `min <= max` are the caller's responsibility; they are
    /// only checked in debug builds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min > 0.0, "scale lower bound must be positive, got {min}");
        debug_assert!(min <= max, "scale bounds are inverted: {min} > {max}");
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bounds `requested` into `[min, max]`.
    ///
    /// NaN is treated as below range and yields `min`.
    #[must_use]
    pub fn clamp(&self, requested: f64) -> f64 {
        if requested > self.max {
            self.max
        } else if requested >= self.min {
            requested
        } else {
            self.min
        }
    }

    /// Returns `true` if `scale` already lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleLimits;

    #[test]
    fn clamps_into_range() {
        let limits = ScaleLimits::new(0.5, 4.0);
        assert_eq!(limits.clamp(10.0), 4.0);
        assert_eq!(limits.clamp(0.01), 0.5);
        assert_eq!(limits.clamp(2.0), 2.0);
        assert_eq!(limits.clamp(0.5), 0.5);
        assert_eq!(limits.clamp(4.0), 4.0);
    }

    #[test]
    fn clamp_is_idempotent_and_in_range() {
        let limits = ScaleLimits::default();
        for s in [-3.0, 0.0, 0.05, 0.1, 1.0, 9.99, 10.0, 1e9, f64::INFINITY] {
            let once = limits.clamp(s);
            assert_eq!(limits.clamp(once), once, "clamp not idempotent for {s}");
            assert!(limits.contains(once), "{once} escaped the limits");
        }
    }

    #[test]
    fn nan_maps_to_min() {
        let limits = ScaleLimits::default();
        assert_eq!(limits.clamp(f64::NAN), ScaleLimits::DEFAULT_MIN);
    }

    #[test]
    fn degenerate_range_pins_scale() {
        let limits = ScaleLimits::new(2.0, 2.0);
        assert_eq!(limits.clamp(1.0), 2.0);
        assert_eq!(limits.clamp(3.0), 2.0);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-preserving scroll offsets across a scale change.
//!
//! The scrollable content is inset by one viewport extent of leading padding
//! on each axis, so the content-space coordinate under a viewport-local
//! anchor `x` is `(scroll + x - viewport) / scale`. Keeping that quantity
//! constant while the scale moves from the baseline scale to a new one gives
//!
//! ```text
//! new_scroll = scroll + (scroll + x - viewport) * (new_scale - scale) / scale
//! ```
//!
//! where `scroll` and `scale` come from the [`ScrollBaseline`] captured at the
//! start of the gesture. Recomputing from the baseline on every tick (instead
//! of from the previous tick) keeps rounding in the host's scroll position
//! from accumulating over a long gesture.

use kurbo::{Point, Size, Vec2};

/// Scroll offsets and scale captured immediately before the first scale
/// change of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBaseline {
    /// Scroll offset (`left`, `top`) at capture time.
    pub offset: Vec2,
    /// Scale in effect at capture time, never the post-change scale.
    pub scale: f64,
}

impl ScrollBaseline {
    /// Captures a baseline.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Self {
        debug_assert!(scale > 0.0, "baseline scale must be positive, got {scale}");
        Self { offset, scale }
    }
}

/// Computes the scroll offset that keeps `anchor` visually fixed at
/// `new_scale`.
///
/// `anchor` is in viewport-local pixels; `None` anchors at the viewport
/// center. `viewport` is the container's visible size.
#[must_use]
pub fn anchored_offset(
    baseline: &ScrollBaseline,
    new_scale: f64,
    anchor: Option<Point>,
    viewport: Size,
) -> Vec2 {
    debug_assert!(
        baseline.scale > 0.0,
        "baseline scale must be positive, got {}",
        baseline.scale
    );
    let anchor = anchor.unwrap_or_else(|| viewport.to_rect().center());
    let ratio = (new_scale - baseline.scale) / baseline.scale;
    let left = axis_offset(baseline.offset.x, anchor.x, viewport.width, ratio);
    let top = axis_offset(baseline.offset.y, anchor.y, viewport.height, ratio);
    Vec2::new(left, top)
}

/// Like [`anchored_offset`], but a missing baseline leaves scroll untouched.
#[must_use]
pub fn anchored_scroll(
    baseline: Option<&ScrollBaseline>,
    new_scale: f64,
    anchor: Option<Point>,
    viewport: Size,
) -> Option<Vec2> {
    baseline.map(|b| anchored_offset(b, new_scale, anchor, viewport))
}

fn axis_offset(scroll: f64, anchor: f64, viewport: f64, ratio: f64) -> f64 {
    scroll + (scroll + anchor - viewport) * ratio
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ScrollBaseline, anchored_offset, anchored_scroll};

    fn content_coord(scroll: f64, anchor: f64, viewport: f64, scale: f64) -> f64 {
        (scroll + anchor - viewport) / scale
    }

    #[test]
    fn zoom_in_matches_reference_values() {
        let baseline = ScrollBaseline::new(Vec2::new(100.0, 50.0), 1.0);
        let viewport = Size::new(200.0, 150.0);
        let anchor = Point::new(20.0, 10.0);

        let out = anchored_offset(&baseline, 2.0, Some(anchor), viewport);
        assert!((out.x - 20.0).abs() < 1e-9);
        // 50 + (50 + 10 - 150) * 1
        assert!((out.y - -40.0).abs() < 1e-9);
    }

    #[test]
    fn anchor_stays_on_the_same_content_point() {
        let baseline = ScrollBaseline::new(Vec2::new(100.0, 50.0), 1.0);
        let viewport = Size::new(200.0, 150.0);
        let anchor = Point::new(20.0, 10.0);

        for new_scale in [0.25, 0.5, 1.5, 2.0, 7.0] {
            let out = anchored_offset(&baseline, new_scale, Some(anchor), viewport);
            let before_x = content_coord(100.0, anchor.x, viewport.width, 1.0);
            let after_x = content_coord(out.x, anchor.x, viewport.width, new_scale);
            let before_y = content_coord(50.0, anchor.y, viewport.height, 1.0);
            let after_y = content_coord(out.y, anchor.y, viewport.height, new_scale);
            assert!((before_x - after_x).abs() < 1e-9, "x drifted at {new_scale}");
            assert!((before_y - after_y).abs() < 1e-9, "y drifted at {new_scale}");
        }
    }

    #[test]
    fn missing_anchor_uses_viewport_center() {
        let baseline = ScrollBaseline::new(Vec2::new(300.0, 200.0), 2.0);
        let viewport = Size::new(400.0, 300.0);

        let centered = anchored_offset(&baseline, 3.0, None, viewport);
        let explicit =
            anchored_offset(&baseline, 3.0, Some(Point::new(200.0, 150.0)), viewport);
        assert_eq!(centered, explicit);
    }

    #[test]
    fn unchanged_scale_keeps_baseline_offset() {
        let baseline = ScrollBaseline::new(Vec2::new(12.0, 34.0), 1.5);
        let out = anchored_offset(
            &baseline,
            1.5,
            Some(Point::new(5.0, 5.0)),
            Size::new(80.0, 60.0),
        );
        assert_eq!(out, baseline.offset);
    }

    #[test]
    fn no_baseline_means_no_scroll() {
        let out = anchored_scroll(
            None,
            4.0,
            Some(Point::new(1.0, 1.0)),
            Size::new(10.0, 10.0),
        );
        assert!(out.is_none());
    }
}

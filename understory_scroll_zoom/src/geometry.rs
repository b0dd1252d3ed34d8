// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::position::AxisExtents;

/// Layout measurements of a scroll container, as reported by the host.
///
/// The host refreshes this whenever layout changes (for example from a
/// resize observer) and hands it to
/// [`crate::ViewportController::set_geometry`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Container rectangle in host coordinates. Its size is the visible
    /// (offset) size; its origin converts pointer positions to anchors.
    pub view_rect: Rect,
    /// Size of the scaled content box.
    pub content_size: Size,
    /// Leading padding before the content box on each axis.
    pub content_start: Size,
    /// Total scrollable size (scroll width/height).
    pub scroll_size: Size,
}

impl ViewportGeometry {
    /// Visible size of the container.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.view_rect.size()
    }

    /// Returns `true` once at least one axis has a non-empty visible extent.
    ///
    /// Use [`AxisExtents::is_measured`] on [`horizontal`](Self::horizontal)
    /// or [`vertical`](Self::vertical) to check a single axis.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.horizontal().is_measured() || self.vertical().is_measured()
    }

    /// Horizontal extents, for resolving `left`.
    #[must_use]
    pub fn horizontal(&self) -> AxisExtents {
        AxisExtents {
            viewport: self.view_rect.width(),
            content: self.content_size.width,
            content_start: self.content_start.width,
            scroll: self.scroll_size.width,
        }
    }

    /// Vertical extents, for resolving `top`.
    #[must_use]
    pub fn vertical(&self) -> AxisExtents {
        AxisExtents {
            viewport: self.view_rect.height(),
            content: self.content_size.height,
            content_start: self.content_start.height,
            scroll: self.scroll_size.height,
        }
    }

    /// Converts a host-space point into viewport-local coordinates.
    #[must_use]
    pub fn to_local(&self, pt: Point) -> Point {
        pt - self.view_rect.origin().to_vec2()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::anchor::{ScrollBaseline, anchored_scroll};
use crate::config::{ScaleMode, ViewportConfig, WheelConfig};
use crate::geometry::ViewportGeometry;
use crate::gesture::{GestureState, GestureTransition, Modifiers, WheelGestureTracker};
use crate::limits::ScaleLimits;
use crate::position::{ScrollPosition, resolve_position};

/// A requested scale, possibly relative to the current one.
#[derive(Clone)]
pub enum ScaleRequest {
    /// An absolute scale.
    To(f64),
    /// An additive step from the current scale.
    By(f64),
    /// A function of the current scale.
    Map(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl ScaleRequest {
    /// Wraps a function of the current scale.
    pub fn map(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Map(Arc::new(f))
    }

    /// Resolves the request against `current`, without clamping.
    #[must_use]
    pub fn resolve(&self, current: f64) -> f64 {
        match self {
            Self::To(scale) => *scale,
            Self::By(step) => current + step,
            Self::Map(f) => f(current),
        }
    }
}

impl From<f64> for ScaleRequest {
    fn from(scale: f64) -> Self {
        Self::To(scale)
    }
}

impl fmt::Debug for ScaleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::To(v) => f.debug_tuple("To").field(v).finish(),
            Self::By(v) => f.debug_tuple("By").field(v).finish(),
            Self::Map(_) => f.write_str("Map(..)"),
        }
    }
}

/// A clamp-adjusted scale update handed to whoever owns the scale.
///
/// In [`ScaleMode::Controlled`] the owner applies this to its own value and
/// reports the result back with
/// [`ViewportController::set_controlled_scale`].
#[derive(Clone, Debug)]
pub struct ScaleUpdater {
    request: ScaleRequest,
    limits: ScaleLimits,
}

impl ScaleUpdater {
    /// The unclamped request.
    #[must_use]
    pub fn request(&self) -> &ScaleRequest {
        &self.request
    }

    /// Computes the clamped scale that follows `current`.
    #[must_use]
    pub fn apply(&self, current: f64) -> f64 {
        self.limits.clamp(self.request.resolve(current))
    }
}

/// Scroll offsets for the host to apply; `None` leaves an axis unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollCommand {
    /// Horizontal scroll offset.
    pub left: Option<f64>,
    /// Vertical scroll offset.
    pub top: Option<f64>,
}

impl ScrollCommand {
    /// Returns `true` if neither axis moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }

    /// Applies the command on top of `offset`.
    #[must_use]
    pub fn apply_to(&self, offset: Vec2) -> Vec2 {
        Vec2::new(self.left.unwrap_or(offset.x), self.top.unwrap_or(offset.y))
    }
}

/// A symbolic scroll request for both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTarget {
    /// Horizontal target.
    pub left: Option<ScrollPosition>,
    /// Vertical target.
    pub top: Option<ScrollPosition>,
}

impl ScrollTarget {
    /// Creates a target from per-axis positions.
    #[must_use]
    pub fn new(left: Option<ScrollPosition>, top: Option<ScrollPosition>) -> Self {
        Self { left, top }
    }

    /// Parses per-axis text; an axis that fails to parse is left unchanged.
    #[must_use]
    pub fn parse(left: Option<&str>, top: Option<&str>) -> Self {
        Self {
            left: left.and_then(|s| s.parse().ok()),
            top: top.and_then(|s| s.parse().ok()),
        }
    }
}

/// A wheel event delivered to the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position in host coordinates.
    pub position: Point,
    /// Vertical wheel delta; positive scrolls down.
    pub delta_y: f64,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

/// Side effects for the host to carry out, in order.
#[derive(Clone, Debug)]
pub enum ViewportEffect {
    /// Set the container's scroll offsets.
    ScrollTo(ScrollCommand),
    /// A scale change was requested; forwarded to the scale observer.
    ScaleRequested(ScaleUpdater),
    /// The wheel event was taken as a zoom step; suppress native handling.
    ConsumeWheel,
}

/// Effects produced by one controller call.
pub type Effects = SmallVec<[ViewportEffect; 3]>;

/// Scale and scroll coordinator for one scroll container.
///
/// The controller owns the committed scale, the wheel gesture state, and the
/// scroll baseline of the current gesture. It never touches the host
/// directly: every call returns the scroll commands and notifications the
/// host should apply.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_scroll_zoom::{
///     ScaleRequest, ViewportConfig, ViewportController, ViewportEffect, ViewportGeometry,
/// };
///
/// let mut viewport = ViewportController::new(ViewportConfig::default());
/// viewport.set_geometry(ViewportGeometry {
///     view_rect: Rect::new(0.0, 0.0, 200.0, 150.0),
///     content_size: Size::new(200.0, 150.0),
///     content_start: Size::new(200.0, 150.0),
///     scroll_size: Size::new(600.0, 450.0),
/// });
///
/// let effects = viewport.scale_to(ScaleRequest::To(2.0), Some(Point::new(20.0, 10.0)));
/// assert_eq!(viewport.scale(), 2.0);
/// assert!(effects.iter().any(|e| matches!(e, ViewportEffect::ScrollTo(_))));
/// ```
#[derive(Clone, Debug)]
pub struct ViewportController {
    limits: ScaleLimits,
    mode: ScaleMode,
    wheel: WheelConfig,
    scale: f64,
    scroll_offset: Vec2,
    geometry: Option<ViewportGeometry>,
    gesture: WheelGestureTracker,
    baseline: Option<ScrollBaseline>,
    pending_anchor: Option<Point>,
}

impl ViewportController {
    /// Creates a controller; the scale mode is fixed from `config.scale`.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            limits: config.limits(),
            mode: config.mode(),
            wheel: config.wheel,
            scale: config.initial_scale(),
            scroll_offset: Vec2::ZERO,
            geometry: None,
            gesture: WheelGestureTracker::new(),
            baseline: None,
            pending_anchor: None,
        }
    }

    /// Current committed scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale bounds.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Who owns the scale value.
    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Wheel gesture state.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    /// Baseline of the current gesture, if one was captured.
    #[must_use]
    pub fn baseline(&self) -> Option<ScrollBaseline> {
        self.baseline
    }

    /// Last known scroll offset: host-reported or most recently commanded.
    #[must_use]
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    /// Last reported geometry.
    #[must_use]
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        self.geometry
    }

    /// Wheel settings.
    #[must_use]
    pub fn wheel_config(&self) -> WheelConfig {
        self.wheel
    }

    /// Records new layout measurements.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = Some(geometry);
    }

    /// Records the scroll offset reported by the host.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_offset = offset;
    }

    /// Replaces the wheel settings. Disabling wheel zoom ends any active
    /// gesture.
    pub fn set_wheel_config(&mut self, wheel: WheelConfig) {
        self.wheel = wheel;
        if !wheel.enabled {
            self.scale_ended();
        }
    }

    /// Returns `true` while the host should deliver pointer moves.
    #[must_use]
    pub fn tracks_pointer_moves(&self) -> bool {
        self.wheel.enabled
    }

    /// Requests a new scale, anchored at `anchor` (viewport-local pixels) or
    /// at the viewport center.
    ///
    /// The scale observer is always notified with the clamp-adjusted
    /// updater. When the controller owns the scale it also commits the
    /// result and, if it moved, returns the anchored scroll command.
    pub fn scale_to(&mut self, request: ScaleRequest, anchor: Option<Point>) -> Effects {
        let updater = ScaleUpdater {
            request,
            limits: self.limits,
        };
        let target = updater.apply(self.scale);
        self.pending_anchor = anchor;

        let mut effects = Effects::new();
        effects.push(ViewportEffect::ScaleRequested(updater));
        if self.mode == ScaleMode::Uncontrolled
            && let Some(cmd) = self.commit(target)
        {
            effects.push(ViewportEffect::ScrollTo(cmd));
        }
        effects
    }

    /// Adopts an externally owned scale value.
    ///
    /// Only meaningful in [`ScaleMode::Controlled`]; the value is clamped
    /// and committed through the same baseline and anchoring path as an
    /// internal change.
    pub fn set_controlled_scale(&mut self, scale: f64) -> Option<ScrollCommand> {
        if self.mode != ScaleMode::Controlled {
            sz_debug!(scale, "ignoring controlled scale on a self-managed viewport");
            return None;
        }
        let scale = self.limits.clamp(scale);
        self.commit(scale)
    }

    /// Ends the current gesture and drops its baseline. Scroll already
    /// applied is kept.
    pub fn scale_ended(&mut self) {
        self.gesture.end();
        self.clear_baseline();
    }

    /// Resolves `target` against the current geometry.
    ///
    /// Returns `None` when nothing would move, including when the container
    /// has not been measured yet. An axis with no visible extent is left
    /// unchanged.
    pub fn scroll_to(&mut self, target: ScrollTarget) -> Option<ScrollCommand> {
        let Some(geometry) = self.measured_geometry() else {
            sz_trace!(request = ?target, "scroll request before geometry is known");
            return None;
        };
        let (h, v) = (geometry.horizontal(), geometry.vertical());
        let cmd = ScrollCommand {
            left: resolve_position(target.left.filter(|_| h.is_measured()), &h),
            top: resolve_position(target.top.filter(|_| v.is_measured()), &v),
        };
        if cmd.is_empty() {
            return None;
        }
        self.scroll_offset = cmd.apply_to(self.scroll_offset);
        Some(cmd)
    }

    /// Handles a wheel event on the container.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> Effects {
        if !self.wheel.enabled {
            return Effects::new();
        }
        let transition = self.gesture.on_wheel(event.modifiers);
        if matches!(transition, GestureTransition::Began | GestureTransition::Ended) {
            self.clear_baseline();
        }
        if !transition.is_zoom_step() {
            return Effects::new();
        }

        let anchor = self.geometry.map(|g| g.to_local(event.position));
        let step = self.wheel.scale_step(event.delta_y);
        let mut effects = self.scale_to(ScaleRequest::By(step), anchor);
        effects.insert(0, ViewportEffect::ConsumeWheel);
        effects
    }

    /// Handles a pointer move anywhere on the application surface.
    ///
    /// Any movement during a zoom gesture ends it.
    pub fn on_pointer_move(&mut self) {
        if self.gesture.on_pointer_move() == GestureTransition::Ended {
            self.clear_baseline();
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scale: self.scale,
            limits: self.limits,
            mode: self.mode,
            gesture: self.gesture.state(),
            baseline: self.baseline,
            scroll_offset: self.scroll_offset,
            geometry: self.geometry,
            wheel: self.wheel,
        }
    }

    fn commit(&mut self, scale: f64) -> Option<ScrollCommand> {
        if (self.scale - scale).abs() < f64::EPSILON {
            return None;
        }
        if self.baseline.is_none() {
            sz_debug!(
                offset = ?self.scroll_offset,
                scale = self.scale,
                "capturing scroll baseline"
            );
            self.baseline = Some(ScrollBaseline::new(self.scroll_offset, self.scale));
        }
        let anchor = self.pending_anchor.take();
        sz_debug!(from = self.scale, to = scale, ?anchor, "committing scale");
        self.scale = scale;

        let Some(geometry) = self.measured_geometry() else {
            sz_trace!("skipping anchored scroll before geometry is known");
            return None;
        };
        let offset = anchored_scroll(
            self.baseline.as_ref(),
            self.scale,
            anchor,
            geometry.viewport_size(),
        )?;
        let cmd = ScrollCommand {
            left: geometry.horizontal().is_measured().then_some(offset.x),
            top: geometry.vertical().is_measured().then_some(offset.y),
        };
        sz_trace!(?cmd, "anchored scroll");
        self.scroll_offset = cmd.apply_to(self.scroll_offset);
        Some(cmd)
    }

    fn clear_baseline(&mut self) {
        let _cleared = self.baseline.take();
        sz_debug!(had_baseline = _cleared.is_some(), "cleared scroll baseline");
    }

    fn measured_geometry(&self) -> Option<ViewportGeometry> {
        self.geometry.filter(ViewportGeometry::is_measured)
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Committed scale.
    pub scale: f64,
    /// Scale bounds.
    pub limits: ScaleLimits,
    /// Scale ownership mode.
    pub mode: ScaleMode,
    /// Wheel gesture state.
    pub gesture: GestureState,
    /// Baseline of the current gesture.
    pub baseline: Option<ScrollBaseline>,
    /// Last known scroll offset.
    pub scroll_offset: Vec2,
    /// Last reported geometry.
    pub geometry: Option<ViewportGeometry>,
    /// Wheel settings.
    pub wheel: WheelConfig,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ScaleRequest, ScrollCommand, ScrollTarget, ViewportController, ViewportEffect};
    use crate::config::ViewportConfig;
    use crate::geometry::ViewportGeometry;
    use crate::position::ScrollPosition;

    fn geometry() -> ViewportGeometry {
        ViewportGeometry {
            view_rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            content_size: Size::new(300.0, 300.0),
            content_start: Size::new(50.0, 50.0),
            scroll_size: Size::new(500.0, 500.0),
        }
    }

    #[test]
    fn scale_request_variants_resolve() {
        assert_eq!(ScaleRequest::To(3.0).resolve(1.0), 3.0);
        assert_eq!(ScaleRequest::By(0.5).resolve(1.0), 1.5);
        assert_eq!(ScaleRequest::map(|s| s * 4.0).resolve(0.5), 2.0);
        assert_eq!(ScaleRequest::from(2.0).resolve(7.0), 2.0);
    }

    #[test]
    fn scroll_command_leaves_missing_axes() {
        let cmd = ScrollCommand {
            left: Some(5.0),
            top: None,
        };
        assert_eq!(cmd.apply_to(Vec2::new(1.0, 2.0)), Vec2::new(5.0, 2.0));
        assert!(ScrollCommand::default().is_empty());
    }

    #[test]
    fn scroll_target_parse_drops_bad_axes() {
        let target = ScrollTarget::parse(Some("center"), Some("oops%"));
        assert_eq!(target.left, Some(ScrollPosition::Center));
        assert_eq!(target.top, None);
    }

    #[test]
    fn unchanged_scale_only_notifies() {
        let mut vp = ViewportController::new(ViewportConfig::default());
        vp.set_geometry(geometry());
        let effects = vp.scale_to(ScaleRequest::To(1.0), None);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], ViewportEffect::ScaleRequested(_)));
        assert!(vp.baseline().is_none());
    }

    #[test]
    fn scale_without_geometry_commits_but_does_not_scroll() {
        let mut vp = ViewportController::new(ViewportConfig::default());
        let effects = vp.scale_to(ScaleRequest::To(2.0), Some(Point::new(10.0, 10.0)));
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(effects.len(), 1);
        assert!(vp.baseline().is_some());
        assert_eq!(vp.scroll_offset(), Vec2::ZERO);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = ViewportController::new(ViewportConfig::default());
        vp.set_geometry(geometry());
        vp.set_scroll_offset(Vec2::new(3.0, 4.0));
        let info = vp.debug_info();
        assert_eq!(info.scale, 1.0);
        assert_eq!(info.scroll_offset, Vec2::new(3.0, 4.0));
        assert_eq!(info.geometry, Some(geometry()));
        assert!(info.limits.min() <= info.limits.max());
    }
}

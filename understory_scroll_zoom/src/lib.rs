// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_zoom --heading-base-level=0

//! Understory Scroll Zoom: anchored zoom for scrollable viewports.
//!
//! This crate coordinates a content scale with the scroll offsets of a native
//! scroll container, so that zooming keeps a chosen point under the same
//! screen pixel. It focuses on:
//! - Scale bounds ([`ScaleLimits`]).
//! - Anchor-preserving scroll offsets across a scale change
//!   ([`anchored_offset`]).
//! - Symbolic scroll targets such as `"center"`, `"content-end"` or `"25%"`
//!   ([`ScrollPosition`], [`resolve_position`]).
//! - Telling a Ctrl/Meta wheel zoom gesture apart from ordinary scrolling
//!   ([`gesture::WheelGestureTracker`]).
//!
//! It does **not** own a scroll container, measure layout, or subscribe to
//! events. Callers are expected to:
//! - Report container measurements with
//!   [`ViewportController::set_geometry`] whenever layout changes.
//! - Forward wheel events and pointer moves from their event system.
//! - Carry out the returned [`ViewportEffect`]s: apply scroll commands,
//!   forward scale updates to whoever owns the scale, and suppress native
//!   handling of wheel events consumed as zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_scroll_zoom::{
//!     Modifiers, ScrollPosition, ScrollTarget, ViewportConfig, ViewportController,
//!     ViewportEffect, ViewportGeometry, WheelEvent,
//! };
//!
//! let mut viewport = ViewportController::new(ViewportConfig::default());
//! viewport.set_geometry(ViewportGeometry {
//!     view_rect: Rect::new(0.0, 0.0, 800.0, 600.0),
//!     content_size: Size::new(800.0, 600.0),
//!     content_start: Size::new(800.0, 600.0),
//!     scroll_size: Size::new(2400.0, 1800.0),
//! });
//!
//! // Center the content box.
//! let cmd = viewport
//!     .scroll_to(ScrollTarget::new(
//!         Some(ScrollPosition::Center),
//!         Some(ScrollPosition::Center),
//!     ))
//!     .unwrap();
//! assert_eq!(cmd.left, Some(800.0));
//!
//! // Ctrl + wheel up zooms in around the cursor.
//! let effects = viewport.on_wheel(&WheelEvent {
//!     position: Point::new(400.0, 300.0),
//!     delta_y: -4.0,
//!     modifiers: Modifiers::CTRL,
//! });
//! assert!((viewport.scale() - 1.2).abs() < 1e-9);
//! assert!(matches!(effects[0], ViewportEffect::ConsumeWheel));
//!
//! // Moving the pointer ends the gesture.
//! viewport.on_pointer_move();
//! assert!(viewport.baseline().is_none());
//! ```
//!
//! ## Controlled scale
//!
//! When [`ViewportConfig::scale`] is set, the scale belongs to the caller.
//! [`ViewportController::scale_to`] then only emits
//! [`ViewportEffect::ScaleRequested`]; the owner applies the
//! [`ScaleUpdater`] and reports the new value through
//! [`ViewportController::set_controlled_scale`], which runs the same
//! baseline and anchoring logic.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and positions.
//! - `tracing`: emit `tracing` events for gesture transitions, baseline
//!   capture, and anchored scroll updates.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod anchor;
mod config;
mod controller;
mod geometry;
pub mod gesture;
mod limits;
mod position;

pub use anchor::{ScrollBaseline, anchored_offset, anchored_scroll};
pub use config::{ScaleMode, ViewportConfig, WheelConfig};
pub use controller::{
    Effects, ScaleRequest, ScaleUpdater, ScrollCommand, ScrollTarget, ViewportController,
    ViewportDebugInfo, ViewportEffect, WheelEvent,
};
pub use geometry::ViewportGeometry;
pub use gesture::{GestureState, GestureTransition, Modifiers, WheelGestureTracker};
pub use limits::ScaleLimits;
pub use position::{
    AxisExtents, ParsePositionError, ScrollPosition, resolve_position, resolve_position_str,
};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel gesture tracking: decides when wheel ticks belong to one zoom gesture.
//!
//! ## Usage
//!
//! 1) Feed every wheel event to [`WheelGestureTracker::on_wheel`] along with
//!    whether a zoom modifier (Ctrl or Meta) was held.
//! 2) Feed pointer moves to [`WheelGestureTracker::on_pointer_move`].
//! 3) React to the returned [`GestureTransition`]: clear the scroll baseline
//!    on [`GestureTransition::Began`] and [`GestureTransition::Ended`], apply
//!    a scale step on `Began` and `Continued`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_scroll_zoom::gesture::{GestureTransition, Modifiers, WheelGestureTracker};
//!
//! let mut tracker = WheelGestureTracker::default();
//!
//! assert_eq!(tracker.on_wheel(Modifiers::CTRL), GestureTransition::Began);
//! assert_eq!(tracker.on_wheel(Modifiers::CTRL), GestureTransition::Continued);
//! assert!(tracker.is_zooming());
//!
//! // Any pointer movement ends the gesture.
//! assert_eq!(tracker.on_pointer_move(), GestureTransition::Ended);
//! assert!(!tracker.is_zooming());
//! ```

bitflags::bitflags! {
    /// Keyboard modifiers held during a wheel event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CTRL  = 0b0000_0001;
        /// Meta / Command key.
        const META  = 0b0000_0010;
        /// Shift key.
        const SHIFT = 0b0000_0100;
        /// Alt / Option key.
        const ALT   = 0b0000_1000;
    }
}

impl Modifiers {
    /// Modifiers that turn a wheel event into a zoom step.
    pub const ZOOM: Self = Self::CTRL.union(Self::META);

    /// Returns `true` if a zoom modifier is held.
    #[must_use]
    pub fn is_zoom(self) -> bool {
        self.intersects(Self::ZOOM)
    }
}

/// Whether a zoom gesture is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No zoom gesture; the next zoom step captures a fresh baseline.
    #[default]
    Idle,
    /// Zoom wheel ticks are arriving; they share one baseline.
    ActiveZoom,
}

/// Input to the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureInput {
    /// A wheel event; `zoom` is `true` when a zoom modifier was held.
    Wheel {
        /// A zoom modifier was held.
        zoom: bool,
    },
    /// The pointer moved anywhere on the application surface.
    PointerMove,
    /// The gesture was ended explicitly.
    End,
}

/// Outcome of feeding one input to the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureTransition {
    /// `Idle -> ActiveZoom`: drop any stale baseline, then zoom.
    Began,
    /// `ActiveZoom -> ActiveZoom`: zoom, reusing the baseline.
    Continued,
    /// `ActiveZoom -> Idle`: clear the baseline.
    Ended,
    /// `Idle -> Idle`: nothing to do.
    Ignored,
}

impl GestureTransition {
    /// Returns `true` if this transition carries a zoom step.
    #[must_use]
    pub fn is_zoom_step(self) -> bool {
        matches!(self, Self::Began | Self::Continued)
    }
}

impl GestureState {
    /// Computes the next state for `input`.
    #[must_use]
    pub fn next(self, input: GestureInput) -> (Self, GestureTransition) {
        match (self, input) {
            (Self::Idle, GestureInput::Wheel { zoom: true }) => {
                (Self::ActiveZoom, GestureTransition::Began)
            }
            (Self::ActiveZoom, GestureInput::Wheel { zoom: true }) => {
                (Self::ActiveZoom, GestureTransition::Continued)
            }
            (
                Self::ActiveZoom,
                GestureInput::Wheel { zoom: false } | GestureInput::PointerMove | GestureInput::End,
            ) => (Self::Idle, GestureTransition::Ended),
            (Self::Idle, _) => (Self::Idle, GestureTransition::Ignored),
        }
    }
}

/// Tracks the zoom gesture state across wheel and pointer-move events.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelGestureTracker {
    state: GestureState,
}

impl WheelGestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while a zoom gesture is active.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.state == GestureState::ActiveZoom
    }

    /// Feeds a wheel event with the modifiers held at the time.
    pub fn on_wheel(&mut self, modifiers: Modifiers) -> GestureTransition {
        self.apply(GestureInput::Wheel {
            zoom: modifiers.is_zoom(),
        })
    }

    /// Feeds a pointer move.
    pub fn on_pointer_move(&mut self) -> GestureTransition {
        self.apply(GestureInput::PointerMove)
    }

    /// Ends any active gesture.
    pub fn end(&mut self) -> GestureTransition {
        self.apply(GestureInput::End)
    }

    fn apply(&mut self, input: GestureInput) -> GestureTransition {
        let (next, transition) = self.state.next(input);
        if next != self.state {
            sz_debug!(?input, from = ?self.state, to = ?next, "wheel gesture transition");
        }
        self.state = next;
        transition
    }
}

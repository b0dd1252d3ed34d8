// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic scroll positions and their resolution to pixel offsets.
//!
//! A [`ScrollPosition`] names a target along one axis: a raw offset, an edge
//! of the scrollable range, its center, an edge of the content box, or a
//! percentage of the scrollable extent. [`resolve_position`] turns it into a
//! pixel offset against that axis' [`AxisExtents`].
//!
//! ```
//! use understory_scroll_zoom::{AxisExtents, ScrollPosition, resolve_position};
//!
//! let axis = AxisExtents {
//!     viewport: 100.0,
//!     content: 300.0,
//!     content_start: 50.0,
//!     scroll: 500.0,
//! };
//! let pos: ScrollPosition = "content-end".parse().unwrap();
//! assert_eq!(resolve_position(Some(pos), &axis), Some(250.0));
//! assert_eq!(resolve_position(None, &axis), None);
//! ```

use core::fmt;
use core::str::FromStr;

/// Extents of one scroll axis, all in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisExtents {
    /// Visible extent of the scroll container (offset width/height).
    pub viewport: f64,
    /// Extent of the scaled content box.
    pub content: f64,
    /// Leading padding placed before the content box.
    pub content_start: f64,
    /// Total scrollable extent (scroll width/height).
    pub scroll: f64,
}

impl AxisExtents {
    /// Returns `true` once the container has a non-empty visible extent on
    /// this axis.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.viewport > 0.0
    }
}

/// A scroll target along a single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPosition {
    /// An absolute pixel offset, used as is.
    Offset(f64),
    /// The start of the scrollable range (`0`).
    Start,
    /// The end of the scrollable range.
    End,
    /// The middle of the scrollable range.
    Center,
    /// The leading edge of the content box.
    ContentStart,
    /// Aligns the trailing edge of the content box with the viewport's end.
    ContentEnd,
    /// A percentage of the total scrollable extent.
    Percent(f64),
}

impl ScrollPosition {
    /// Resolves this position to a pixel offset along `axis`.
    #[must_use]
    pub fn resolve(self, axis: &AxisExtents) -> f64 {
        match self {
            Self::Offset(px) => px,
            Self::Start => 0.0,
            Self::End => axis.scroll - axis.viewport,
            Self::Center => (axis.scroll - axis.viewport) / 2.0,
            Self::ContentStart => axis.content_start,
            Self::ContentEnd => axis.content_start + axis.content - axis.viewport,
            Self::Percent(percent) => percent / 100.0 * axis.scroll,
        }
    }
}

impl From<f64> for ScrollPosition {
    fn from(px: f64) -> Self {
        Self::Offset(px)
    }
}

/// Resolves an optional position along `axis`.
///
/// `None` means "leave this axis where it is" and stays `None`.
#[must_use]
pub fn resolve_position(pos: Option<ScrollPosition>, axis: &AxisExtents) -> Option<f64> {
    pos.map(|p| p.resolve(axis))
}

/// Parses and resolves a textual position along `axis`.
///
/// Text that does not follow the position grammar (for example `"bogus%"`)
/// resolves to `None` rather than failing.
#[must_use]
pub fn resolve_position_str(text: &str, axis: &AxisExtents) -> Option<f64> {
    match text.parse::<ScrollPosition>() {
        Ok(pos) => Some(pos.resolve(axis)),
        Err(_err) => {
            sz_trace!(text, error = %_err, "ignoring unparsable scroll position");
            None
        }
    }
}

/// Error returned when text does not match the scroll position grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsePositionError {
    /// The input was empty or only whitespace.
    Empty,
    /// A `%` suffix was present but the rest was not a finite number.
    InvalidPercent,
    /// The input was neither a keyword, a percentage, nor a number.
    Unrecognized,
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty scroll position",
            Self::InvalidPercent => "percentage scroll position is not a finite number",
            Self::Unrecognized => "unrecognized scroll position",
        })
    }
}

impl core::error::Error for ParsePositionError {}

impl FromStr for ScrollPosition {
    type Err = ParsePositionError;

    /// Parses `start`, `end`, `center`, `content-start`, `content-end`,
    /// `<number>%`, or a bare `<number>` pixel offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(ParsePositionError::Empty),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "center" => Ok(Self::Center),
            "content-start" => Ok(Self::ContentStart),
            "content-end" => Ok(Self::ContentEnd),
            _ => {
                if let Some(number) = s.strip_suffix('%') {
                    return parse_finite(number)
                        .map(Self::Percent)
                        .ok_or(ParsePositionError::InvalidPercent);
                }
                parse_finite(s)
                    .map(Self::Offset)
                    .ok_or(ParsePositionError::Unrecognized)
            }
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(px) => write!(f, "{px}"),
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
            Self::Center => f.write_str("center"),
            Self::ContentStart => f.write_str("content-start"),
            Self::ContentEnd => f.write_str("content-end"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

// Positions travel as plain numbers or as their textual form.
#[cfg(feature = "serde")]
impl serde::Serialize for ScrollPosition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Offset(px) => serializer.serialize_f64(px),
            _ => serializer.collect_str(self),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScrollPosition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl serde::de::Visitor<'_> for PositionVisitor {
            type Value = ScrollPosition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pixel offset, a position keyword, or a percentage string")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScrollPosition::Offset(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScrollPosition::Offset(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScrollPosition::Offset(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PositionVisitor)
    }
}

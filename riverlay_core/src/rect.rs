// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned integer rectangles.

use core::fmt;

/// A view placement, relative to the output's usable-area origin.
///
/// The origin is top-left. Position is signed because that is what
/// `push_view_dimensions` carries on the wire; partitioners only ever produce
/// non-negative coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from signed position and unsigned extent.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from unsigned partitioner coordinates.
    ///
    /// Coordinates beyond `i32::MAX` saturate; no real output is that large.
    #[must_use]
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x: i32::try_from(x).unwrap_or(i32::MAX),
            y: i32::try_from(y).unwrap_or(i32::MAX),
            width,
            height,
        }
    }

    /// Area in square pixels.
    #[inline]
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// Extents saturate at zero.
    #[must_use]
    pub fn inset(self, amount: u32) -> Self {
        let offset = i32::try_from(amount).unwrap_or(i32::MAX);
        Self {
            x: self.x.saturating_add(offset),
            y: self.y.saturating_add(offset),
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }

    /// Moves the rectangle by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Formats as the four space-separated integers `x y width height`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

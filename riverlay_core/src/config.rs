// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-output layout parameters.
//!
//! [`LayoutConfig`] selects a partitioner and carries the parameters the
//! partitioners and the padding pass need. Every output starts from a copy of
//! the client-wide defaults and may diverge through
//! [user commands](crate::command).

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::partition::{main_stack, spiral};
use crate::rect::Rect;

/// Smallest main factor the client accepts.
pub const MAIN_FACTOR_MIN: f64 = 0.1;

/// Largest main factor the client accepts.
pub const MAIN_FACTOR_MAX: f64 = 0.9;

/// Which partitioner to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    /// Main column plus a secondary stack (see [`main_stack`]).
    #[default]
    MainStack,
    /// Recursive halving (see [`spiral`]).
    Spiral,
}

impl LayoutKind {
    /// User-facing name, also accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MainStack => "tile",
            Self::Spiral => "spiral",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known [`LayoutKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}` (expected `tile` or `spiral`)")]
pub struct ParseLayoutKindError(pub alloc::string::String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tile" | "main-stack" => Ok(Self::MainStack),
            "spiral" => Ok(Self::Spiral),
            other => Err(ParseLayoutKindError(other.into())),
        }
    }
}

/// Layout parameters for one output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Partitioner to run.
    pub kind: LayoutKind,
    /// Number of views in the main column (main/stack only).
    pub main_count: u32,
    /// Share of the width given to the main column (main/stack only).
    ///
    /// Clamped to [`MAIN_FACTOR_MIN`]`..=`[`MAIN_FACTOR_MAX`] when generating.
    pub main_factor: f64,
    /// Gap around every view, in pixels.
    pub view_padding: u32,
    /// Gap between the usable area's edge and the views, in pixels.
    pub outer_padding: u32,
}

impl LayoutConfig {
    /// Main/stack defaults: one main view taking 60% of the width.
    #[must_use]
    pub const fn tile() -> Self {
        Self {
            kind: LayoutKind::MainStack,
            main_count: 1,
            main_factor: 0.6,
            view_padding: 0,
            outer_padding: 0,
        }
    }

    /// Spiral defaults.
    #[must_use]
    pub const fn spiral() -> Self {
        Self {
            kind: LayoutKind::Spiral,
            ..Self::tile()
        }
    }

    /// Computes one rectangle per view for a `width × height` usable area.
    ///
    /// The outer padding shrinks the area before partitioning; each resulting
    /// rectangle is then inset by the view padding. The returned length is
    /// always `view_count`, no matter how much padding eats into the area.
    #[must_use]
    pub fn generate(&self, view_count: u32, width: u32, height: u32) -> Vec<Rect> {
        let outer = self.outer_padding;
        let width = width.saturating_sub(outer.saturating_mul(2));
        let height = height.saturating_sub(outer.saturating_mul(2));

        let rects = match self.kind {
            LayoutKind::MainStack => main_stack(
                view_count,
                self.main_count,
                self.main_factor.clamp(MAIN_FACTOR_MIN, MAIN_FACTOR_MAX),
                width,
                height,
            ),
            LayoutKind::Spiral => spiral(view_count, width, height),
        };

        let offset = i32::try_from(outer).unwrap_or(i32::MAX);
        rects
            .into_iter()
            .map(|rect| rect.inset(self.view_padding).translate(offset, offset))
            .collect()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::tile()
    }
}

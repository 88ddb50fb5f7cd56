// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle partitioners.
//!
//! A partitioner turns a view count and a usable area into an ordered list of
//! [`Rect`](crate::rect::Rect)s, one per view. The order is significant: the
//! compositor correlates the n-th pushed rectangle with the n-th view in its
//! stacking order.
//!
//! Both strategies return exactly `view_count` rectangles for every input,
//! including zero-sized areas.
//!
//! - [`spiral`]: recursive halving with alternating split axis, producing a
//!   pinwheel subdivision.
//! - [`main_stack`]: a main column and a secondary column, each divided into
//!   equal-height rows.

mod main_stack;
mod spiral;

pub use main_stack::main_stack;
pub use spiral::spiral;

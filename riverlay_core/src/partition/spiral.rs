// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive halving ("spiral") partitioner.

use alloc::vec::Vec;

use crate::rect::Rect;

/// Partitions `width × height` by repeatedly halving the remaining region.
///
/// Step `i` (for every view but the last) splits vertically when `i` is even
/// and horizontally when `i` is odd. Steps with `i % 4 == 2` and
/// `i % 4 == 3` emit the far half and keep the cursor in place; all other
/// steps emit the near half and advance the cursor past it. The last view
/// takes whatever remains, which produces the pinwheel.
///
/// Halving truncates. The truncated pixel is not redistributed, so odd
/// extents can leave a one pixel gap along the edge.
#[must_use]
pub fn spiral(view_count: u32, width: u32, height: u32) -> Vec<Rect> {
    if view_count == 0 {
        return Vec::new();
    }

    let mut rects = Vec::with_capacity(view_count as usize);
    let (mut x, mut y) = (0_u32, 0_u32);
    let (mut w, mut h) = (width, height);

    for i in 0..view_count - 1 {
        if i % 2 == 0 {
            w /= 2;
            if i % 4 == 2 {
                rects.push(Rect::from_origin(x + w, y, w, h));
            } else {
                rects.push(Rect::from_origin(x, y, w, h));
                x += w;
            }
        } else {
            h /= 2;
            if i % 4 == 3 {
                rects.push(Rect::from_origin(x, y + h, w, h));
            } else {
                rects.push(Rect::from_origin(x, y, w, h));
                y += h;
            }
        }
    }
    rects.push(Rect::from_origin(x, y, w, h));

    rects
}

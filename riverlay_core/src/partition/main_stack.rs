// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main/stack partitioner.

use alloc::vec::Vec;

use crate::rect::Rect;

/// Partitions `width × height` into a main column and a secondary column.
///
/// The first `main_count` views stack top to bottom in the main column, the
/// rest in the secondary column to its right. When both columns are occupied
/// the main column is `floor(main_factor * width)` wide; when only one is
/// occupied it takes the full width.
///
/// Within a column every view gets `height / count` rows. The remainder of
/// that division goes to the first view of the column, so the heights of a
/// column always sum to `height`.
///
/// `main_count` larger than `view_count` behaves like `view_count`. A factor
/// outside `0.0..=1.0` is not clamped here, but the resulting main width is
/// kept within `0..=width`.
#[must_use]
pub fn main_stack(
    view_count: u32,
    main_count: u32,
    main_factor: f64,
    width: u32,
    height: u32,
) -> Vec<Rect> {
    let main_count = main_count.min(view_count);
    let secondary_count = view_count - main_count;

    let main_width = match (main_count > 0, secondary_count > 0) {
        (true, true) => split_width(main_factor, width),
        (true, false) => width,
        (false, true) => 0,
        (false, false) => return Vec::new(),
    };
    let secondary_width = width - main_width;

    let mut rects = Vec::with_capacity(view_count as usize);
    push_column(&mut rects, 0, main_width, main_count, height);
    push_column(&mut rects, main_width, secondary_width, secondary_count, height);
    rects
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the cast floors the product and saturates it into u32 range"
)]
fn split_width(main_factor: f64, width: u32) -> u32 {
    // The cast truncates toward zero, which floors any non-negative product.
    // NaN and negative factors saturate to 0.
    ((main_factor * f64::from(width)) as u32).min(width)
}

fn push_column(rects: &mut Vec<Rect>, x: u32, width: u32, count: u32, height: u32) {
    if count == 0 {
        return;
    }

    let row = height / count;
    let remainder = height % count;
    for i in 0..count {
        let (y, h) = if i == 0 {
            (0, row + remainder)
        } else {
            (i * row + remainder, row)
        };
        rects.push(Rect::from_origin(x, y, width, h));
    }
}

#[cfg(test)]
mod tests {
    use super::{main_stack, split_width};
    use crate::rect::Rect;

    #[test]
    fn one_main_three_secondary() {
        assert_eq!(
            main_stack(4, 1, 0.6, 1000, 900),
            [
                Rect::new(0, 0, 600, 900),
                Rect::new(600, 0, 400, 300),
                Rect::new(600, 300, 400, 300),
                Rect::new(600, 600, 400, 300),
            ]
        );
    }

    #[test]
    fn zero_views_yield_nothing() {
        assert!(main_stack(0, 1, 0.6, 1000, 900).is_empty());
        assert!(main_stack(0, 0, 0.6, 1000, 900).is_empty());
    }

    #[test]
    fn no_main_views_use_full_width_stack() {
        assert_eq!(
            main_stack(2, 0, 0.6, 1000, 900),
            [Rect::new(0, 0, 1000, 450), Rect::new(0, 450, 1000, 450)]
        );
    }

    #[test]
    fn only_main_views_use_full_width() {
        assert_eq!(
            main_stack(2, 2, 0.6, 1000, 900),
            [Rect::new(0, 0, 1000, 450), Rect::new(0, 450, 1000, 450)]
        );
    }

    #[test]
    fn main_count_beyond_view_count_fills_the_column() {
        assert_eq!(
            main_stack(2, 5, 0.6, 1000, 900),
            [Rect::new(0, 0, 1000, 450), Rect::new(0, 450, 1000, 450)]
        );
    }

    #[test]
    fn remainder_goes_to_first_view_of_each_column() {
        assert_eq!(
            main_stack(5, 2, 0.5, 100, 10),
            [
                Rect::new(0, 0, 50, 5),
                Rect::new(0, 5, 50, 5),
                Rect::new(50, 0, 50, 4),
                Rect::new(50, 4, 50, 3),
                Rect::new(50, 7, 50, 3),
            ]
        );
    }

    #[test]
    fn main_width_is_floored() {
        let rects = main_stack(2, 1, 0.333, 1000, 10);
        assert_eq!(rects[0].width, 333);
        assert_eq!(rects[1].width, 667);
        assert_eq!(rects[1].x, 333);
    }

    #[test]
    fn split_width_rounds_down() {
        assert_eq!(split_width(0.999, 1000), 999);
        assert_eq!(split_width(0.6, 1000), 600);
        assert_eq!(split_width(0.0, 1000), 0);
        assert_eq!(split_width(f64::NAN, 1000), 0);
    }

    #[test]
    fn out_of_range_factor_keeps_columns_within_width() {
        let wide = main_stack(2, 1, 1.5, 1000, 10);
        assert_eq!((wide[0].width, wide[1].width), (1000, 0));

        let negative = main_stack(2, 1, -0.5, 1000, 10);
        assert_eq!((negative[0].width, negative[1].width), (0, 1000));
    }

    #[test]
    fn returns_exactly_view_count_rects() {
        for view_count in 0..16 {
            for main_count in 0..=view_count + 1 {
                assert_eq!(
                    main_stack(view_count, main_count, 0.55, 1366, 768).len(),
                    view_count as usize,
                    "view_count={view_count} main_count={main_count}"
                );
            }
        }
    }

    #[test]
    fn column_heights_sum_to_output_height() {
        for view_count in 1..16 {
            for main_count in 0..=view_count {
                for height in [0, 1, 7, 768, 1081] {
                    let rects = main_stack(view_count, main_count, 0.6, 1000, height);
                    let (main, secondary) = rects.split_at(main_count as usize);
                    for column in [main, secondary] {
                        if column.is_empty() {
                            continue;
                        }
                        let sum: u32 = column.iter().map(|rect| rect.height).sum();
                        assert_eq!(
                            sum, height,
                            "view_count={view_count} main_count={main_count}"
                        );
                        let last = column[column.len() - 1];
                        assert_eq!(
                            u32::try_from(last.y).unwrap() + last.height,
                            height,
                            "last view reaches the bottom edge"
                        );
                    }
                }
            }
        }
    }
}

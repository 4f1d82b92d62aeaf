// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial-fill compositing of the two-layer star.
//!
//! A partially filled star is drawn as two regions, back to front:
//!
//! 1. the **fill**: the inner region ([`inner_star`]) clipped to the leftmost
//!    `fraction` of the cell, painted with the inner brush;
//! 2. the **rim**: `outer_star − inner_star`, painted with the outer brush and
//!    always fully visible.
//!
//! Kurbo has no path boolean operations, so the subtraction is expressed the
//! way renderers consume it: both outlines in one path, filled with the
//! even-odd rule. The clip is a plain axis-aligned rectangle.
//!
//! The inner brush only ever covers the cavity. Nothing is painted under the
//! rim, so a translucent outer brush shows whatever lies behind the star.

use kurbo::{BezPath, Rect};
use peniko::{Brush, Fill};

use crate::outline::{inner_star, outer_star};

/// Clamps a fill fraction into `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// The leftmost `fraction` of `rect`, full height.
#[must_use]
pub fn horizontal_clip(rect: Rect, fraction: f64) -> Rect {
    let rect = rect.abs();
    let width = clamp_fraction(fraction) * rect.width();
    Rect::new(rect.x0, rect.y0, rect.x0 + width, rect.y1)
}

/// The star's rim: outer and inner outlines in a single path.
///
/// Fill it with [`Fill::EvenOdd`] to leave the cavity empty.
#[must_use]
pub fn rim_outline(rect: Rect) -> BezPath {
    let mut path = outer_star(rect);
    for el in inner_star(rect).elements() {
        path.push(*el);
    }
    path
}

/// A path painted with a brush, optionally restricted to a clip rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct FilledRegion {
    /// Outline to fill.
    pub path: BezPath,
    /// Fill rule for `path`.
    pub fill_rule: Fill,
    /// Paint for the covered area.
    pub brush: Brush,
    /// Only the part of `path` inside this rectangle is painted.
    pub clip: Option<Rect>,
}

impl FilledRegion {
    /// Returns `true` if the clip leaves nothing of the path visible.
    #[must_use]
    pub fn is_clipped_out(&self) -> bool {
        self.clip.is_some_and(|clip| clip.area() == 0.0)
    }
}

/// A star filled from the left up to a fraction of its width.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialFillStar {
    /// Cell the star was fitted into.
    pub bounds: Rect,
    /// Clamped fill fraction.
    pub fraction: f64,
    /// Inner region clipped to the filled part of the cell.
    pub fill: FilledRegion,
    /// Outer minus inner outline; always fully visible.
    pub rim: FilledRegion,
}

impl PartialFillStar {
    /// Regions in paint order (back to front).
    #[must_use]
    pub fn regions(&self) -> [&FilledRegion; 2] {
        [&self.fill, &self.rim]
    }
}

/// Builds a star in `rect` whose inner region is filled from the left up to
/// `fraction` of the cell width.
///
/// `fraction` is clamped to `[0, 1]`. The result depends only on the
/// arguments; calling this twice with the same inputs gives equal values.
#[must_use]
pub fn render_partial_fill(
    rect: Rect,
    fraction: f64,
    outer: impl Into<Brush>,
    inner: impl Into<Brush>,
) -> PartialFillStar {
    let fraction = clamp_fraction(fraction);
    PartialFillStar {
        bounds: rect,
        fraction,
        fill: FilledRegion {
            path: inner_star(rect),
            fill_rule: Fill::NonZero,
            brush: inner.into(),
            clip: Some(horizontal_clip(rect, fraction)),
        },
        rim: FilledRegion {
            path: rim_outline(rect),
            fill_rule: Fill::EvenOdd,
            brush: outer.into(),
            clip: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Point, Shape};
    use peniko::Color;

    const CELL: Rect = Rect::new(10.0, 0.0, 50.0, 40.0);
    const GOLD: Color = Color::from_rgb8(0xff, 0xa5, 0x00);

    /// Sample points strictly inside `rect`, at the centers of an `n` × `n`
    /// grid.
    fn samples(rect: Rect, n: u32) -> Vec<Point> {
        let step_x = rect.width() / f64::from(n);
        let step_y = rect.height() / f64::from(n);
        (0..n)
            .flat_map(|i| {
                (0..n).map(move |j| {
                    Point::new(
                        rect.x0 + (f64::from(i) + 0.5) * step_x,
                        rect.y0 + (f64::from(j) + 0.5) * step_y,
                    )
                })
            })
            .collect()
    }

    fn painted(region: &FilledRegion, pt: Point) -> bool {
        let winding = region.path.winding(pt);
        let inside = match region.fill_rule {
            Fill::NonZero => winding != 0,
            Fill::EvenOdd => winding % 2 != 0,
        };
        inside && region.clip.is_none_or(|clip| clip.contains(pt))
    }

    #[test]
    fn clamp_fraction_handles_out_of_range_and_nan() {
        assert_eq!(clamp_fraction(-0.5), 0.0);
        assert_eq!(clamp_fraction(0.25), 0.25);
        assert_eq!(clamp_fraction(3.0), 1.0);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn horizontal_clip_covers_leftmost_fraction() {
        assert_eq!(horizontal_clip(CELL, 0.25), Rect::new(10.0, 0.0, 20.0, 40.0));
        assert_eq!(horizontal_clip(CELL, 2.0), CELL);
        assert_eq!(horizontal_clip(CELL, -1.0).width(), 0.0);
    }

    #[test]
    fn empty_fill_has_zero_visible_area() {
        let star = render_partial_fill(CELL, 0.0, GOLD, GOLD);
        assert!(star.fill.is_clipped_out());
        assert_eq!(star.fill.clip.unwrap().area(), 0.0);
        assert!(!star.rim.is_clipped_out());
    }

    #[test]
    fn full_fill_covers_entire_inner_region() {
        let star = render_partial_fill(CELL, 1.0, GOLD, GOLD);
        let cavity = inner_star(CELL);
        let mut inside = 0;
        for pt in samples(CELL, 64) {
            if cavity.contains(pt) {
                inside += 1;
                assert!(painted(&star.fill, pt), "cavity point {pt:?} left unfilled");
                assert!(!painted(&star.rim, pt), "rim covers cavity point {pt:?}");
            }
        }
        assert!(inside > 100);
    }

    #[test]
    fn partial_fill_stops_at_the_clip_edge() {
        let star = render_partial_fill(CELL, 0.25, GOLD, Color::WHITE);
        let edge = CELL.x0 + 0.25 * CELL.width();
        let cavity = inner_star(CELL);
        let outer = outer_star(CELL);
        let (mut left, mut right) = (0, 0);
        for pt in samples(CELL, 64) {
            if cavity.contains(pt) {
                assert_eq!(painted(&star.fill, pt), pt.x < edge, "at {pt:?}");
                if pt.x < edge {
                    left += 1;
                } else {
                    right += 1;
                }
            } else {
                // The rim is visible wherever the outer star is.
                assert!(!painted(&star.fill, pt), "fill escapes cavity at {pt:?}");
                assert_eq!(painted(&star.rim, pt), outer.contains(pt), "at {pt:?}");
            }
        }
        assert!(left > 0 && right > left);
    }

    #[test]
    fn rim_is_even_odd_of_both_outlines() {
        let star = render_partial_fill(CELL, 0.5, GOLD, Color::WHITE);
        assert_eq!(star.rim.fill_rule, Fill::EvenOdd);
        assert_eq!(star.rim.clip, None);
        let outer = outer_star(CELL).elements().len();
        let inner = inner_star(CELL).elements().len();
        assert_eq!(star.rim.path.elements().len(), outer + inner);
        assert_eq!(star.rim.brush, Brush::Solid(GOLD));
        assert_eq!(star.fill.brush, Brush::Solid(Color::WHITE));
    }

    #[test]
    fn regions_are_back_to_front() {
        let star = render_partial_fill(CELL, 0.5, GOLD, GOLD);
        let [back, front] = star.regions();
        assert_eq!(back, &star.fill);
        assert_eq!(front, &star.rim);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(render_partial_fill(CELL, 7.0, GOLD, GOLD).fraction, 1.0);
        assert_eq!(render_partial_fill(CELL, -7.0, GOLD, GOLD).fraction, 0.0);
    }

    #[test]
    fn rendering_is_idempotent() {
        let a = render_partial_fill(CELL, 0.37, GOLD, Color::BLACK);
        let b = render_partial_fill(CELL, 0.37, GOLD, Color::BLACK);
        assert_eq!(a, b);
    }
}

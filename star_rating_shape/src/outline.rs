// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outer and inner star outlines.

use kurbo::{BezPath, Rect};

use crate::star_point::StarPoint;

const ARMS: usize = 5;

/// A rounded corner: a cubic curve sweeping `sweep` degrees along the arm
/// radius, with both control points at `radius`, `spread` degrees either side
/// of the sweep's midpoint.
#[derive(Copy, Clone, Debug)]
struct Rounding {
    sweep: f64,
    spread: f64,
    radius: f64,
}

/// Rounded tips of the outer silhouette.
const OUTER_TIP: Rounding = Rounding {
    sweep: 11.0,
    spread: 2.7,
    radius: 0.537,
};
const OUTER_ARM_START: f64 = -23.5;
const OUTER_OUT_TO_IN: f64 = 30.5;
const OUTER_LONG_ARM: f64 = 0.485;
const OUTER_SHORT_ARM: f64 = 0.238;

/// Rounded notches between the cavity's arms.
const INNER_NOTCH: Rounding = Rounding {
    sweep: 14.8,
    spread: 1.5,
    radius: 0.158,
};
/// Rounded tips of the cavity.
const INNER_TIP: Rounding = Rounding {
    sweep: 0.8,
    spread: 0.02,
    radius: 0.415,
};
const INNER_ARM_START: f64 = -18.4;
const INNER_OUT_TO_IN: f64 = 28.2;
const INNER_LONG_ARM: f64 = 0.411;
const INNER_SHORT_ARM: f64 = 0.171;

/// Appends a rounded corner ending on `arm` and returns the new angle.
fn round(path: &mut BezPath, sp: &StarPoint, angle: f64, arm: f64, rounding: Rounding) -> f64 {
    let mid = angle - rounding.sweep / 2.0;
    let end = angle - rounding.sweep;
    path.curve_to(
        sp.point(rounding.radius, mid + rounding.spread),
        sp.point(rounding.radius, mid - rounding.spread),
        sp.point(arm, end),
    );
    end
}

/// Outline of the five-armed star silhouette fitted into `rect`.
///
/// The path starts with a move to the star's center, walks the five arms
/// clockwise on screen (outer tip, inner notch, next tip, rounded tip curve),
/// and closes back to the center. Identical rectangles always produce
/// identical paths.
#[must_use]
pub fn outer_star(rect: Rect) -> BezPath {
    let sp = StarPoint::new(rect);
    let mut path = BezPath::new();
    path.move_to(sp.center());

    let mut angle = OUTER_ARM_START;
    for _ in 0..ARMS {
        path.line_to(sp.point(OUTER_LONG_ARM, angle));
        angle -= OUTER_OUT_TO_IN;
        path.line_to(sp.point(OUTER_SHORT_ARM, angle));
        angle -= OUTER_OUT_TO_IN;
        path.line_to(sp.point(OUTER_LONG_ARM, angle));
        angle = round(&mut path, &sp, angle, OUTER_LONG_ARM, OUTER_TIP);
    }

    path.close_path();
    path
}

/// Outline of the cavity carved out of [`outer_star`] for the same `rect`.
///
/// Filling both outlines with the even-odd rule leaves the star's rim;
/// filling this outline alone gives the inner region.
#[must_use]
pub fn inner_star(rect: Rect) -> BezPath {
    let sp = StarPoint::new(rect);
    let mut path = BezPath::new();
    path.move_to(sp.center());

    let mut angle = INNER_ARM_START;
    for _ in 0..ARMS {
        path.line_to(sp.point(INNER_LONG_ARM, angle));
        angle -= INNER_OUT_TO_IN;
        path.line_to(sp.point(INNER_SHORT_ARM, angle));
        angle = round(&mut path, &sp, angle, INNER_SHORT_ARM, INNER_NOTCH);
        angle -= INNER_OUT_TO_IN;
        path.line_to(sp.point(INNER_LONG_ARM, angle));
        angle = round(&mut path, &sp, angle, INNER_LONG_ARM, INNER_TIP);
    }

    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{PathEl, Point, Shape};

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .flat_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => [Some(p), None, None],
                PathEl::QuadTo(a, b) => [Some(a), Some(b), None],
                PathEl::CurveTo(a, b, c) => [Some(a), Some(b), Some(c)],
                PathEl::ClosePath => [None, None, None],
            })
            .flatten()
            .collect()
    }

    fn last_endpoint(path: &BezPath) -> Point {
        path.elements()
            .iter()
            .rev()
            .find_map(|el| el.end_point())
            .unwrap()
    }

    const CELL: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn outer_star_shape_of_commands() {
        let path = outer_star(CELL);
        let els = path.elements();
        // move + 5 * (3 lines + 1 curve) + close
        assert_eq!(els.len(), 1 + 5 * 4 + 1);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[4], PathEl::CurveTo(..)));
        assert!(matches!(els[els.len() - 1], PathEl::ClosePath));
    }

    #[test]
    fn inner_star_shape_of_commands() {
        let path = inner_star(CELL);
        let els = path.elements();
        // move + 5 * (2 lines + curve + line + curve) + close
        assert_eq!(els.len(), 1 + 5 * 5 + 1);
        assert!(matches!(els[3], PathEl::CurveTo(..)));
        assert!(matches!(els[5], PathEl::CurveTo(..)));
    }

    #[test]
    fn outlines_start_at_center_and_wrap_around() {
        let sp = StarPoint::new(CELL);
        for path in [outer_star(CELL), inner_star(CELL)] {
            let PathEl::MoveTo(start) = path.elements()[0] else {
                panic!("outline must start with a move");
            };
            assert_eq!(start, sp.center());
            // Five arms of 72° each bring the walk back to the first tip.
            let PathEl::LineTo(first_tip) = path.elements()[1] else {
                panic!("outline must continue with a line to the first tip");
            };
            assert!((last_endpoint(&path) - first_tip).hypot() < 1e-9);
        }
    }

    #[test]
    fn first_outer_tip_matches_constants() {
        let sp = StarPoint::new(CELL);
        let PathEl::LineTo(tip) = outer_star(CELL).elements()[1] else {
            panic!("expected a line");
        };
        assert_eq!(tip, sp.point(0.485, -23.5));
    }

    #[test]
    fn outlines_are_deterministic() {
        let rect = Rect::new(3.5, 7.25, 91.0, 64.0);
        assert_eq!(outer_star(rect), outer_star(rect));
        assert_eq!(inner_star(rect), inner_star(rect));
    }

    #[test]
    fn outlines_scale_linearly() {
        let small = Rect::new(0.0, 0.0, 30.0, 20.0);
        let large = Rect::new(0.0, 0.0, 60.0, 40.0);
        for (a, b) in [
            (outer_star(small), outer_star(large)),
            (inner_star(small), inner_star(large)),
        ] {
            let (a, b) = (points(&a), points(&b));
            assert_eq!(a.len(), b.len());
            for (p, q) in a.iter().zip(&b) {
                assert!(
                    (p.to_vec2() * 2.0 - q.to_vec2()).hypot() < 1e-9,
                    "{p:?} does not scale to {q:?}"
                );
            }
        }
    }

    #[test]
    fn inner_star_fits_inside_outer_star() {
        let outer = outer_star(CELL).bounding_box();
        let inner = inner_star(CELL).bounding_box();
        assert_eq!(outer.union(inner), outer);
        assert!(inner.area() < outer.area());
    }

    #[test]
    fn outer_star_fits_its_rect() {
        let bounds = outer_star(CELL).bounding_box();
        assert!(bounds.x0 >= -0.5 && bounds.x1 <= 100.5, "{bounds:?}");
        assert!(bounds.y0 >= -0.5 && bounds.y1 <= 100.5, "{bounds:?}");
    }

    #[test]
    fn degenerate_rects_do_not_panic() {
        for rect in [
            Rect::ZERO,
            Rect::new(10.0, 10.0, 10.0, 50.0),
            Rect::new(0.0, 0.0, 50.0, 0.0),
        ] {
            let path = outer_star(rect);
            let center = StarPoint::new(rect).center();
            assert!(points(&path).iter().all(|p| *p == center));
            assert_eq!(inner_star(rect).elements().len(), 1 + 5 * 5 + 1);
        }
    }
}

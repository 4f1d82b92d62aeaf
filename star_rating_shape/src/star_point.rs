// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar-coordinate frame used to place star vertices.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`
use kurbo::{Point, Rect, Vec2};

/// Height of the star's working square relative to its width.
pub const HEIGHT_TO_WIDTH: f64 = 0.95513;

/// Center of the star in unit coordinates of the working square.
///
/// The center sits below the vertical midpoint so that the top tip and the
/// two bottom tips touch the working square's edges.
pub const UNIT_CENTER: Point = Point::new(0.5, 0.549);

/// Frame mapping polar coordinates around the star's center into a rectangle.
///
/// The frame is a working rectangle of width `w` and height
/// `HEIGHT_TO_WIDTH * w`, where `w` is the largest width that fits in the
/// target rectangle. Any leftover space is split evenly on both sides, so the
/// star stays centered when the rectangle does not have the star's aspect
/// ratio.
///
/// Radii passed to [`StarPoint::point`] are in units of the working width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StarPoint {
    width: f64,
    height: f64,
    center_offset: Vec2,
}

impl StarPoint {
    /// Creates the frame for `rect`.
    ///
    /// Inverted rectangles are normalized first. A rectangle with a zero
    /// extent yields a frame of zero width, which collapses every point onto
    /// the center.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let rect = rect.abs();
        let width = rect.width().min(rect.height() * (1.0 / HEIGHT_TO_WIDTH));
        let height = HEIGHT_TO_WIDTH * width;
        let center_offset = Vec2::new(
            rect.x0 + (rect.width() - width) / 2.0,
            rect.y0 + (rect.height() - height) / 2.0,
        );
        Self {
            width,
            height,
            center_offset,
        }
    }

    /// Width of the working rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the working rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The star's center in rectangle coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            UNIT_CENTER.x * self.width + self.center_offset.x,
            UNIT_CENTER.y * self.height + self.center_offset.y,
        )
    }

    /// Maps `radius` (in working widths) at `degrees` to a point.
    ///
    /// Angles follow screen conventions: 0° points right and negative angles
    /// turn towards the top of the rectangle.
    #[must_use]
    pub fn point(&self, radius: f64, degrees: f64) -> Point {
        let angle = degrees * PI / 180.0;
        let real_radius = radius * self.width;
        let offset = Vec2::new(real_radius * angle.cos(), real_radius * angle.sin());
        Point::new(
            UNIT_CENTER.x * self.width + offset.x + self.center_offset.x,
            UNIT_CENTER.y * self.height + offset.y + self.center_offset.y,
        )
    }
}

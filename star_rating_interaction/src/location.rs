// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping horizontal pointer coordinates onto a row of stars.

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use crate::precision::{Precision, quantize};

/// Where a pointer coordinate falls in a rating row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapLocation {
    /// Over star `index`, `remainder` of the way across it (in `[0, 1]`).
    Star {
        /// Zero-based star index.
        index: usize,
        /// Fraction of the star's width to the left of the pointer.
        remainder: f64,
    },
    /// Over the spacing that follows star `index`.
    Spacer {
        /// Index of the star to the left of the gap.
        index: usize,
    },
}

impl TapLocation {
    /// Index of the star this location belongs to.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Star { index, .. } | Self::Spacer { index } => index,
        }
    }

    /// The rating for this location at `precision`.
    ///
    /// See [`quantize`].
    #[must_use]
    pub fn value(self, precision: Precision) -> f64 {
        quantize(self, precision)
    }
}

/// Classifies `x` (relative to the start of the row) as a [`TapLocation`].
///
/// - Negative (or NaN) `x` is `Star { index: 0, remainder: 0 }`.
/// - `x` past the end of the row is the full last star.
/// - `x` in the gap after a star, and strictly inside the row, is a spacer.
///
/// An empty row (`count == 0`) or a non-positive `star_width` also yields
/// `Star { index: 0, remainder: 0 }`; callers that need to distinguish those
/// cases should build a [`RowLayout`] instead.
#[must_use]
pub fn locate(x: f64, star_width: f64, spacing_width: f64, count: usize) -> TapLocation {
    const ORIGIN: TapLocation = TapLocation::Star {
        index: 0,
        remainder: 0.0,
    };

    if x.is_nan() || x < 0.0 || count == 0 || star_width.is_nan() || star_width <= 0.0 {
        return ORIGIN;
    }

    let cell = star_width + spacing_width;
    let cell_index = (x / cell).floor();
    let remainder = x - cell_index * cell;
    let total = total_width(star_width, spacing_width, count);

    #[allow(
        clippy::cast_possible_truncation,
        reason = "`cell_index` is a non-negative whole number; huge values saturate and are clamped below"
    )]
    let index = cell_index as usize;

    if remainder > star_width && x < total {
        return TapLocation::Spacer { index };
    }

    let index = index.min(count - 1);
    let remainder = if x < total {
        (remainder / star_width).clamp(0.0, 1.0)
    } else {
        1.0
    };
    TapLocation::Star { index, remainder }
}

fn total_width(star_width: f64, spacing_width: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    star_width * count as f64 + spacing_width * (count - 1) as f64
}

/// Spacing that spreads `count` stars of `star_width` across `row_width`.
///
/// Rows with fewer than two stars have no gaps, so the spacing is `0`. The
/// result is never negative and never NaN.
#[must_use]
pub fn auto_spacing(row_width: f64, star_width: f64, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let spacing = (row_width - star_width * count as f64) / (count - 1) as f64;
    if spacing.is_finite() {
        spacing.max(0.0)
    } else {
        0.0
    }
}

/// Geometry of a rating row: `count` stars of `star_width`, separated by
/// `spacing_width`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowLayout {
    star_width: f64,
    spacing_width: f64,
    count: usize,
}

impl RowLayout {
    /// Creates a layout, or `None` if no interaction is possible with it.
    ///
    /// Returns `None` for an empty row, a star width that is not a positive
    /// finite number, or a spacing that is negative or not finite.
    #[must_use]
    pub fn new(star_width: f64, spacing_width: f64, count: usize) -> Option<Self> {
        let valid = count > 0
            && star_width.is_finite()
            && star_width > 0.0
            && spacing_width.is_finite()
            && spacing_width >= 0.0;
        valid.then_some(Self {
            star_width,
            spacing_width,
            count,
        })
    }

    /// Creates a layout whose spacing is derived from the measured
    /// `row_width` (see [`auto_spacing`]).
    #[must_use]
    pub fn fit(row_width: f64, star_width: f64, count: usize) -> Option<Self> {
        Self::new(star_width, auto_spacing(row_width, star_width, count), count)
    }

    /// Width of one star.
    #[must_use]
    pub fn star_width(&self) -> f64 {
        self.star_width
    }

    /// Width of the gap between two stars.
    #[must_use]
    pub fn spacing_width(&self) -> f64 {
        self.spacing_width
    }

    /// Number of stars.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Width of one star plus the gap that follows it.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.star_width + self.spacing_width
    }

    /// Width from the left edge of the first star to the right edge of the
    /// last one.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        total_width(self.star_width, self.spacing_width, self.count)
    }

    /// Horizontal extent of star `index`, relative to the row start.
    #[must_use]
    pub fn star_span(&self, index: usize) -> Range<f64> {
        let start = index as f64 * self.cell_width();
        start..start + self.star_width
    }

    /// Classifies `x` (see [`locate`]).
    #[must_use]
    pub fn locate(&self, x: f64) -> TapLocation {
        locate(x, self.star_width, self.spacing_width, self.count)
    }

    /// The rating selected by a pointer at `x`.
    #[must_use]
    pub fn rating_at(&self, x: f64, precision: Precision) -> f64 {
        quantize(self.locate(x), precision)
    }
}

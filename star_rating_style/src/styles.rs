// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in rating styles.

use alloc::boxed::Box;

use kurbo::Rect;
use peniko::Brush;
use star_rating_shape::render_partial_fill;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::drawable::{Drawable, Glyph, GlyphFill, Symbol};
use crate::stack::{Cell, RatingStyle, StyleCx};

fn index_f64(index: usize) -> f64 {
    index as f64
}

/// Whole-symbol style: a cell is filled when its index is below the integer
/// part of the rating.
///
/// This is what [`StyleStack::new`](crate::StyleStack::new) starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolStyle {
    /// The symbol drawn in every cell.
    pub symbol: Symbol,
}

impl SymbolStyle {
    /// Stars.
    #[must_use]
    pub fn star() -> Self {
        Self::new(Symbol::STAR)
    }

    /// Circles.
    #[must_use]
    pub fn circle() -> Self {
        Self::new(Symbol::CIRCLE)
    }

    /// Any symbol.
    #[must_use]
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl RatingStyle for SymbolStyle {
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable {
        let fill = if index_f64(cell.index) < cx.configuration().value.floor() {
            GlyphFill::Full
        } else {
            GlyphFill::Empty
        };
        Drawable::Glyph(Glyph::new(self.symbol.clone(), fill))
    }
}

/// Symbols in whole and half steps.
///
/// A cell is full below the integer part of the rating, half filled when the
/// rating reaches at least halfway into it, and empty otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfSymbolStyle {
    /// The symbol drawn in every cell.
    pub symbol: Symbol,
}

impl Default for HalfSymbolStyle {
    fn default() -> Self {
        Self {
            symbol: Symbol::STAR,
        }
    }
}

impl RatingStyle for HalfSymbolStyle {
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable {
        let value = cx.configuration().value;
        let index = index_f64(cell.index);
        let fill = if index < value.floor() {
            GlyphFill::Full
        } else if index <= value - 0.5 {
            GlyphFill::LeadingHalf
        } else {
            GlyphFill::Empty
        };
        Drawable::Glyph(Glyph::new(self.symbol.clone(), fill))
    }
}

/// Stars filled left to right by the exact fractional rating.
///
/// Cell `i` shows `clamp(value - i, 0, 1)` of its star, so a rating of `2.3`
/// draws two full stars, one star 30% filled, and empty stars after that.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialFillStyle {
    /// Paint for the rim.
    pub outer: Brush,
    /// Paint for the filled part of the cavity.
    pub inner: Brush,
}

impl PartialFillStyle {
    /// Creates the style from its two paints.
    #[must_use]
    pub fn new(outer: impl Into<Brush>, inner: impl Into<Brush>) -> Self {
        Self {
            outer: outer.into(),
            inner: inner.into(),
        }
    }
}

impl RatingStyle for PartialFillStyle {
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable {
        let fraction = cx.configuration().value - index_f64(cell.index);
        Drawable::PartialFillStar(render_partial_fill(
            cell.rect,
            fraction,
            self.outer.clone(),
            self.inner.clone(),
        ))
    }
}

/// Decorator: pads the cell, lets the next style draw inside, and outlines
/// the result.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderedStyle {
    /// Paint for the frame.
    pub border: Brush,
    /// Space between the cell edge and the wrapped content.
    pub padding: f64,
}

impl BorderedStyle {
    /// Creates a frame of `border` paint with `padding` around the content.
    #[must_use]
    pub fn new(border: impl Into<Brush>, padding: f64) -> Self {
        Self {
            border: border.into(),
            padding,
        }
    }
}

/// Shrinks `rect` by `padding` on every side, never past its center.
fn inset(rect: Rect, padding: f64) -> Rect {
    let rect = rect.abs();
    let limit = (rect.width().min(rect.height()) * 0.5).max(0.0);
    let padding = if padding.is_nan() {
        0.0
    } else {
        padding.clamp(0.0, limit)
    };
    rect.inset(-padding)
}

impl RatingStyle for BorderedStyle {
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable {
        let inner = Cell::new(cell.index, inset(cell.rect, self.padding));
        Drawable::Framed {
            content: Box::new(cx.render_next(inner)),
            border: self.border.clone(),
            padding: self.padding,
            content_bounds: inner.rect,
        }
    }
}

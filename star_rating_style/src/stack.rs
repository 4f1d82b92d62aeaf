// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered style stacks and delegation between styles.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::drawable::Drawable;
use crate::styles::SymbolStyle;

/// Read-only view of the widget state that styles render from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleConfiguration {
    /// Current rating.
    pub value: f64,
    /// Number of cells in the row.
    pub count: usize,
    /// Explicit spacing between cells, if configured.
    pub spacing: Option<f64>,
    /// Quantization grain of the rating (`0` for continuous).
    pub precision: f64,
}

impl StyleConfiguration {
    /// A configuration for `count` cells showing `value`, with automatic
    /// spacing and whole-star precision.
    #[must_use]
    pub fn new(value: f64, count: usize) -> Self {
        Self {
            value,
            count,
            spacing: None,
            precision: 1.0,
        }
    }
}

/// The cell being rendered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    /// Zero-based position in the row.
    pub index: usize,
    /// Area available to the cell's drawable.
    pub rect: Rect,
}

impl Cell {
    /// Creates a cell.
    #[must_use]
    pub fn new(index: usize, rect: Rect) -> Self {
        Self { index, rect }
    }
}

/// A strategy that turns one cell of a rating row into a [`Drawable`].
///
/// A style can draw the cell itself, or call [`StyleCx::render_next`] to
/// have the style beneath it in the [`StyleStack`] draw the cell and then
/// decorate the result.
pub trait RatingStyle: fmt::Debug {
    /// Renders `cell`.
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable;
}

/// A [`RatingStyle`] backed by a closure.
///
/// ```rust
/// use kurbo::Rect;
/// use star_rating_style::{
///     Cell, Drawable, FnStyle, Glyph, GlyphFill, StyleConfiguration, StyleStack, Symbol,
/// };
///
/// // Hearts everywhere, filled for every cell below the rating.
/// let hearts = FnStyle::new(|cx, cell: Cell| {
///     let filled = (cell.index as f64) < cx.configuration().value;
///     let fill = if filled { GlyphFill::Full } else { GlyphFill::Empty };
///     Drawable::Glyph(Glyph::new(Symbol::new("heart"), fill))
/// });
///
/// let stack = StyleStack::new().with(hearts);
/// let config = StyleConfiguration::new(2.0, 5);
/// let drawable = stack.render(&config, Cell::new(1, Rect::ZERO));
/// assert_eq!(drawable.as_glyph().unwrap().variant_name(), "heart.fill");
/// ```
pub struct FnStyle<F>(pub F);

impl<F> FnStyle<F>
where
    F: Fn(&StyleCx<'_>, Cell) -> Drawable,
{
    /// Wraps `f` as a style.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for FnStyle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnStyle")
            .field(&core::any::type_name::<F>())
            .finish()
    }
}

impl<F> RatingStyle for FnStyle<F>
where
    F: Fn(&StyleCx<'_>, Cell) -> Drawable,
{
    fn make_body(&self, cx: &StyleCx<'_>, cell: Cell) -> Drawable {
        (self.0)(cx, cell)
    }
}

/// Context handed to [`RatingStyle::make_body`].
#[derive(Debug)]
pub struct StyleCx<'a> {
    stack: &'a StyleStack,
    configuration: &'a StyleConfiguration,
    level: usize,
}

impl<'a> StyleCx<'a> {
    /// The widget state being rendered.
    #[must_use]
    pub fn configuration(&self) -> &'a StyleConfiguration {
        self.configuration
    }

    /// How many styles above this one have already been resolved in the
    /// current render pass.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Renders `cell` with the style beneath the current one.
    ///
    /// # Panics
    ///
    /// Panics if the current style is the bottom of the stack.
    #[must_use]
    pub fn render_next(&self, cell: Cell) -> Drawable {
        self.stack.render_at(self.configuration, cell, self.level + 1)
    }
}

/// Ordered list of rating styles.
///
/// Styles are appended as the host composes the widget. Rendering starts at
/// the most recently appended style; each style may delegate to the one
/// appended before it. A fresh stack from [`StyleStack::new`] holds one
/// [`SymbolStyle::star`] at the bottom, so appended decorators always have
/// something to wrap.
///
/// Styles are reference counted, so cloning a stack to share it between
/// widgets is cheap.
///
/// ```rust
/// use kurbo::Rect;
/// use peniko::Color;
/// use star_rating_style::{
///     BorderedStyle, Cell, StyleConfiguration, StyleStack, SymbolStyle,
/// };
///
/// // A red border around circles.
/// let stack = StyleStack::new()
///     .with(SymbolStyle::circle())
///     .with(BorderedStyle::new(Color::from_rgb8(0xff, 0, 0), 2.0));
///
/// let config = StyleConfiguration::new(3.0, 5);
/// let drawable = stack.render(&config, Cell::new(0, Rect::new(0.0, 0.0, 20.0, 20.0)));
/// assert_eq!(drawable.frame_depth(), 1);
/// assert_eq!(
///     drawable.innermost().as_glyph().unwrap().variant_name(),
///     "circle.fill"
/// );
/// ```
#[derive(Clone)]
pub struct StyleStack {
    styles: Vec<Arc<dyn RatingStyle>>,
}

impl fmt::Debug for StyleStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.styles.iter()).finish()
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleStack {
    /// A stack holding only the default star symbol style.
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with(SymbolStyle::star())
    }

    /// A stack with no styles at all.
    ///
    /// Rendering from an empty stack panics; push at least one style that
    /// does not delegate.
    #[must_use]
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Appends `style` on top of the stack.
    pub fn push(&mut self, style: impl RatingStyle + 'static) {
        self.styles.push(Arc::new(style));
    }

    /// Appends an already shared style on top of the stack.
    pub fn push_shared(&mut self, style: Arc<dyn RatingStyle>) {
        self.styles.push(style);
    }

    /// Builder-style [`StyleStack::push`].
    #[must_use]
    pub fn with(mut self, style: impl RatingStyle + 'static) -> Self {
        self.push(style);
        self
    }

    /// Number of styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if the stack holds no styles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The style rendering at recursion `level`, counted from the top.
    ///
    /// Returns `None` when `level` reaches past the bottom of the stack.
    #[must_use]
    pub fn resolve(&self, level: usize) -> Option<&dyn RatingStyle> {
        let position = self.styles.len().checked_sub(level + 1)?;
        Some(self.styles[position].as_ref())
    }

    /// Renders `cell`, starting a new pass at the top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty, or if the bottom style delegates.
    #[must_use]
    pub fn render(&self, configuration: &StyleConfiguration, cell: Cell) -> Drawable {
        self.render_at(configuration, cell, 0)
    }

    /// Renders `cell` with the style at recursion `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not below [`StyleStack::len`]: a style asked for
    /// the style beneath it and there is none, which is a composition bug.
    #[must_use]
    pub fn render_at(
        &self,
        configuration: &StyleConfiguration,
        cell: Cell,
        level: usize,
    ) -> Drawable {
        let Some(style) = self.resolve(level) else {
            panic!(
                "style stack underflow: level {level} requested from a stack of {} style(s); \
                 a style delegated with nothing beneath it",
                self.styles.len()
            );
        };
        let cx = StyleCx {
            stack: self,
            configuration,
            level,
        };
        style.make_body(&cx, cell)
    }
}

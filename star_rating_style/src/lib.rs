// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=star_rating_style --heading-base-level=0

//! Star Rating Style: pluggable, composable rendering for rating cells.
//!
//! A [`RatingStyle`] turns one cell of a rating row into a [`Drawable`]: a
//! symbol glyph, a partially filled vector star, a frame around other
//! content, or arbitrary filled regions. Styles live in a [`StyleStack`].
//!
//! ## Composition
//!
//! Styles are appended to the stack as the host configures the widget.
//! Rendering a cell starts at the most recently appended style (recursion
//! level `0`). A decorating style such as [`BorderedStyle`] calls
//! [`StyleCx::render_next`], which renders the same cell one level deeper,
//! with the style appended just before it, and then wraps the result.
//! Appending `A` then `B` therefore draws `B(A(cell))`.
//!
//! A fresh [`StyleStack::new`] holds [`SymbolStyle::star`] at the bottom, so a
//! stack made only of decorators still draws stars. Delegating from the very
//! bottom of the stack is a composition error and panics.
//!
//! ## Built-in styles
//!
//! - [`SymbolStyle`]: whole symbols, filled below the integer part of the
//!   rating.
//! - [`HalfSymbolStyle`]: whole and half symbols.
//! - [`PartialFillStyle`]: vector stars filled by the exact fractional rating.
//! - [`BorderedStyle`]: pads and outlines whatever the next style draws.
//! - [`FnStyle`]: any closure.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use star_rating_style::{
//!     BorderedStyle, Cell, Drawable, PartialFillStyle, StyleConfiguration, StyleStack,
//! };
//!
//! let stack = StyleStack::new()
//!     .with(PartialFillStyle::new(Color::BLACK, Color::from_rgb8(0xff, 0xa5, 0)))
//!     .with(BorderedStyle::new(Color::BLACK, 2.0));
//!
//! let config = StyleConfiguration::new(1.5, 5);
//! let drawable = stack.render(&config, Cell::new(1, Rect::new(30.0, 0.0, 50.0, 20.0)));
//!
//! let Drawable::PartialFillStar(star) = drawable.innermost() else {
//!     unreachable!()
//! };
//! assert_eq!(star.fraction, 0.5);
//! assert_eq!(star.bounds, Rect::new(32.0, 2.0, 48.0, 18.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod drawable;
mod stack;
mod styles;

pub use drawable::{Drawable, Glyph, GlyphFill, Symbol};
pub use stack::{Cell, FnStyle, RatingStyle, StyleConfiguration, StyleCx, StyleStack};
pub use styles::{BorderedStyle, HalfSymbolStyle, PartialFillStyle, SymbolStyle};

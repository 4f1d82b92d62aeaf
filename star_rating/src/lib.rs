// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=star_rating --heading-base-level=0

//! Star Rating: the core of a star-rating widget, independent of any UI
//! framework.
//!
//! A [`Rating`] owns its configuration, the latest layout measurements and the
//! current value. The host:
//!
//! - reports measurements with [`Rating::set_star_size`] and
//!   [`Rating::set_row_width`] (latest wins);
//! - forwards pointer events ([`Rating::pointer_down`],
//!   [`Rating::pointer_drag`] or the x-only [`Rating::pointer_move`], then
//!   [`Rating::pointer_up`] or [`Rating::pointer_cancel`]) and gets the new
//!   value back immediately;
//! - calls [`Rating::render`] for one [`Drawable`](style::Drawable) per cell.
//!
//! Configuration is validated once, by [`RatingBuilder::build`]. Pointer
//! events that arrive before a usable star width is known are ignored rather
//! than producing NaN ratings; pass an
//! [`InteractionTrace`](interaction::trace::InteractionTrace) to the
//! `*_traced` variants to see why.
//!
//! The building blocks are re-exported as [`shape`], [`interaction`] and
//! [`style`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use star_rating::Rating;
//! use star_rating::style::HalfSymbolStyle;
//!
//! let mut rating = Rating::builder()
//!     .count(5)
//!     .spacing(10.0)
//!     .precision(0.5)
//!     .value(3.0)
//!     .style(HalfSymbolStyle::default())
//!     .build()
//!     .unwrap();
//!
//! // Nothing happens until the host has measured a star.
//! assert_eq!(rating.pointer_move(35.0), None);
//! rating.set_star_size(Size::new(20.0, 20.0));
//!
//! // Drag to a quarter of the way into the second star.
//! rating.pointer_down(Point::new(5.0, 10.0));
//! assert_eq!(rating.pointer_drag(Point::new(35.0, 10.0)), Some(1.5));
//! rating.pointer_up();
//!
//! let cells = rating.render();
//! let names: Vec<_> = cells
//!     .iter()
//!     .map(|cell| cell.drawable.as_glyph().unwrap().variant_name())
//!     .collect();
//! assert_eq!(
//!     names,
//!     ["star.fill", "star.leadinghalf.filled", "star", "star", "star"]
//! );
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod rating;

pub use config::{ConfigError, RatingBuilder, RatingConfig};
pub use rating::{CellDrawable, Rating};

pub use star_rating_interaction as interaction;
pub use star_rating_shape as shape;
pub use star_rating_style as style;

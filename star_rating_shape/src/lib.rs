// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=star_rating_shape --heading-base-level=0

//! Star Rating Shape: procedural star outlines and partial-fill compositing.
//!
//! This crate produces the vector geometry behind a star-rating widget. It
//! does not rasterize anything; it hands back [`kurbo::BezPath`] outlines and
//! small fill descriptions that a renderer (or the SVG exporter in
//! `star_rating_svg`) turns into pixels.
//!
//! - [`outer_star`] traces the rounded five-armed silhouette.
//! - [`inner_star`] traces the smaller cavity carved out of it, so the pair
//!   forms a two-layer star (rim + inner region) whose layers can be painted
//!   independently.
//! - [`render_partial_fill`] composes both outlines with a horizontal clip,
//!   giving a star that fills from left to right as a fraction goes from 0
//!   to 1.
//!
//! All outlines are built from polar coordinates around a fixed center using
//! hand-tuned radii and angles (see [`StarPoint`]). A generic regular star
//! polygon would not reproduce the same silhouette.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{PathEl, Rect};
//! use peniko::Color;
//! use star_rating_shape::{outer_star, render_partial_fill};
//!
//! let cell = Rect::new(0.0, 0.0, 40.0, 40.0);
//!
//! let outline = outer_star(cell);
//! assert!(matches!(outline.elements().first(), Some(PathEl::MoveTo(_))));
//! assert!(matches!(outline.elements().last(), Some(PathEl::ClosePath)));
//!
//! // A star that is a quarter filled.
//! let star = render_partial_fill(cell, 0.25, Color::BLACK, Color::WHITE);
//! assert_eq!(star.fill.clip.unwrap().width(), 10.0);
//! ```
//!
//! ## Degenerate rectangles
//!
//! Zero-sized or inverted rectangles never panic: they produce an outline
//! whose points all collapse onto a single point.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod compositor;
mod outline;
mod star_point;

pub use compositor::{
    FilledRegion, PartialFillStar, clamp_fraction, horizontal_clip, render_partial_fill,
    rim_outline,
};
pub use outline::{inner_star, outer_star};
pub use star_point::{HEIGHT_TO_WIDTH, StarPoint, UNIT_CENTER};

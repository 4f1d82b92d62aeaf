// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=star_rating_interaction --heading-base-level=0

//! Star Rating Interaction: turn pointer positions into rating values.
//!
//! A rating row is `count` stars of equal width separated by equal spacing.
//! Mapping a pointer to a rating happens in two pure steps:
//!
//! - [`locate`] (or [`RowLayout::locate`]) classifies a horizontal coordinate
//!   as a [`TapLocation`]: either a position across a star, or a spacer
//!   between two stars. Coordinates left of the row or past its end are
//!   clamped onto the first and last star.
//! - [`quantize`] (or [`TapLocation::value`]) snaps that location to the
//!   configured [`Precision`]. Any penetration into a precision bucket commits
//!   to the bucket's upper edge, so a drag that barely enters a star never
//!   reports zero progress for it.
//!
//! Around those, [`drag::DragSession`] remembers the value a drag started
//! from so a host can restore it on cancel, and [`trace`] offers a callback
//! sink for observing what the interaction decided.
//!
//! ## Minimal example
//!
//! ```rust
//! use star_rating_interaction::{Precision, RowLayout, TapLocation};
//!
//! // Five 20px stars with 10px gaps.
//! let row = RowLayout::new(20.0, 10.0, 5).unwrap();
//! assert_eq!(row.total_width(), 140.0);
//!
//! let location = row.locate(35.0);
//! assert_eq!(location, TapLocation::Star { index: 1, remainder: 0.25 });
//! assert_eq!(location.value(Precision::CONTINUOUS), 1.25);
//! assert_eq!(location.value(Precision::HALF), 1.5);
//!
//! // Over the gap after the first star counts as a full first star.
//! assert_eq!(row.locate(25.0), TapLocation::Spacer { index: 0 });
//! assert_eq!(row.rating_at(25.0, Precision::HALF), 1.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod drag;
mod location;
mod precision;
pub mod trace;

pub use location::{RowLayout, TapLocation, auto_spacing, locate};
pub use precision::{Precision, PrecisionError, quantize};

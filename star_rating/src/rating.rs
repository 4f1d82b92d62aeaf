// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating widget state machine.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use star_rating_interaction::drag::DragSession;
use star_rating_interaction::trace::{IgnoreReason, InteractionTrace};
use star_rating_interaction::RowLayout;
use star_rating_style::{Cell, Drawable, StyleConfiguration, StyleStack};

use crate::config::{RatingBuilder, RatingConfig};

/// One rendered cell of the row.
#[derive(Clone, Debug, PartialEq)]
pub struct CellDrawable {
    /// Zero-based star index.
    pub index: usize,
    /// Cell area relative to the row origin.
    pub rect: Rect,
    /// What to draw there.
    pub drawable: Drawable,
}

/// A star-rating widget, minus the host UI framework.
///
/// The host feeds it layout measurements and pointer positions, and asks it
/// to render. Every pointer event updates the value synchronously, so the
/// value returned from one event is what the next event (and the next
/// render) sees.
///
/// Pointer coordinates are relative to the row's leading edge.
#[derive(Clone, Debug)]
pub struct Rating {
    config: RatingConfig,
    value: f64,
    styles: StyleStack,
    star_size: Option<Size>,
    row_width: Option<f64>,
    drag: DragSession,
}

impl Default for Rating {
    fn default() -> Self {
        Self::from_parts(RatingConfig::default(), 0.0, StyleStack::new())
    }
}

impl Rating {
    /// Starts building a widget.
    pub fn builder() -> RatingBuilder {
        RatingBuilder::default()
    }

    pub(crate) fn from_parts(config: RatingConfig, value: f64, styles: StyleStack) -> Self {
        Self {
            config,
            value,
            styles,
            star_size: None,
            row_width: None,
            drag: DragSession::default(),
        }
    }

    /// The configuration fixed at build time.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// The style stack cells are rendered with.
    #[must_use]
    pub fn styles(&self) -> &StyleStack {
        &self.styles
    }

    /// Current rating.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the rating directly, as a host-side binding update.
    ///
    /// This is not treated as a drag: it does not touch an active drag
    /// session, so cancelling that drag still restores the value from when
    /// the drag began. Non-finite values are ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
        }
    }

    /// Records the measured size of one star cell. The latest measurement
    /// wins.
    pub fn set_star_size(&mut self, size: Size) {
        self.star_size = Some(size);
    }

    /// Records the measured width of the whole row. The latest measurement
    /// wins.
    pub fn set_row_width(&mut self, width: f64) {
        self.row_width = Some(width);
    }

    /// Records both measurements at once.
    pub fn measure(&mut self, star_size: Size, row_width: f64) {
        self.set_star_size(star_size);
        self.set_row_width(row_width);
    }

    /// Most recently measured star size.
    #[must_use]
    pub fn star_size(&self) -> Option<Size> {
        self.star_size
    }

    /// The row geometry pointer events are resolved against.
    ///
    /// `None` while no pointer interaction is possible: see
    /// [`Rating::ignore_reason`].
    #[must_use]
    pub fn layout(&self) -> Option<RowLayout> {
        let count = self.config.count();
        let star_width = self.star_size?.width;
        match self.config.spacing() {
            Some(spacing) => RowLayout::new(star_width, spacing, count),
            // One star has no gap to spread the row width over.
            None if count == 1 => None,
            None => RowLayout::fit(self.row_width?, star_width, count),
        }
    }

    /// Why pointer events are currently ignored, or `None` if they are not.
    ///
    /// - An empty row never accepts input.
    /// - A single star with automatic spacing never accepts input; give it
    ///   an explicit spacing (`0` is fine) instead.
    /// - Otherwise input waits for a positive star width and, with
    ///   automatic spacing, a row width.
    #[must_use]
    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        if self.config.count() == 0 {
            Some(IgnoreReason::EmptyRow)
        } else if self.config.count() == 1 && self.config.spacing().is_none() {
            Some(IgnoreReason::SingleStarAutoSpacing)
        } else if self.layout().is_none() {
            Some(IgnoreReason::Unmeasured)
        } else {
            None
        }
    }

    /// The values handed to styles for rendering.
    #[must_use]
    pub fn style_configuration(&self) -> StyleConfiguration {
        StyleConfiguration {
            value: self.value,
            count: self.config.count(),
            spacing: self.config.spacing(),
            precision: self.config.precision().get(),
        }
    }

    /// Handles a "drag changed" event at horizontal position `x`.
    ///
    /// Returns the new value, or `None` when the event was ignored (see
    /// [`Rating::ignore_reason`]).
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        self.pointer_move_traced(x, &mut ())
    }

    /// [`Rating::pointer_move`], reporting each decision to `trace`.
    pub fn pointer_move_traced(
        &mut self,
        x: f64,
        trace: &mut impl InteractionTrace,
    ) -> Option<f64> {
        let Some(layout) = self.layout() else {
            let reason = self.ignore_reason().unwrap_or(IgnoreReason::Unmeasured);
            trace.ignored(x, reason);
            return None;
        };
        let location = layout.locate(x);
        trace.located(x, location);
        let value = location.value(self.config.precision());
        let previous = core::mem::replace(&mut self.value, value);
        trace.committed(previous, value);
        Some(value)
    }

    /// Starts a drag at `pos` and handles it as a first move, so a plain tap
    /// sets the rating.
    pub fn pointer_down(&mut self, pos: Point) -> Option<f64> {
        self.pointer_down_traced(pos, &mut ())
    }

    /// [`Rating::pointer_down`], reporting each decision to `trace`.
    pub fn pointer_down_traced(
        &mut self,
        pos: Point,
        trace: &mut impl InteractionTrace,
    ) -> Option<f64> {
        self.drag.start(self.value);
        self.pointer_move_traced(pos.x, trace)
    }

    /// Handles a drag move to `pos`.
    ///
    /// Works with or without a preceding [`Rating::pointer_down`].
    pub fn pointer_drag(&mut self, pos: Point) -> Option<f64> {
        self.pointer_drag_traced(pos, &mut ())
    }

    /// [`Rating::pointer_drag`], reporting each decision to `trace`.
    pub fn pointer_drag_traced(
        &mut self,
        pos: Point,
        trace: &mut impl InteractionTrace,
    ) -> Option<f64> {
        self.pointer_move_traced(pos.x, trace)
    }

    /// Ends the drag, keeping the value it produced.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Ends the drag and restores the value from before it.
    ///
    /// Returns the value after the call. Without an active drag nothing
    /// changes.
    pub fn pointer_cancel(&mut self) -> f64 {
        if let Some(value) = self.drag.cancel() {
            self.value = value;
        }
        self.value
    }

    /// Returns `true` between [`Rating::pointer_down`] and
    /// [`Rating::pointer_up`] or [`Rating::pointer_cancel`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Area of star `index`, relative to the row origin.
    ///
    /// Before measurement, cells have zero size.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        let size = self.star_size.unwrap_or(Size::ZERO);
        let x0 = match self.layout() {
            Some(layout) => layout.star_span(index).start,
            None => {
                let spacing = self.config.spacing().unwrap_or(0.0);
                (size.width + spacing) * index as f64
            }
        };
        Rect::from_origin_size((x0, 0.0), size)
    }

    /// Renders every cell through the style stack.
    ///
    /// # Panics
    ///
    /// Panics if the style stack delegates past its bottom.
    #[must_use]
    pub fn render(&self) -> Vec<CellDrawable> {
        let configuration = self.style_configuration();
        (0..self.config.count())
            .map(|index| {
                let rect = self.cell_rect(index);
                CellDrawable {
                    index,
                    rect,
                    drawable: self.styles.render(&configuration, Cell::new(index, rect)),
                }
            })
            .collect()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for pointer processing.
//!
//! Pointer handling itself keeps no history. When an embedder wants to know
//! why a rating ended up where it did (or why a pointer event changed
//! nothing), it can pass an [`InteractionTrace`] sink into the widget's
//! traced entry points. `()` is the no-op sink; [`TraceRecorder`] keeps every
//! callback in order.

use alloc::vec::Vec;

use crate::location::TapLocation;

/// Why a pointer event did not produce a rating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The row has no stars.
    EmptyRow,
    /// A single star with automatic spacing: there is no gap to spread
    /// the row width over, so the row is never hit-tested.
    SingleStarAutoSpacing,
    /// No positive star width has been measured yet, or (with automatic
    /// spacing) no row width.
    Unmeasured,
}

/// A callback sink for pointer processing.
pub trait InteractionTrace {
    /// Called once the pointer coordinate `x` has been classified.
    fn located(&mut self, x: f64, location: TapLocation);

    /// Called when a rating is written, with the value it replaced.
    fn committed(&mut self, previous: f64, value: f64);

    /// Called when the pointer event at `x` is dropped.
    fn ignored(&mut self, x: f64, reason: IgnoreReason);
}

impl InteractionTrace for () {
    fn located(&mut self, _x: f64, _location: TapLocation) {}

    fn committed(&mut self, _previous: f64, _value: f64) {}

    fn ignored(&mut self, _x: f64, _reason: IgnoreReason) {}
}

impl<T: InteractionTrace + ?Sized> InteractionTrace for &mut T {
    fn located(&mut self, x: f64, location: TapLocation) {
        (**self).located(x, location);
    }

    fn committed(&mut self, previous: f64, value: f64) {
        (**self).committed(previous, value);
    }

    fn ignored(&mut self, x: f64, reason: IgnoreReason) {
        (**self).ignored(x, reason);
    }
}

/// One recorded [`InteractionTrace`] callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// See [`InteractionTrace::located`].
    Located {
        /// Pointer coordinate relative to the row start.
        x: f64,
        /// Classification of `x`.
        location: TapLocation,
    },
    /// See [`InteractionTrace::committed`].
    Committed {
        /// Value before the write.
        previous: f64,
        /// Value written.
        value: f64,
    },
    /// See [`InteractionTrace::ignored`].
    Ignored {
        /// Pointer coordinate relative to the row start.
        x: f64,
        /// Why nothing happened.
        reason: IgnoreReason,
    },
}

/// Records every callback it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// The most recently committed value, if any.
    #[must_use]
    pub fn last_committed(&self) -> Option<f64> {
        self.events.iter().rev().find_map(|event| match *event {
            TraceEvent::Committed { value, .. } => Some(value),
            _ => None,
        })
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl InteractionTrace for TraceRecorder {
    fn located(&mut self, x: f64, location: TapLocation) {
        self.events.push(TraceEvent::Located { x, location });
    }

    fn committed(&mut self, previous: f64, value: f64) {
        self.events.push(TraceEvent::Committed { previous, value });
    }

    fn ignored(&mut self, x: f64, reason: IgnoreReason) {
        self.events.push(TraceEvent::Ignored { x, reason });
    }
}

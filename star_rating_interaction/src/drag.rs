// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: remember what the rating was before a drag, so a
//! cancelled drag can be undone.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`], passing the rating value
//!    at that moment.
//! 2) Let move events update the rating as usual; the session does not
//!    need to see them.
//! 3) Finish with [`DragSession::end`] to keep the new rating, or
//!    [`DragSession::cancel`] to get the original rating back.
//!
//! ## Minimal example
//!
//! ```
//! use star_rating_interaction::drag::DragSession;
//!
//! let mut drag = DragSession::default();
//!
//! drag.start(3.0);
//! assert!(drag.is_dragging());
//!
//! // Cancelling hands back the rating from before the drag.
//! assert_eq!(drag.cancel(), Some(3.0));
//! assert!(!drag.is_dragging());
//! ```

/// Tracks one rating drag from press to release.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragSession {
    /// Rating value when the drag started, or `None` while idle.
    pub value_at_start: Option<f64>,
}

impl DragSession {
    /// Starts a new drag while the rating is `value`.
    ///
    /// Any session already in progress is replaced.
    pub fn start(&mut self, value: f64) {
        self.value_at_start = Some(value);
    }

    /// Ends the drag, keeping whatever rating it produced.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Ends the drag and returns the rating from before it started.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn cancel(&mut self) -> Option<f64> {
        self.value_at_start.take()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.value_at_start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let drag = DragSession::default();
        assert!(!drag.is_dragging());
        assert!(drag.value_at_start.is_none());
    }

    #[test]
    fn start_records_value() {
        let mut drag = DragSession::default();
        drag.start(2.5);
        assert!(drag.is_dragging());
        assert_eq!(drag.value_at_start, Some(2.5));
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragSession::default();
        drag.start(4.0);

        drag.end();

        assert_eq!(drag, DragSession::default());
        assert_eq!(drag.cancel(), None, "nothing to restore after end");
    }

    #[test]
    fn cancel_returns_original_value_once() {
        let mut drag = DragSession::default();
        drag.start(4.0);

        assert_eq!(drag.cancel(), Some(4.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.cancel(), None);
    }

    #[test]
    fn start_replaces_previous_session() {
        let mut drag = DragSession::default();
        drag.start(1.0);
        drag.start(3.0);

        assert_eq!(drag.value_at_start, Some(3.0));
        assert_eq!(drag.cancel(), Some(3.0));
    }
}

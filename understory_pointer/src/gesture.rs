// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click and tap detection: the per-gesture record and the double-click window.

use core::time::Duration;

/// One press-to-release gesture on a surface.
///
/// A gesture completes as a click (or tap) only if it started on a shape, no
/// drag was observed while it was open, and it ends on that same shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gesture<K> {
    start: Option<K>,
    dragged: bool,
}

impl<K> Default for Gesture<K> {
    fn default() -> Self {
        Self {
            start: None,
            dragged: false,
        }
    }
}

impl<K: PartialEq> Gesture<K> {
    /// No gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture on `shape`, replacing any previous one.
    pub fn begin(&mut self, shape: K) {
        self.start = Some(shape);
        self.dragged = false;
    }

    /// Whether a gesture is in progress.
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// The shape the gesture started on.
    pub fn start_shape(&self) -> Option<&K> {
        self.start.as_ref()
    }

    /// Record that a drag happened while the gesture was open.
    pub fn observe_drag(&mut self) {
        if self.start.is_some() {
            self.dragged = true;
        }
    }

    /// Whether a drag was observed during the gesture.
    pub fn was_dragged(&self) -> bool {
        self.dragged
    }

    /// Whether releasing on `shape` completes the gesture as a click.
    pub fn completes_on(&self, shape: &K) -> bool {
        !self.dragged && self.start.as_ref() == Some(shape)
    }

    /// End the gesture.
    pub fn reset(&mut self) {
        self.start = None;
        self.dragged = false;
    }
}

/// A rolling double-click window.
///
/// Each completed click [`arm`](Self::arm)s the window, replacing any previous
/// deadline. A click while the window [`is_open`](Self::is_open) is a double
/// click; a third click inside the window is a double click again, not a
/// triple click. The window holds only a deadline, so there is no deferred
/// reset to outlive its owner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickWindow {
    deadline: Option<Duration>,
}

impl ClickWindow {
    /// A closed window.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Whether the window is open at `now`. It closes at its deadline.
    pub fn is_open(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Open the window from `now` for `window`.
    pub fn arm(&mut self, now: Duration, window: Duration) {
        self.deadline = Some(now.saturating_add(window));
    }

    /// Close the window immediately.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The instant the window closes, if armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

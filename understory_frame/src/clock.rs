// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame clock: one-shot "call me on the next frame" over a [`FrameHost`].
//!
//! The clock maps a schedule request to the host's native refresh primitive.
//! While a drag gesture is in progress it switches to a fixed-rate timer
//! instead, so pointer-driven frames arrive at a bounded, predictable rate even
//! on hosts that throttle or jitter their refresh callback. Hosts without a
//! native refresh primitive always get the timer.

use alloc::rc::Rc;
use core::time::Duration;

use crate::host::{FrameCallback, FrameHost};

/// Reports whether a drag-and-drop gesture is currently in progress.
///
/// Implemented by the embedding toolkit's drag subsystem and installed with
/// [`FrameClock::set_drag_probe`].
pub trait DragProbe {
    /// True while a drag is in progress.
    fn is_dragging(&self) -> bool;
}

/// Configuration for the [`FrameClock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    /// Delay used for the timer fallback (during drags, or without native refresh).
    pub fallback_interval: Duration,
}

impl ClockConfig {
    /// Sixty frames per second fallback.
    pub const DEFAULT: Self = Self {
        fallback_interval: Duration::from_micros(16_667),
    };
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Schedules single frame callbacks on a [`FrameHost`].
///
/// There is no queue: each [`schedule`](Self::schedule) call is forwarded to
/// the host as-is, and the frame loop only ever keeps one request outstanding.
pub struct FrameClock {
    host: Rc<dyn FrameHost>,
    config: ClockConfig,
    drag: Option<Rc<dyn DragProbe>>,
}

impl core::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameClock")
            .field("config", &self.config)
            .field("has_drag_probe", &self.drag.is_some())
            .finish_non_exhaustive()
    }
}

impl FrameClock {
    /// Create a clock over `host`.
    pub fn new(host: Rc<dyn FrameHost>, config: ClockConfig) -> Self {
        Self {
            host,
            config,
            drag: None,
        }
    }

    /// Install (or remove) the drag probe consulted on every schedule.
    pub fn set_drag_probe(&mut self, probe: Option<Rc<dyn DragProbe>>) {
        self.drag = probe;
    }

    /// The clock configuration.
    pub fn config(&self) -> ClockConfig {
        self.config
    }

    /// Current host time.
    pub fn now(&self) -> Duration {
        self.host.now()
    }

    /// Whether the next [`schedule`](Self::schedule) would use the timer fallback.
    pub fn uses_fallback(&self) -> bool {
        !self.host.has_native_refresh() || self.drag.as_ref().is_some_and(|d| d.is_dragging())
    }

    /// Run `callback` once, on the next frame.
    pub fn schedule(&self, callback: FrameCallback) {
        if self.uses_fallback() {
            tracing::trace!(
                delay = ?self.config.fallback_interval,
                "frame scheduled on timer fallback"
            );
            self.host.request_timeout(callback, self.config.fallback_interval);
        } else {
            self.host.request_refresh(callback);
        }
    }
}

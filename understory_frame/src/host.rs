// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host primitives the frame loop is driven by.
//!
//! The frame loop never owns a thread or a timer. It asks a [`FrameHost`] to call
//! it back, either on the next display refresh or after a fixed delay, and the
//! host passes the current monotonic timestamp into that callback.
//!
//! [`ManualHost`] is a deterministic host that queues requests until they are
//! fired explicitly. It is what the tests and demos in this workspace use.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::cell::{Cell, RefCell};
use core::time::Duration;

/// A one-shot callback receiving the host timestamp at which it runs.
pub type FrameCallback = Box<dyn FnOnce(Duration)>;

/// Scheduling primitives supplied by the embedding runtime.
///
/// Timestamps are durations since an arbitrary, fixed host origin and must be
/// monotonic. All methods take `&self`; hosts are single-threaded and use
/// interior mutability for their queues.
pub trait FrameHost {
    /// Current monotonic time.
    fn now(&self) -> Duration;

    /// Whether the host has a native display-refresh callback.
    ///
    /// When this returns `false`, [`FrameClock`](crate::FrameClock) uses
    /// [`request_timeout`](Self::request_timeout) for every frame.
    fn has_native_refresh(&self) -> bool {
        true
    }

    /// Run `callback` once, when the next display refresh is due.
    fn request_refresh(&self, callback: FrameCallback);

    /// Run `callback` once, after `delay` has elapsed.
    fn request_timeout(&self, callback: FrameCallback, delay: Duration);
}

/// How a callback was requested from a [`ManualHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Requested through [`FrameHost::request_refresh`].
    Refresh,
    /// Requested through [`FrameHost::request_timeout`] with the given delay.
    Timeout(Duration),
}

/// A host whose refresh and timer requests fire only when told to.
///
/// Requests are queued in order. [`fire_next_at`](Self::fire_next_at) pops one
/// and runs it at the given time; [`fire_pending_at`](Self::fire_pending_at)
/// runs everything that was queued when it was called, leaving requests made by
/// those callbacks for the next call.
pub struct ManualHost {
    now: Cell<Duration>,
    native: Cell<bool>,
    queue: RefCell<VecDeque<(RequestKind, FrameCallback)>>,
    last_request: Cell<Option<RequestKind>>,
}

impl core::fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualHost")
            .field("now", &self.now.get())
            .field("native", &self.native.get())
            .field("pending", &self.pending())
            .field("last_request", &self.last_request.get())
            .finish()
    }
}

impl Default for ManualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualHost {
    /// Create a host with a native refresh primitive, at time zero.
    pub fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            native: Cell::new(true),
            queue: RefCell::new(VecDeque::new()),
            last_request: Cell::new(None),
        }
    }

    /// Toggle whether the host reports a native refresh primitive.
    pub fn set_native_refresh(&self, native: bool) {
        self.native.set(native);
    }

    /// Set the current time without firing anything.
    pub fn set_now(&self, now: Duration) {
        self.now.set(now);
    }

    /// Number of queued callbacks.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// The kind of the most recent request, if any was made.
    pub fn last_request(&self) -> Option<RequestKind> {
        self.last_request.get()
    }

    /// Pop the oldest queued callback and run it at `now`.
    ///
    /// Returns `false` if nothing was queued.
    pub fn fire_next_at(&self, now: Duration) -> bool {
        let next = self.queue.borrow_mut().pop_front();
        let Some((_, callback)) = next else {
            return false;
        };
        self.now.set(now);
        callback(now);
        true
    }

    /// Run every callback queued at the time of the call, all at `now`.
    ///
    /// Returns how many callbacks ran.
    pub fn fire_pending_at(&self, now: Duration) -> usize {
        let count = self.pending();
        for _ in 0..count {
            self.fire_next_at(now);
        }
        count
    }

    fn push(&self, kind: RequestKind, callback: FrameCallback) {
        self.last_request.set(Some(kind));
        self.queue.borrow_mut().push_back((kind, callback));
    }
}

impl FrameHost for ManualHost {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn has_native_refresh(&self) -> bool {
        self.native.get()
    }

    fn request_refresh(&self, callback: FrameCallback) {
        self.push(RequestKind::Refresh, callback);
    }

    fn request_timeout(&self, callback: FrameCallback, delay: Duration) {
        self.push(RequestKind::Timeout(delay), callback);
    }
}

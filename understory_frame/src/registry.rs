// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation registry and its single shared frame loop.
//!
//! ## Loop
//!
//! The registry owns one loop for all of its animations:
//!
//! - [`register`](AnimationRegistry::register) starts the loop if it is idle by
//!   scheduling one iteration on the [`FrameClock`].
//! - Each iteration that finds animations runs [`tick`](AnimationRegistry::tick)
//!   and, if animations remain afterwards, schedules the next iteration.
//! - An iteration that finds the active set empty marks the loop idle and
//!   schedules nothing.
//!
//! [`unregister`](AnimationRegistry::unregister) never touches the loop. The
//! loop notices the empty set at its next iteration, so zero animations means
//! zero scheduled work, and a register that races an already scheduled
//! iteration never starts a second loop.
//!
//! ## Tick
//!
//! A tick snapshots the active set, then for each animation advances its timing,
//! runs its callback and collects its targets into a redraw set keyed by
//! [`SurfaceId`](crate::SurfaceId). After all callbacks ran, every surface in
//! the set is redrawn exactly once.
//!
//! Animations started by a callback join at the next tick. Animations stopped by
//! a callback are excluded from the next tick; this tick still runs them because
//! it works from the snapshot.
//!
//! Callbacks are not isolated from one another: a panicking callback unwinds out
//! of the tick and skips the remaining callbacks and the redraw.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::time::Duration;

use crate::animation::{Animation, AnimationEntry, AnimationId};
use crate::clock::{ClockConfig, DragProbe, FrameClock};
use crate::host::FrameHost;
use crate::surface::Surface;

/// Summary of one [`AnimationRegistry::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of callbacks that ran.
    pub animations: usize,
    /// Number of distinct surfaces redrawn.
    pub redrawn: usize,
}

pub(crate) struct RegistryInner {
    clock: RefCell<FrameClock>,
    active: RefCell<Vec<Rc<AnimationEntry>>>,
    running: Cell<bool>,
    next_id: Cell<u64>,
}

/// Registry of running animations, driving them from one shared frame loop.
///
/// This is a cheap, cloneable handle: clones share the same active set and loop.
/// Create one per host (typically one per process) and hand clones to whatever
/// creates animations. Tests create a fresh registry per case.
#[derive(Clone)]
pub struct AnimationRegistry {
    inner: Rc<RegistryInner>,
}

impl core::fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let active: Vec<AnimationId> = self.inner.active.borrow().iter().map(|e| e.id).collect();
        f.debug_struct("AnimationRegistry")
            .field("active", &active)
            .field("running", &self.inner.running.get())
            .field("clock", &*self.inner.clock.borrow())
            .field("next_id", &self.inner.next_id.get())
            .finish_non_exhaustive()
    }
}

impl AnimationRegistry {
    /// Create a registry driven by `host` with the default [`ClockConfig`].
    pub fn new(host: Rc<dyn FrameHost>) -> Self {
        Self::with_clock(FrameClock::new(host, ClockConfig::default()))
    }

    /// Create a registry driven by an explicit clock.
    pub fn with_clock(clock: FrameClock) -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                clock: RefCell::new(clock),
                active: RefCell::new(Vec::new()),
                running: Cell::new(false),
                next_id: Cell::new(0),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Rc<RegistryInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<RegistryInner> {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn next_id(&self) -> AnimationId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        AnimationId(id)
    }

    /// Install the drag probe used by the frame clock.
    pub fn set_drag_probe(&self, probe: Option<Rc<dyn DragProbe>>) {
        self.inner.clock.borrow_mut().set_drag_probe(probe);
    }

    /// Current host time.
    pub fn now(&self) -> Duration {
        self.inner.clock.borrow().now()
    }

    /// Add `animation` to the active set and make sure the loop is running.
    ///
    /// Registering an animation that is already active leaves the set unchanged.
    /// This does not touch the animation's timing; [`Animation::start`] is the
    /// entry point that also resets the baseline.
    pub fn register(&self, animation: &Animation) {
        self.register_entry(Rc::clone(animation.entry()));
    }

    pub(crate) fn register_entry(&self, entry: Rc<AnimationEntry>) {
        {
            let mut active = self.inner.active.borrow_mut();
            if !active.iter().any(|e| e.id == entry.id) {
                tracing::debug!(id = entry.id.get(), "animation registered");
                active.push(entry);
            }
        }
        self.ensure_loop();
    }

    /// Remove the animation with `id` from the active set, if present.
    pub fn unregister(&self, id: AnimationId) {
        let mut active = self.inner.active.borrow_mut();
        if let Some(pos) = active.iter().position(|e| e.id == id) {
            active.remove(pos);
            tracing::debug!(id = id.get(), "animation unregistered");
        }
    }

    /// Whether the animation with `id` is active.
    pub fn contains(&self, id: AnimationId) -> bool {
        self.inner.active.borrow().iter().any(|e| e.id == id)
    }

    /// Number of active animations.
    pub fn len(&self) -> usize {
        self.inner.active.borrow().len()
    }

    /// True if no animation is active.
    pub fn is_empty(&self) -> bool {
        self.inner.active.borrow().is_empty()
    }

    /// Whether a loop iteration is scheduled or in progress.
    pub fn is_loop_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Run one tick at host time `now`.
    ///
    /// This is what each loop iteration calls; it is public so hosts that own
    /// their own frame loop can drive the registry directly.
    pub fn tick(&self, now: Duration) -> TickReport {
        let snapshot: Vec<Rc<AnimationEntry>> = self.inner.active.borrow().clone();
        tracing::trace!(animations = snapshot.len(), "tick");

        let mut redraw: Vec<Rc<dyn Surface>> = Vec::new();
        for entry in &snapshot {
            entry.run_frame(now);
            for surface in entry.targets.borrow().iter() {
                let id = surface.surface_id();
                if !redraw.iter().any(|s| s.surface_id() == id) {
                    redraw.push(Rc::clone(surface));
                }
            }
        }

        for surface in &redraw {
            surface.redraw();
        }

        TickReport {
            animations: snapshot.len(),
            redrawn: redraw.len(),
        }
    }

    fn ensure_loop(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);
        tracing::debug!("frame loop started");
        self.schedule_iteration();
    }

    fn schedule_iteration(&self) {
        let weak = self.downgrade();
        self.inner.clock.borrow().schedule(Box::new(move |now| {
            if let Some(inner) = weak.upgrade() {
                Self::from_inner(inner).run_iteration(now);
            }
        }));
    }

    fn run_iteration(&self, now: Duration) {
        if !self.is_empty() {
            let guard = StopOnUnwind {
                running: &self.inner.running,
            };
            self.tick(now);
            core::mem::forget(guard);
        }
        if self.is_empty() {
            self.inner.running.set(false);
            tracing::debug!("frame loop quiesced");
        } else {
            self.schedule_iteration();
        }
    }
}

/// Clears the running flag if a tick unwinds, so the next registration
/// starts a fresh loop.
struct StopOnUnwind<'a> {
    running: &'a Cell<bool>,
}

impl Drop for StopOnUnwind<'_> {
    fn drop(&mut self) {
        self.running.set(false);
        tracing::debug!("frame loop stopped by a panicking callback");
    }
}

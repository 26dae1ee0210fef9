// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation handles: a per-frame callback plus the surfaces it redraws.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use crate::registry::{AnimationRegistry, RegistryInner};
use crate::surface::{Surface, Targets};
use crate::timing::FrameTiming;

/// Identifier of an animation, unique within its registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    /// The raw id value. Ids are handed out in increasing order.
    pub const fn get(self) -> u64 {
        self.0
    }
}

pub(crate) type FrameFn = dyn FnMut(&FrameTiming);

/// State shared between an [`Animation`] handle and the registry's active set.
pub(crate) struct AnimationEntry {
    pub(crate) id: AnimationId,
    callback: RefCell<Box<FrameFn>>,
    pub(crate) targets: RefCell<Targets>,
    timing: Cell<FrameTiming>,
}

impl AnimationEntry {
    /// Advance timing to `now` and run the callback once.
    pub(crate) fn run_frame(&self, now: core::time::Duration) {
        let mut timing = self.timing.get();
        timing.advance(now);
        self.timing.set(timing);
        // A callback that ticks its own registry re-entrantly would need a
        // second mutable borrow here; the frame loop never does that.
        (self.callback.borrow_mut())(&timing);
    }
}

/// A handle pairing a per-frame callback with zero or more redraw targets.
///
/// Handles are created detached. [`start`](Self::start) registers the handle
/// with its [`AnimationRegistry`] (resetting its timing baseline), and
/// [`stop`](Self::stop) removes it. Cloning a handle yields another handle to
/// the same animation.
///
/// The handle keeps only a weak link to its registry: once the registry is
/// dropped, `start` and `stop` do nothing and `is_running` is `false`.
#[derive(Clone)]
pub struct Animation {
    entry: Rc<AnimationEntry>,
    registry: Weak<RegistryInner>,
}

impl core::fmt::Debug for Animation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Animation")
            .field("id", &self.entry.id)
            .field("targets", &*self.entry.targets.borrow())
            .field("timing", &self.entry.timing.get())
            .finish_non_exhaustive()
    }
}

impl Animation {
    /// Create a detached animation in `registry`.
    ///
    /// `callback` runs once per tick while the animation is running.
    /// `targets` are redrawn after each tick; pass [`Targets::none()`] for an
    /// animation that never triggers a redraw itself.
    pub fn new(
        registry: &AnimationRegistry,
        callback: impl FnMut(&FrameTiming) + 'static,
        targets: impl Into<Targets>,
    ) -> Self {
        let entry = AnimationEntry {
            id: registry.next_id(),
            callback: RefCell::new(Box::new(callback)),
            targets: RefCell::new(targets.into()),
            timing: Cell::new(FrameTiming::starting_at(registry.now())),
        };
        Self {
            entry: Rc::new(entry),
            registry: registry.downgrade(),
        }
    }

    /// The animation id.
    pub fn id(&self) -> AnimationId {
        self.entry.id
    }

    /// Start (or restart) the animation.
    ///
    /// The timing baseline is reset to the current host time with zero delta and
    /// zero elapsed time. Starting a running animation is a reset, never a
    /// second registration.
    pub fn start(&self) {
        let Some(registry) = self.registry() else {
            return;
        };
        registry.unregister(self.entry.id);
        self.entry
            .timing
            .set(FrameTiming::starting_at(registry.now()));
        registry.register_entry(Rc::clone(&self.entry));
    }

    /// Stop the animation. Stopping a stopped animation does nothing.
    ///
    /// When called from inside a tick, the current tick still completes; the
    /// animation is excluded from the next one.
    pub fn stop(&self) {
        if let Some(registry) = self.registry() {
            registry.unregister(self.entry.id);
        }
    }

    /// Whether the animation is in its registry's active set.
    pub fn is_running(&self) -> bool {
        self.registry()
            .is_some_and(|registry| registry.contains(self.entry.id))
    }

    /// Add a redraw target. Returns `false` if a surface with the same id is
    /// already a target.
    pub fn add_target(&self, surface: Rc<dyn Surface>) -> bool {
        self.entry.targets.borrow_mut().add(surface)
    }

    /// Replace the redraw targets.
    pub fn set_targets(&self, targets: impl Into<Targets>) {
        *self.entry.targets.borrow_mut() = targets.into();
    }

    /// The current redraw targets.
    pub fn targets(&self) -> Targets {
        self.entry.targets.borrow().clone()
    }

    /// The timing record as of the most recent tick (or start).
    pub fn timing(&self) -> FrameTiming {
        self.entry.timing.get()
    }

    pub(crate) fn entry(&self) -> &Rc<AnimationEntry> {
        &self.entry
    }

    fn registry(&self) -> Option<AnimationRegistry> {
        self.registry.upgrade().map(AnimationRegistry::from_inner)
    }
}

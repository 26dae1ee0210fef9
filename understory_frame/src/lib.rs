// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Frame: one shared frame loop for many animations.
//!
//! ## Overview
//!
//! An [`Animation`] pairs a per-frame callback with the [`Surface`]s it wants
//! redrawn. Running animations live in an [`AnimationRegistry`], which drives
//! all of them from a single loop scheduled on a [`FrameClock`]:
//!
//! - Each tick runs every active callback with its own [`FrameTiming`]
//!   (elapsed time, delta since the previous tick, instantaneous frame rate).
//! - After the callbacks, every distinct target surface is redrawn once, no
//!   matter how many animations share it.
//! - The loop stops scheduling frames when no animation is active and resumes
//!   on the next start.
//!
//! ## Hosts
//!
//! The crate does not own threads or timers. A [`FrameHost`] supplies the
//! current time plus "call me on the next refresh" and "call me after a delay"
//! primitives. While a drag gesture is in progress (as reported by a
//! [`DragProbe`]), the clock switches to a fixed-rate timer so pointer-driven
//! frames arrive at a predictable rate.
//!
//! [`ManualHost`] fires requests only when told to, which makes the loop fully
//! deterministic:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use understory_frame::{Animation, AnimationRegistry, ManualHost, Targets};
//!
//! let host = Rc::new(ManualHost::new());
//! let registry = AnimationRegistry::new(host.clone());
//!
//! let x = Rc::new(Cell::new(0.0_f64));
//! let out = x.clone();
//! let slide = Animation::new(
//!     &registry,
//!     move |t| out.set(100.0 * t.elapsed.as_secs_f64()),
//!     Targets::none(),
//! );
//!
//! slide.start();
//! host.fire_pending_at(Duration::from_millis(500));
//! assert_eq!(x.get(), 50.0);
//!
//! slide.stop();
//! host.fire_pending_at(Duration::from_millis(516));
//! assert!(!registry.is_loop_running());
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`, `Cell`, `RefCell`). Callbacks may
//! start and stop animations, including themselves, while a tick is running.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod clock;
mod host;
mod registry;
mod surface;
mod timing;

pub use animation::{Animation, AnimationId};
pub use clock::{ClockConfig, DragProbe, FrameClock};
pub use host::{FrameCallback, FrameHost, ManualHost, RequestKind};
pub use registry::{AnimationRegistry, TickReport};
pub use surface::{Surface, SurfaceId, Targets};
pub use timing::FrameTiming;

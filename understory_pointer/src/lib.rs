// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pointer: per-surface pointer routing for retained scenes.
//!
//! ## Overview
//!
//! A [`PointerRouter`](crate::router::PointerRouter) receives the raw mouse and
//! touch samples for one surface and synthesizes shape-level events from them:
//!
//! - `mouseover`/`mouseenter` and `mouseout`/`mouseleave` when the shape under
//!   the mouse changes, plain `mousemove` while it stays the same.
//! - `mousedown`/`mouseup` and `touchstart`/`touchmove`/`touchend` on the shape
//!   under the pointer.
//! - `click`/`tap` when a press and release land on the same shape without a
//!   drag in between, followed by `dblclick`/`dbltap` inside a rolling window.
//!
//! It does not perform hit testing. Feed it a
//! [`HitSource`](crate::types::HitSource) (a closure works, or the color-key
//! raster adapter behind the `hit_raster_adapter` feature), a
//! [`DragDrop`](crate::types::DragDrop) subsystem, and a
//! [`Dispatcher`](crate::types::Dispatcher) that receives the events.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_pointer::router::{PointerRouter, RouterConfig};
//! use understory_pointer::types::{
//!     EventKind, NoDrag, PointerHit, RawKind, RawPointerEvent, ShapeEvent,
//! };
//!
//! // One shape, "button", covering the left half of a 100x100 surface.
//! let mut hits = |p: Point| (p.x < 50.0).then(|| PointerHit::opaque("button"));
//! let mut router = PointerRouter::new(RouterConfig::default());
//! let mut events: Vec<ShapeEvent<&str>> = Vec::new();
//!
//! for (kind, t) in [(RawKind::MouseDown, 0), (RawKind::MouseUp, 80)] {
//!     let raw = RawPointerEvent::mouse(kind, (10.0, 10.0), Duration::from_millis(t));
//!     router.route(&raw, &mut hits, &mut NoDrag, &mut events);
//! }
//!
//! let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
//! assert_eq!(kinds, [EventKind::MouseDown, EventKind::MouseUp, EventKind::Click]);
//! assert!(router.in_click_window(Duration::from_millis(200)));
//! ```
//!
//! ## Ordering
//!
//! Within one sample the router makes at most one hit query and dispatches
//! synchronously: leave before enter, release before click, click before double
//! click. Nothing is deferred; the double-click window is a deadline checked on
//! the next release.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod gesture;
pub mod hover;
pub mod router;
pub mod types;

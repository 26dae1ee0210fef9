// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for pointer routing: raw samples, shape events, hits, and the
//! collaborator seams (hit source, dispatcher, drag and drop).

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;

/// Kind of a raw sample delivered by the host for one surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RawKind {
    /// The mouse moved over the surface.
    MouseMove,
    /// A mouse button was pressed.
    MouseDown,
    /// A mouse button was released.
    MouseUp,
    /// The mouse left the surface.
    MouseOut,
    /// A touch contact began.
    TouchStart,
    /// A touch contact moved.
    TouchMove,
    /// A touch contact ended.
    TouchEnd,
}

impl RawKind {
    /// True for the touch kinds.
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchMove | Self::TouchEnd)
    }
}

/// One raw pointer sample in host client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPointerEvent {
    /// What happened.
    pub kind: RawKind,
    /// Mouse position in client coordinates, for mouse samples.
    pub client: Option<Point>,
    /// Active touch contacts in client coordinates, for touch samples.
    ///
    /// On touch end this lists the contacts still down, not the one lifted.
    pub touches: Vec<Point>,
    /// Host timestamp of the sample.
    pub time: Duration,
}

impl RawPointerEvent {
    /// A mouse sample at `client`.
    pub fn mouse(kind: RawKind, client: impl Into<Point>, time: Duration) -> Self {
        Self {
            kind,
            client: Some(client.into()),
            touches: Vec::new(),
            time,
        }
    }

    /// A touch sample with the given active contacts.
    pub fn touch(
        kind: RawKind,
        touches: impl IntoIterator<Item = Point>,
        time: Duration,
    ) -> Self {
        Self {
            kind,
            client: None,
            touches: touches.into_iter().collect(),
            time,
        }
    }
}

/// Events synthesized for shapes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// The pointer moved onto the shape (paired with [`MouseEnter`](Self::MouseEnter)).
    MouseOver,
    /// The pointer entered the shape.
    MouseEnter,
    /// The pointer moved off the shape (paired with [`MouseLeave`](Self::MouseLeave)).
    MouseOut,
    /// The pointer left the shape.
    MouseLeave,
    /// The pointer moved within the shape.
    MouseMove,
    /// A button was pressed over the shape.
    MouseDown,
    /// A button was released over the shape.
    MouseUp,
    /// Down and up landed on the same shape without a drag.
    Click,
    /// A click inside the double-click window of the previous one.
    DblClick,
    /// A touch began on the shape.
    TouchStart,
    /// A touch moved over the shape.
    TouchMove,
    /// A touch ended over the shape.
    TouchEnd,
    /// Touch start and end landed on the same shape without a drag.
    Tap,
    /// A tap inside the double-click window of the previous one.
    DblTap,
}

impl EventKind {
    /// The DOM-style event name (`"mouseover"`, `"dbltap"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseOver => "mouseover",
            Self::MouseEnter => "mouseenter",
            Self::MouseOut => "mouseout",
            Self::MouseLeave => "mouseleave",
            Self::MouseMove => "mousemove",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Tap => "tap",
            Self::DblTap => "dbltap",
        }
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An event delivered to one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeEvent<K> {
    /// What happened.
    pub kind: EventKind,
    /// The shape receiving the event.
    pub target: K,
    /// For over/enter the previous target, for out/leave the next one.
    pub related: Option<K>,
    /// Pointer position in surface coordinates, if known.
    pub position: Option<Point>,
    /// Host timestamp of the raw sample.
    pub time: Duration,
}

/// A shape found under a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerHit<K> {
    /// The shape.
    pub shape: K,
    /// Whether the pixel is fully opaque. Only opaque hits change the hover target.
    pub opaque: bool,
}

impl<K> PointerHit<K> {
    /// A fully opaque hit on `shape`.
    pub fn opaque(shape: K) -> Self {
        Self {
            shape,
            opaque: true,
        }
    }
}

/// Resolves a surface point to the topmost shape under it.
///
/// Implementations must answer from the current scene, refreshing any cached
/// raster before reading it. The router calls this at most once per sample.
pub trait HitSource<K> {
    /// The topmost shape at `point`, if any.
    fn hit_test(&mut self, point: Point) -> Option<PointerHit<K>>;
}

impl<K, F: FnMut(Point) -> Option<PointerHit<K>>> HitSource<K> for F {
    fn hit_test(&mut self, point: Point) -> Option<PointerHit<K>> {
        self(point)
    }
}

/// Receives synthesized shape events, in order.
///
/// Delivery is synchronous. A panicking dispatcher unwinds out of
/// [`PointerRouter::route`](crate::router::PointerRouter::route) and the rest
/// of that sample's events are not delivered.
pub trait Dispatcher<K> {
    /// Deliver one event.
    fn dispatch(&mut self, event: ShapeEvent<K>);
}

impl<K> Dispatcher<K> for Vec<ShapeEvent<K>> {
    fn dispatch(&mut self, event: ShapeEvent<K>) {
        self.push(event);
    }
}

/// Adapts a closure into a [`Dispatcher`].
#[derive(Clone, Debug)]
pub struct FnDispatcher<F>(pub F);

impl<K, F: FnMut(ShapeEvent<K>)> Dispatcher<K> for FnDispatcher<F> {
    fn dispatch(&mut self, event: ShapeEvent<K>) {
        (self.0)(event);
    }
}

/// The drag-and-drop subsystem, consulted but not owned by the router.
pub trait DragDrop {
    /// True while a drag is in progress.
    fn is_dragging(&self) -> bool;

    /// True once a drag has been initiated and is waiting for movement.
    fn is_drag_ready(&self) -> bool;

    /// Initiate a drag of the whole surface.
    fn start_drag(&mut self, event: &RawPointerEvent);

    /// Feed a move sample to an initiated or running drag.
    fn process_drag(&mut self, event: &RawPointerEvent);
}

/// A drag subsystem that never drags.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDrag;

impl DragDrop for NoDrag {
    fn is_dragging(&self) -> bool {
        false
    }

    fn is_drag_ready(&self) -> bool {
        false
    }

    fn start_drag(&mut self, _event: &RawPointerEvent) {}

    fn process_drag(&mut self, _event: &RawPointerEvent) {}
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer router: turns raw pointer samples for one surface into shape events.
//!
//! ## Samples
//!
//! Each call to [`PointerRouter::route`] handles one raw sample:
//!
//! - The stored mouse or touch position is updated first, in surface
//!   coordinates (client coordinates minus the content offset). Touch samples
//!   update the touch position only when exactly one contact is down.
//! - At most one hit query is made, at the mouse position for mouse samples and
//!   at the touch position for touch samples.
//! - The derived events are dispatched synchronously, leave before enter and
//!   click before double click.
//!
//! ## Clicks
//!
//! A press on a shape starts a gesture. A release on the same shape, with no
//! drag observed in between, fires `click` (or `tap`). If the previous click on
//! this surface was less than [`RouterConfig::double_click_window`] ago, a
//! `dblclick` (or `dbltap`) follows. Clicks and taps share the window.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;

use crate::gesture::{ClickWindow, Gesture};
use crate::hover::{HoverTarget, HoverTransition};
use crate::types::{
    DragDrop, Dispatcher, EventKind, HitSource, PointerHit, RawKind, RawPointerEvent, ShapeEvent,
};

/// Router configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    /// How long after a click a second click counts as a double click.
    pub double_click_window: Duration,
    /// Whether a press starts a drag of the whole surface.
    pub draggable: bool,
}

impl RouterConfig {
    /// A 400 ms double-click window on a surface that does not drag.
    pub const DEFAULT: Self = Self {
        double_click_window: Duration::from_millis(400),
        draggable: false,
    };
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Channel {
    Mouse,
    Touch,
}

impl Channel {
    fn press(self) -> EventKind {
        match self {
            Self::Mouse => EventKind::MouseDown,
            Self::Touch => EventKind::TouchStart,
        }
    }

    fn release(self) -> EventKind {
        match self {
            Self::Mouse => EventKind::MouseUp,
            Self::Touch => EventKind::TouchEnd,
        }
    }

    fn click(self) -> EventKind {
        match self {
            Self::Mouse => EventKind::Click,
            Self::Touch => EventKind::Tap,
        }
    }

    fn double(self) -> EventKind {
        match self {
            Self::Mouse => EventKind::DblClick,
            Self::Touch => EventKind::DblTap,
        }
    }
}

/// Pointer state for one surface.
///
/// `K` is the shape key produced by the [`HitSource`]; it is compared by
/// equality to decide whether the hovered shape changed and whether a release
/// landed on the pressed shape.
#[derive(Clone, Debug)]
pub struct PointerRouter<K> {
    config: RouterConfig,
    offset: Point,
    mouse: Option<Point>,
    touch: Option<Point>,
    hover: HoverTarget<K>,
    click: Gesture<K>,
    tap: Gesture<K>,
    window: ClickWindow,
}

impl<K: Clone + PartialEq> Default for PointerRouter<K> {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl<K: Clone + PartialEq> PointerRouter<K> {
    /// A router with nothing hovered and no gesture in progress.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            offset: Point::ORIGIN,
            mouse: None,
            touch: None,
            hover: HoverTarget::new(),
            click: Gesture::new(),
            tap: Gesture::new(),
            window: ClickWindow::new(),
        }
    }

    /// The configuration.
    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// Replace the configuration. An open double-click window keeps its deadline.
    pub fn set_config(&mut self, config: RouterConfig) {
        self.config = config;
    }

    /// Set the surface's on-screen origin in client coordinates.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// The surface's on-screen origin in client coordinates.
    pub fn content_offset(&self) -> Point {
        self.offset
    }

    /// Last mouse position in surface coordinates; `None` after the mouse left.
    pub fn mouse_position(&self) -> Option<Point> {
        self.mouse
    }

    /// Last single-contact touch position in surface coordinates.
    pub fn touch_position(&self) -> Option<Point> {
        self.touch
    }

    /// The touch position if known, else the mouse position.
    pub fn pointer_position(&self) -> Option<Point> {
        self.touch.or(self.mouse)
    }

    /// The shape currently under the mouse, if any.
    pub fn target(&self) -> Option<&K> {
        self.hover.current()
    }

    /// Whether a click at `now` would be a double click.
    pub fn in_click_window(&self, now: Duration) -> bool {
        self.window.is_open(now)
    }

    /// Close the double-click window.
    pub fn cancel_click_window(&mut self) {
        self.window.cancel();
    }

    /// Route one raw sample.
    ///
    /// `hits` resolves positions to shapes, `drag` is the drag-and-drop
    /// subsystem, and `out` receives the synthesized events in order.
    pub fn route(
        &mut self,
        raw: &RawPointerEvent,
        hits: &mut impl HitSource<K>,
        drag: &mut impl DragDrop,
        out: &mut impl Dispatcher<K>,
    ) {
        self.update_positions(raw);
        self.note_drag(&*drag);
        tracing::trace!(kind = ?raw.kind, "pointer sample");
        match raw.kind {
            RawKind::MouseMove => self.mouse_move(raw, hits, drag, out),
            RawKind::MouseDown => self.press(Channel::Mouse, raw, hits, drag, out),
            RawKind::MouseUp => self.release(Channel::Mouse, raw, hits, out),
            RawKind::MouseOut => self.mouse_out(raw, &*drag, out),
            RawKind::TouchStart => self.press(Channel::Touch, raw, hits, drag, out),
            RawKind::TouchMove => self.touch_move(raw, hits, drag, out),
            RawKind::TouchEnd => self.release(Channel::Touch, raw, hits, out),
        }
        self.note_drag(&*drag);
    }

    fn update_positions(&mut self, raw: &RawPointerEvent) {
        let offset = self.offset.to_vec2();
        if raw.kind.is_touch() {
            if let [touch] = raw.touches.as_slice() {
                self.touch = Some(*touch - offset);
            }
        } else if let Some(client) = raw.client {
            self.mouse = Some(client - offset);
        }
    }

    fn note_drag(&mut self, drag: &impl DragDrop) {
        if drag.is_dragging() {
            self.click.observe_drag();
            self.tap.observe_drag();
        }
    }

    fn position(&self, channel: Channel) -> Option<Point> {
        match channel {
            Channel::Mouse => self.mouse,
            Channel::Touch => self.touch,
        }
    }

    fn gesture_mut(&mut self, channel: Channel) -> &mut Gesture<K> {
        match channel {
            Channel::Mouse => &mut self.click,
            Channel::Touch => &mut self.tap,
        }
    }

    fn hit_at(&self, channel: Channel, hits: &mut impl HitSource<K>) -> Option<PointerHit<K>> {
        let point = self.position(channel)?;
        let hit = hits.hit_test(point);
        tracing::trace!(x = point.x, y = point.y, hit = hit.is_some(), "hit query");
        hit
    }

    fn mouse_move(
        &mut self,
        raw: &RawPointerEvent,
        hits: &mut impl HitSource<K>,
        drag: &mut impl DragDrop,
        out: &mut impl Dispatcher<K>,
    ) {
        let position = self.mouse;
        match self.hit_at(Channel::Mouse, hits) {
            Some(hit) => {
                let changes = !drag.is_dragging()
                    && hit.opaque
                    && self.hover.current() != Some(&hit.shape);
                if changes {
                    let transitions = self.hover.enter(hit.shape);
                    emit_hover(out, transitions, position, raw.time);
                } else {
                    emit(out, EventKind::MouseMove, hit.shape, None, position, raw.time);
                }
            }
            None => {
                if !drag.is_dragging() {
                    let transitions = self.hover.clear();
                    emit_hover(out, transitions, position, raw.time);
                }
            }
        }
        drag.process_drag(raw);
    }

    fn mouse_out(
        &mut self,
        raw: &RawPointerEvent,
        drag: &impl DragDrop,
        out: &mut impl Dispatcher<K>,
    ) {
        if !drag.is_dragging() {
            let transitions = self.hover.clear();
            emit_hover(out, transitions, self.mouse, raw.time);
        }
        self.mouse = None;
    }

    fn touch_move(
        &mut self,
        raw: &RawPointerEvent,
        hits: &mut impl HitSource<K>,
        drag: &mut impl DragDrop,
        out: &mut impl Dispatcher<K>,
    ) {
        if let Some(hit) = self.hit_at(Channel::Touch, hits) {
            emit(out, EventKind::TouchMove, hit.shape, None, self.touch, raw.time);
        }
        drag.process_drag(raw);
    }

    fn press(
        &mut self,
        channel: Channel,
        raw: &RawPointerEvent,
        hits: &mut impl HitSource<K>,
        drag: &mut impl DragDrop,
        out: &mut impl Dispatcher<K>,
    ) {
        let position = self.position(channel);
        match self.hit_at(channel, hits) {
            Some(hit) => {
                self.gesture_mut(channel).begin(hit.shape.clone());
                emit(out, channel.press(), hit.shape, None, position, raw.time);
            }
            None => self.gesture_mut(channel).reset(),
        }
        if self.config.draggable && !drag.is_drag_ready() && !drag.is_dragging() {
            tracing::debug!("surface drag initiated");
            drag.start_drag(raw);
        }
    }

    fn release(
        &mut self,
        channel: Channel,
        raw: &RawPointerEvent,
        hits: &mut impl HitSource<K>,
        out: &mut impl Dispatcher<K>,
    ) {
        let position = self.position(channel);
        if let Some(hit) = self.hit_at(channel, hits) {
            let clicked = self.gesture_mut(channel).completes_on(&hit.shape);
            emit(
                out,
                channel.release(),
                hit.shape.clone(),
                None,
                position,
                raw.time,
            );
            if clicked {
                let double = self.window.is_open(raw.time);
                emit(
                    out,
                    channel.click(),
                    hit.shape.clone(),
                    None,
                    position,
                    raw.time,
                );
                if double {
                    emit(out, channel.double(), hit.shape, None, position, raw.time);
                }
                self.window.arm(raw.time, self.config.double_click_window);
            }
        }
        self.gesture_mut(channel).reset();
    }
}

fn emit<K>(
    out: &mut impl Dispatcher<K>,
    kind: EventKind,
    target: K,
    related: Option<K>,
    position: Option<Point>,
    time: Duration,
) {
    tracing::trace!(event = kind.name(), "shape event");
    out.dispatch(ShapeEvent {
        kind,
        target,
        related,
        position,
        time,
    });
}

fn emit_hover<K: Clone>(
    out: &mut impl Dispatcher<K>,
    transitions: Vec<HoverTransition<K>>,
    position: Option<Point>,
    time: Duration,
) {
    for transition in transitions {
        match transition {
            HoverTransition::Leave { target, related } => {
                emit(
                    out,
                    EventKind::MouseOut,
                    target.clone(),
                    related.clone(),
                    position,
                    time,
                );
                emit(out, EventKind::MouseLeave, target, related, position, time);
            }
            HoverTransition::Enter { target, related } => {
                emit(
                    out,
                    EventKind::MouseOver,
                    target.clone(),
                    related.clone(),
                    position,
                    time,
                );
                emit(out, EventKind::MouseEnter, target, related, position, time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    use crate::types::EventKind::*;

    /// Shape `'a'` covers x < 50, shape `'b'` covers 50 <= x < 100.
    fn scene(p: Point) -> Option<PointerHit<char>> {
        if !(0.0..100.0).contains(&p.y) {
            return None;
        }
        match p.x {
            x if (0.0..50.0).contains(&x) => Some(PointerHit::opaque('a')),
            x if (50.0..100.0).contains(&x) => Some(PointerHit::opaque('b')),
            _ => None,
        }
    }

    #[derive(Debug, Default)]
    struct ScriptedDrag {
        ready: bool,
        dragging: bool,
        drag_on_move: bool,
        started: u32,
        processed: u32,
    }

    impl DragDrop for ScriptedDrag {
        fn is_dragging(&self) -> bool {
            self.dragging
        }

        fn is_drag_ready(&self) -> bool {
            self.ready
        }

        fn start_drag(&mut self, _event: &RawPointerEvent) {
            self.ready = true;
            self.started += 1;
        }

        fn process_drag(&mut self, _event: &RawPointerEvent) {
            self.processed += 1;
            if self.ready && self.drag_on_move {
                self.dragging = true;
            }
        }
    }

    struct Rig {
        router: PointerRouter<char>,
        drag: ScriptedDrag,
        events: Vec<ShapeEvent<char>>,
    }

    impl Rig {
        fn new(config: RouterConfig) -> Self {
            Self {
                router: PointerRouter::new(config),
                drag: ScriptedDrag::default(),
                events: Vec::new(),
            }
        }

        fn send(&mut self, raw: RawPointerEvent) {
            let mut hits = scene;
            self.router
                .route(&raw, &mut hits, &mut self.drag, &mut self.events);
        }

        fn mouse(&mut self, kind: RawKind, x: f64, at_ms: u64) {
            self.send(RawPointerEvent::mouse(kind, (x, 10.0), ms(at_ms)));
        }

        fn click(&mut self, x: f64, at_ms: u64) {
            self.mouse(RawKind::MouseDown, x, at_ms);
            self.mouse(RawKind::MouseUp, x, at_ms + 5);
        }

        fn take(&mut self) -> Vec<(EventKind, char)> {
            self.events.drain(..).map(|e| (e.kind, e.target)).collect()
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn enter_once_then_move() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 200.0, 0);
        rig.mouse(RawKind::MouseMove, 10.0, 16);
        rig.mouse(RawKind::MouseMove, 20.0, 32);
        assert_eq!(
            rig.take(),
            [(MouseOver, 'a'), (MouseEnter, 'a'), (MouseMove, 'a')]
        );
        assert_eq!(rig.router.target(), Some(&'a'));
    }

    #[test]
    fn switching_shapes_leaves_before_entering() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 10.0, 0);
        rig.take();
        rig.mouse(RawKind::MouseMove, 60.0, 16);
        let events = core::mem::take(&mut rig.events);
        let summary: Vec<_> = events
            .iter()
            .map(|e| (e.kind, e.target, e.related))
            .collect();
        assert_eq!(
            summary,
            [
                (MouseOut, 'a', Some('b')),
                (MouseLeave, 'a', Some('b')),
                (MouseOver, 'b', Some('a')),
                (MouseEnter, 'b', Some('a')),
            ]
        );
        assert_eq!(events[0].position, Some(Point::new(60.0, 10.0)));
    }

    #[test]
    fn moving_off_every_shape_clears_target() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 10.0, 0);
        rig.mouse(RawKind::MouseMove, 300.0, 16);
        rig.mouse(RawKind::MouseMove, 310.0, 32);
        assert_eq!(
            rig.take(),
            [
                (MouseOver, 'a'),
                (MouseEnter, 'a'),
                (MouseOut, 'a'),
                (MouseLeave, 'a')
            ]
        );
        assert_eq!(rig.router.target(), None);
    }

    #[test]
    fn two_clicks_in_window_fire_double_click() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.click(10.0, 0);
        rig.click(10.0, 100);
        assert_eq!(
            rig.take(),
            [
                (MouseDown, 'a'),
                (MouseUp, 'a'),
                (Click, 'a'),
                (MouseDown, 'a'),
                (MouseUp, 'a'),
                (Click, 'a'),
                (DblClick, 'a'),
            ]
        );
    }

    #[test]
    fn third_click_in_window_is_another_double_click() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.click(10.0, 0);
        rig.click(10.0, 100);
        rig.click(10.0, 200);
        let doubles = rig.take().iter().filter(|(k, _)| *k == DblClick).count();
        assert_eq!(doubles, 2, "the window re-arms; there is no triple click");
    }

    #[test]
    fn window_expires() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.click(10.0, 0);
        assert!(rig.router.in_click_window(ms(300)));
        rig.click(10.0, 600);
        assert!(!rig.take().contains(&(DblClick, 'a')));
    }

    #[test]
    fn cancelled_window_does_not_double() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.click(10.0, 0);
        rig.router.cancel_click_window();
        rig.click(10.0, 100);
        assert!(!rig.take().contains(&(DblClick, 'a')));
    }

    #[test]
    fn release_on_other_shape_is_not_a_click() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseDown, 10.0, 0);
        rig.mouse(RawKind::MouseUp, 60.0, 10);
        assert_eq!(rig.take(), [(MouseDown, 'a'), (MouseUp, 'b')]);
        assert!(!rig.router.in_click_window(ms(20)));
    }

    #[test]
    fn release_after_pressing_empty_space_is_not_a_click() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseDown, 200.0, 0);
        rig.mouse(RawKind::MouseUp, 10.0, 10);
        assert_eq!(rig.take(), [(MouseUp, 'a')]);
    }

    #[test]
    fn drag_during_gesture_suppresses_click() {
        let mut rig = Rig::new(RouterConfig {
            draggable: true,
            ..RouterConfig::DEFAULT
        });
        rig.drag.drag_on_move = true;
        rig.mouse(RawKind::MouseDown, 10.0, 0);
        assert_eq!(rig.drag.started, 1);
        rig.mouse(RawKind::MouseMove, 20.0, 16);
        assert!(rig.drag.is_dragging());
        // The drag ends before the release reaches the surface.
        rig.drag.dragging = false;
        rig.drag.ready = false;
        rig.mouse(RawKind::MouseUp, 20.0, 32);
        assert_eq!(
            rig.take(),
            [
                (MouseDown, 'a'),
                (MouseOver, 'a'),
                (MouseEnter, 'a'),
                (MouseUp, 'a')
            ]
        );
    }

    #[test]
    fn drag_is_not_restarted_while_ready() {
        let mut rig = Rig::new(RouterConfig {
            draggable: true,
            ..RouterConfig::DEFAULT
        });
        rig.mouse(RawKind::MouseDown, 10.0, 0);
        rig.mouse(RawKind::MouseDown, 10.0, 5);
        assert_eq!(rig.drag.started, 1);
    }

    #[test]
    fn non_draggable_surface_never_starts_a_drag() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.click(10.0, 0);
        rig.mouse(RawKind::MouseMove, 10.0, 20);
        assert_eq!(rig.drag.started, 0);
        assert_eq!(rig.drag.processed, 1, "moves are always forwarded");
    }

    #[test]
    fn dragging_keeps_hover_target() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 10.0, 0);
        rig.take();
        rig.drag.dragging = true;
        rig.mouse(RawKind::MouseMove, 300.0, 16);
        rig.mouse(RawKind::MouseMove, 60.0, 32);
        rig.send(RawPointerEvent::mouse(RawKind::MouseOut, (400.0, 10.0), ms(48)));
        assert_eq!(rig.take(), [(MouseMove, 'b')]);
        assert_eq!(rig.router.target(), Some(&'a'));
        assert_eq!(rig.router.mouse_position(), None);
    }

    #[test]
    fn mouse_out_leaves_and_forgets_position() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 10.0, 0);
        rig.take();
        rig.send(RawPointerEvent::mouse(RawKind::MouseOut, (10.0, 10.0), ms(16)));
        assert_eq!(rig.take(), [(MouseOut, 'a'), (MouseLeave, 'a')]);
        assert_eq!(rig.router.mouse_position(), None);
        assert_eq!(rig.router.pointer_position(), None);
        assert_eq!(rig.router.target(), None);
    }

    #[test]
    fn translucent_hit_moves_without_entering() {
        let mut router = PointerRouter::new(RouterConfig::DEFAULT);
        let mut events = Vec::new();
        let mut hits = |_: Point| {
            Some(PointerHit {
                shape: 'a',
                opaque: false,
            })
        };
        let raw = RawPointerEvent::mouse(RawKind::MouseMove, (5.0, 5.0), ms(0));
        router.route(&raw, &mut hits, &mut crate::types::NoDrag, &mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, MouseMove);
        assert_eq!(router.target(), None);
    }

    #[test]
    fn taps_and_double_taps() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        for t in [0, 100] {
            rig.send(RawPointerEvent::touch(
                RawKind::TouchStart,
                [Point::new(70.0, 10.0)],
                ms(t),
            ));
            rig.send(RawPointerEvent::touch(RawKind::TouchEnd, [], ms(t + 5)));
        }
        assert_eq!(
            rig.take(),
            [
                (TouchStart, 'b'),
                (TouchEnd, 'b'),
                (Tap, 'b'),
                (TouchStart, 'b'),
                (TouchEnd, 'b'),
                (Tap, 'b'),
                (DblTap, 'b'),
            ]
        );
    }

    #[test]
    fn touch_move_reports_shape_and_feeds_drag() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.send(RawPointerEvent::touch(
            RawKind::TouchMove,
            [Point::new(20.0, 10.0)],
            ms(0),
        ));
        assert_eq!(rig.take(), [(TouchMove, 'a')]);
        assert_eq!(rig.drag.processed, 1);
    }

    #[test]
    fn multi_touch_is_not_tracked() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.send(RawPointerEvent::touch(
            RawKind::TouchStart,
            [Point::new(10.0, 10.0), Point::new(60.0, 10.0)],
            ms(0),
        ));
        assert_eq!(rig.router.touch_position(), None);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn content_offset_is_subtracted() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.router.set_content_offset(Point::new(100.0, 0.0));
        rig.mouse(RawKind::MouseMove, 110.0, 0);
        assert_eq!(rig.router.mouse_position(), Some(Point::new(10.0, 10.0)));
        assert_eq!(rig.take(), [(MouseOver, 'a'), (MouseEnter, 'a')]);
    }

    #[test]
    fn pointer_position_prefers_touch() {
        let mut rig = Rig::new(RouterConfig::DEFAULT);
        rig.mouse(RawKind::MouseMove, 10.0, 0);
        assert_eq!(rig.router.pointer_position(), Some(Point::new(10.0, 10.0)));
        rig.send(RawPointerEvent::touch(
            RawKind::TouchMove,
            [Point::new(70.0, 20.0)],
            ms(16),
        ));
        assert_eq!(rig.router.pointer_position(), Some(Point::new(70.0, 20.0)));
    }

    #[test]
    fn at_most_one_hit_query_per_sample() {
        let queries = Cell::new(0_u32);
        let mut hits = |p: Point| {
            queries.set(queries.get() + 1);
            scene(p)
        };
        let mut router = PointerRouter::new(RouterConfig::DEFAULT);
        let mut drag = ScriptedDrag::default();
        let mut events = Vec::new();
        let samples = vec![
            RawPointerEvent::mouse(RawKind::MouseMove, (10.0, 10.0), ms(0)),
            RawPointerEvent::mouse(RawKind::MouseMove, (60.0, 10.0), ms(1)),
            RawPointerEvent::mouse(RawKind::MouseDown, (60.0, 10.0), ms(2)),
            RawPointerEvent::mouse(RawKind::MouseUp, (60.0, 10.0), ms(3)),
            RawPointerEvent::mouse(RawKind::MouseOut, (60.0, 10.0), ms(4)),
        ];
        for raw in &samples {
            router.route(raw, &mut hits, &mut drag, &mut events);
        }
        assert_eq!(queries.get(), 4, "mouse out does not query");
    }
}

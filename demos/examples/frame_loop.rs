// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two animations sharing one layer.
//!
//! Both animations target the same layer, yet each tick redraws it once. The
//! loop stops on its own once both animations are stopped.
//!
//! Run:
//! - `cargo run -p understory_demos --example frame_loop`
//! - `RUST_LOG=trace cargo run -p understory_demos --example frame_loop`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_frame::{
    Animation, AnimationRegistry, ManualHost, Surface, SurfaceId, Targets,
};

struct Layer {
    id: u64,
    redraws: Cell<u32>,
}

impl Surface for Layer {
    fn surface_id(&self) -> SurfaceId {
        SurfaceId(self.id)
    }

    fn redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn size(&self) -> (u32, u32) {
        (640, 480)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = Rc::new(ManualHost::new());
    let registry = AnimationRegistry::new(host.clone());
    let layer = Rc::new(Layer {
        id: 1,
        redraws: Cell::new(0),
    });

    let x = Rc::new(Cell::new(0.0_f64));
    let angle = Rc::new(Cell::new(0.0_f64));

    let slide = {
        let x = x.clone();
        Animation::new(
            &registry,
            move |t| x.set(200.0 * t.elapsed.as_secs_f64()),
            Targets::one(layer.clone()),
        )
    };
    let spin = {
        let angle = angle.clone();
        Animation::new(
            &registry,
            move |t| angle.set(angle.get() + 90.0 * t.delta.as_secs_f64()),
            Targets::one(layer.clone()),
        )
    };

    slide.start();
    spin.start();

    let frame = Duration::from_micros(16_667);
    for n in 1..=6_u32 {
        host.fire_pending_at(frame * n);
        println!(
            "tick {n}: x = {:6.2}, angle = {:5.2}, rate = {:4.1} fps, layer redraws = {}",
            x.get(),
            angle.get(),
            slide.timing().frame_rate,
            layer.redraws.get()
        );
    }

    slide.stop();
    spin.stop();
    host.fire_pending_at(frame * 7);
    println!(
        "stopped: loop running = {}, pending frames = {}",
        registry.is_loop_running(),
        host.pending()
    );
}

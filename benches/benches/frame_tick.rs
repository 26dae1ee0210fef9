// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_frame::{Animation, AnimationRegistry, ManualHost, Surface, SurfaceId, Targets};

struct Layer {
    id: u64,
    redraws: Cell<u64>,
}

impl Surface for Layer {
    fn surface_id(&self) -> SurfaceId {
        SurfaceId(self.id)
    }

    fn redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn size(&self) -> (u32, u32) {
        (1, 1)
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_tick");
    for &(animations, layers) in &[(10_usize, 1_u64), (100, 10), (1_000, 10), (1_000, 1_000)] {
        let host = Rc::new(ManualHost::new());
        let registry = AnimationRegistry::new(host);
        let surfaces: Vec<Rc<Layer>> = (0..layers)
            .map(|id| {
                Rc::new(Layer {
                    id,
                    redraws: Cell::new(0),
                })
            })
            .collect();
        let sink = Rc::new(Cell::new(0.0_f64));
        let handles: Vec<Animation> = (0..animations)
            .map(|i| {
                let sink = sink.clone();
                let target: Rc<dyn Surface> = surfaces[i % surfaces.len()].clone();
                Animation::new(
                    &registry,
                    move |t| sink.set(sink.get() + t.delta.as_secs_f64()),
                    Targets::one(target),
                )
            })
            .collect();
        for h in &handles {
            h.start();
        }

        group.throughput(Throughput::Elements(animations as u64));
        let mut now = Duration::ZERO;
        group.bench_function(format!("{animations}_anims_{layers}_layers"), |b| {
            b.iter(|| {
                now += Duration::from_micros(16_667);
                black_box(registry.tick(now))
            });
        });
        black_box(sink.get());
    }
    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);

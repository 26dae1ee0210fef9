// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer routing over a color-key raster.
//!
//! Replays a scripted stream of raw mouse and touch samples against two shapes
//! and prints the synthesized shape events.
//!
//! Run:
//! - `cargo run -p understory_demos --example pointer_clicks`

use std::time::Duration;

use kurbo::{Circle, Point, Rect};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use understory_hit::{HitDraw, HitRaster, KeyRegistry, KeyedShape};
use understory_pointer::adapters::hit_raster::RasterHits;
use understory_pointer::router::{PointerRouter, RouterConfig};
use understory_pointer::types::{FnDispatcher, NoDrag, RawKind, RawPointerEvent, ShapeEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(7));
    let square = keys.allocate("square")?;
    let dot = keys.allocate("dot")?;
    let scene: Vec<Box<dyn HitDraw>> = vec![
        Box::new(KeyedShape::new(square, Rect::new(10.0, 10.0, 90.0, 90.0))),
        Box::new(KeyedShape::new(dot, Circle::new((150.0, 50.0), 30.0))),
    ];
    let mut raster = HitRaster::new(200, 100)?;

    let mut router = PointerRouter::new(RouterConfig::default());
    // The surface sits at (100, 50) in client coordinates.
    router.set_content_offset(Point::new(100.0, 50.0));

    let ms = Duration::from_millis;
    let mouse = |kind, x: f64, y: f64, t| RawPointerEvent::mouse(kind, (x + 100.0, y + 50.0), ms(t));
    let touch = |kind, at: Option<(f64, f64)>, t| {
        let touches = at.map(|(x, y)| Point::new(x + 100.0, y + 50.0));
        RawPointerEvent::touch(kind, touches, ms(t))
    };

    let samples = [
        mouse(RawKind::MouseMove, 5.0, 5.0, 0),
        mouse(RawKind::MouseMove, 40.0, 40.0, 16),
        mouse(RawKind::MouseMove, 45.0, 40.0, 32),
        mouse(RawKind::MouseDown, 45.0, 40.0, 100),
        mouse(RawKind::MouseUp, 45.0, 40.0, 180),
        mouse(RawKind::MouseDown, 45.0, 40.0, 300),
        mouse(RawKind::MouseUp, 45.0, 40.0, 380),
        mouse(RawKind::MouseMove, 150.0, 50.0, 400),
        mouse(RawKind::MouseDown, 150.0, 50.0, 420),
        mouse(RawKind::MouseUp, 45.0, 40.0, 480),
        mouse(RawKind::MouseOut, 250.0, 40.0, 500),
        touch(RawKind::TouchStart, Some((150.0, 50.0)), 2000),
        touch(RawKind::TouchEnd, None, 2060),
    ];

    let mut out = FnDispatcher(|e: ShapeEvent<&str>| {
        println!(
            "{:>5} ms  {:<10} {:<6} related={:?}",
            e.time.as_millis(),
            e.kind.name(),
            e.target,
            e.related
        );
    });
    tracing::info!(samples = samples.len(), "replaying pointer samples");
    for raw in &samples {
        let mut hits = RasterHits::new(&mut raster, &scene, &keys);
        router.route(raw, &mut hits, &mut NoDrag, &mut out);
    }
    Ok(())
}
